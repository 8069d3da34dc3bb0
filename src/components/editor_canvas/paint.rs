// Copyright 2025 the Spline Pen Authors
// SPDX-License-Identifier: Apache-2.0

//! Paint helper methods for EditorWidget

use super::EditorWidget;
use crate::render::draw_session;
use crate::theme;
use masonry::kurbo::Size;
use masonry::util::fill_color;
use masonry::vello::Scene;
use std::time::Instant;

impl EditorWidget {
    // ============================================================================
    // PAINT HELPER METHODS
    // ============================================================================

    pub(super) fn paint_background(&self, scene: &mut Scene, canvas_size: Size) {
        let bg_rect = canvas_size.to_rect();
        fill_color(scene, &bg_rect, theme::canvas::BACKGROUND);
    }

    /// Step the playback cursor by the time since the previous paint
    pub(super) fn advance_playback(&mut self) {
        let now = Instant::now();
        if let Some(last) = self.last_frame.replace(now) {
            let elapsed = now.duration_since(last).as_secs_f64();
            self.session.advance_playback(elapsed);
            let playback = &self.session.playback;
            tracing::trace!(
                "playback at u = {:.3}, point {:?}",
                playback.position(),
                playback.sample(&self.session.curve)
            );
        }
    }

    pub(super) fn paint_session(&self, scene: &mut Scene) {
        draw_session(scene, &self.session, &self.style);
    }
}
