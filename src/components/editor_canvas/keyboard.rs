// Copyright 2025 the Spline Pen Authors
// SPDX-License-Identifier: Apache-2.0

//! Keyboard event handlers for EditorWidget

use super::EditorWidget;
use crate::editing::Command;
use masonry::core::EventCtx;
use masonry::core::keyboard::{Key, KeyState, KeyboardEvent};

impl EditorWidget {
    /// Map single-letter keys to editor commands
    pub(super) fn handle_key(&mut self, ctx: &mut EventCtx<'_>, key_event: &KeyboardEvent) {
        if key_event.state != KeyState::Down {
            return;
        }

        let Key::Character(c) = &key_event.key else {
            return;
        };
        let Some(command) = Command::from_key(c.as_str()) else {
            return;
        };

        self.session.apply_command(command);
        ctx.set_handled();
        ctx.request_render();
        self.emit_status(ctx);
    }
}
