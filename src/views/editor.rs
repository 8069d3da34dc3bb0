// Copyright 2025 the Spline Pen Authors
// SPDX-License-Identifier: Apache-2.0

//! Editor view - the canvas with a status label floating over it

use masonry::properties::types::UnitPoint;
use xilem::WidgetView;
use xilem::style::Style;
use xilem::view::{ChildAlignment, ZStackExt, label, transformed, zstack};

use crate::components::editor_view;
use crate::data::AppState;
use crate::theme;

/// The whole window content: canvas below, status in the top-left corner
pub fn editor_window(state: &mut AppState) -> impl WidgetView<AppState> + use<> {
    const MARGIN: f64 = theme::size::UI_PANEL_MARGIN;

    zstack((
        editor_view(state.config.clone(), |state: &mut AppState, status| {
            state.set_status(status);
        }),
        transformed(
            label(state.status.to_string())
                .text_size(14.0)
                .color(theme::text::STATUS),
        )
        .translate((MARGIN, MARGIN))
        .alignment(ChildAlignment::SelfAligned(UnitPoint::TOP_LEFT)),
    ))
}
