// Copyright 2025 the Spline Pen Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer event handlers for EditorWidget

use super::EditorWidget;
use masonry::core::{EventCtx, PointerState};

impl EditorWidget {
    // ============================================================================
    // POINTER EVENT HANDLERS
    // ============================================================================

    pub(super) fn handle_pointer_down(&mut self, ctx: &mut EventCtx<'_>, state: &PointerState) {
        ctx.request_focus();
        ctx.capture_pointer();

        let local_pos = ctx.local_position(state.position);
        tracing::debug!(
            "[EditorWidget] Down at {:?}, tool: {:?}",
            local_pos,
            self.session.tool_id()
        );

        self.session.mouse_down(local_pos);
        ctx.request_render();
        self.emit_status(ctx);
    }

    pub(super) fn handle_pointer_move(&mut self, ctx: &mut EventCtx<'_>, current: &PointerState) {
        // Hovering changes nothing; only repaint while a gesture is live
        if !self.session.current_tool.is_busy() {
            return;
        }

        let local_pos = ctx.local_position(current.position);
        self.session.mouse_moved(local_pos);
        ctx.request_render();
    }

    pub(super) fn handle_pointer_up(&mut self, ctx: &mut EventCtx<'_>, state: &PointerState) {
        let local_pos = ctx.local_position(state.position);
        self.session.mouse_up(local_pos);

        ctx.release_pointer();
        ctx.request_render();
        self.emit_status(ctx);
    }

    pub(super) fn handle_pointer_cancel(&mut self, ctx: &mut EventCtx<'_>) {
        tracing::debug!("[EditorWidget] pointer lost, cancelling gesture");
        self.session.cancel_gesture();
        ctx.request_render();
        self.emit_status(ctx);
    }
}
