// Copyright 2025 the Spline Pen Authors
// SPDX-License-Identifier: Apache-2.0

//! Spline editor canvas widget - the single canvas the editor draws into

mod drawing;
mod keyboard;
mod paint;
mod pointer;
mod view;

pub use view::editor_view;

use crate::config::Config;
use crate::editing::{EditSession, SessionStatus};
use crate::render::RenderStyle;
use masonry::accesskit::{Node, Role};
use masonry::core::{
    AccessCtx, BoxConstraints, ChildrenIds, EventCtx, LayoutCtx, PaintCtx, PointerButton,
    PointerButtonEvent, PointerEvent, PointerUpdate, PropertiesMut, PropertiesRef, RegisterCtx,
    TextEvent, Update, UpdateCtx, Widget,
};
use masonry::kurbo::Size;
use masonry::vello::Scene;
use std::time::Instant;

/// The spline editor canvas widget
///
/// Owns the edit session outright. The app state only sees the
/// `SessionStatus` summaries this widget emits as actions.
pub struct EditorWidget {
    /// The editing session
    pub session: EditSession,

    /// Sizes and colors for drawing
    pub(super) style: RenderStyle,

    /// Canvas size
    pub(super) size: Size,

    /// Time of the previous paint, for advancing playback
    pub(super) last_frame: Option<Instant>,

    /// Last status sent to the app, to avoid redundant rebuilds
    pub(super) last_status: Option<SessionStatus>,
}

impl EditorWidget {
    pub fn new(config: &Config) -> Self {
        Self {
            session: EditSession::new(config),
            style: RenderStyle::from_config(config),
            size: Size::new(config.window_width, config.window_height),
            last_frame: None,
            last_status: None,
        }
    }

    /// Emit the session status if it changed since the last emission
    pub(super) fn emit_status(&mut self, ctx: &mut EventCtx<'_>) {
        let status = self.session.status();
        if self.last_status == Some(status) {
            return;
        }
        self.last_status = Some(status);
        tracing::debug!("[EditorWidget] status: {}", status);
        ctx.submit_action::<SessionStatus>(status);
    }
}

impl Widget for EditorWidget {
    type Action = SessionStatus;

    fn accepts_focus(&self) -> bool {
        // Keyboard commands arrive through focus
        true
    }

    fn register_children(&mut self, _ctx: &mut RegisterCtx<'_>) {}

    fn update(
        &mut self,
        _ctx: &mut UpdateCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        _event: &Update,
    ) {
    }

    fn layout(
        &mut self,
        _ctx: &mut LayoutCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        bc: &BoxConstraints,
    ) -> Size {
        // Fill the window
        let size = bc.max();
        self.size = size;
        size
    }

    fn paint(&mut self, ctx: &mut PaintCtx<'_>, _props: &PropertiesRef<'_>, scene: &mut Scene) {
        self.paint_background(scene, ctx.size());
        self.advance_playback();
        self.paint_session(scene);
    }

    fn on_pointer_event(
        &mut self,
        ctx: &mut EventCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        event: &PointerEvent,
    ) {
        match event {
            PointerEvent::Down(PointerButtonEvent {
                button: Some(PointerButton::Primary),
                state,
                ..
            }) => {
                self.handle_pointer_down(ctx, state);
            }

            PointerEvent::Move(PointerUpdate { current, .. }) => {
                self.handle_pointer_move(ctx, current);
            }

            PointerEvent::Up(PointerButtonEvent {
                button: Some(PointerButton::Primary),
                state,
                ..
            }) => {
                self.handle_pointer_up(ctx, state);
            }

            PointerEvent::Cancel(_) => {
                self.handle_pointer_cancel(ctx);
            }

            _ => {}
        }
    }

    fn on_text_event(
        &mut self,
        ctx: &mut EventCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        event: &TextEvent,
    ) {
        if let TextEvent::Keyboard(key_event) = event {
            self.handle_key(ctx, key_event);
        }
    }

    fn accessibility_role(&self) -> Role {
        Role::Canvas
    }

    fn accessibility(
        &mut self,
        _ctx: &mut AccessCtx<'_>,
        _props: &PropertiesRef<'_>,
        node: &mut Node,
    ) {
        node.set_label(format!("Spline editor: {}", self.session.status()));
    }

    fn children_ids(&self) -> ChildrenIds {
        ChildrenIds::new()
    }
}
