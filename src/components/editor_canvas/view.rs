// Copyright 2025 the Spline Pen Authors
// SPDX-License-Identifier: Apache-2.0

//! Xilem View wrapper for EditorWidget

use super::EditorWidget;
use crate::config::Config;
use crate::editing::SessionStatus;
use std::marker::PhantomData;
use std::sync::Arc;
use xilem::core::{MessageContext, MessageResult, Mut, View, ViewMarker};
use xilem::{Pod, ViewCtx};

/// Create an editor view with a callback for status changes
///
/// The widget owns the edit session; the app only hears about it through
/// the status callback.
pub fn editor_view<State, F>(config: Arc<Config>, on_status: F) -> EditorView<State, F>
where
    F: Fn(&mut State, SessionStatus),
{
    EditorView {
        config,
        on_status,
        phantom: PhantomData,
    }
}

/// The Xilem View for EditorWidget
#[must_use = "View values do nothing unless provided to Xilem."]
pub struct EditorView<State, F> {
    config: Arc<Config>,
    on_status: F,
    phantom: PhantomData<fn() -> State>,
}

impl<State, F> ViewMarker for EditorView<State, F> {}

impl<State: 'static, F: Fn(&mut State, SessionStatus) + 'static> View<State, (), ViewCtx>
    for EditorView<State, F>
{
    type Element = Pod<EditorWidget>;
    type ViewState = ();

    fn build(&self, ctx: &mut ViewCtx, _app_state: &mut State) -> (Self::Element, Self::ViewState) {
        let widget = EditorWidget::new(&self.config);
        let pod = ctx.create_pod(widget);
        ctx.record_action(pod.new_widget.id());
        (pod, ())
    }

    fn rebuild(
        &self,
        prev: &Self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        _element: Mut<'_, Self::Element>,
        _app_state: &mut State,
    ) {
        // The config is fixed for the lifetime of the window, and the
        // session lives in the widget, so there is nothing to push down
        if !Arc::ptr_eq(&self.config, &prev.config) {
            tracing::warn!("[EditorView::rebuild] config changed after startup, ignored");
        }
    }

    fn teardown(
        &self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        _element: Mut<'_, Self::Element>,
    ) {
    }

    fn message(
        &self,
        _view_state: &mut Self::ViewState,
        message: &mut MessageContext,
        _element: Mut<'_, Self::Element>,
        app_state: &mut State,
    ) -> MessageResult<()> {
        match message.take_message::<SessionStatus>() {
            Some(status) => {
                (self.on_status)(app_state, *status);
                // Propagate so the status label is rebuilt
                MessageResult::Action(())
            }
            None => MessageResult::Stale,
        }
    }
}
