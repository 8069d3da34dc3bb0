// Copyright 2025 the Spline Pen Authors
// SPDX-License-Identifier: Apache-2.0

//! Select tool for moving knots and handles

use crate::editing::hit_test::hit_test;
use crate::editing::{EditSession, MouseDelegate, MouseEvent, Selection};
use crate::tools::{Tool, ToolId};

// ===== SelectTool Struct =====

/// The select tool
#[derive(Debug, Clone, Default)]
pub struct SelectTool {
    /// What is held between press and release
    selection: Option<Selection>,
}

impl SelectTool {
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }
}

// ===== Tool Implementation =====

impl Tool for SelectTool {
    fn id(&self) -> ToolId {
        ToolId::Select
    }

    fn is_busy(&self) -> bool {
        self.selection.is_some()
    }
}

// ===== MouseDelegate Implementation =====

impl MouseDelegate for SelectTool {
    type Data = EditSession;

    fn left_down(&mut self, event: MouseEvent, data: &mut EditSession) {
        self.selection = hit_test(&data.curve, event.pos, data.hit_radius);
        tracing::debug!("Select: picked {:?} at {:?}", self.selection, event.pos);
    }

    fn mouse_moved(&mut self, event: MouseEvent, data: &mut EditSession) {
        let Some(selection) = self.selection else {
            return;
        };

        let knot = match data.curve.try_knot_mut(selection.knot_index()) {
            Ok(knot) => knot,
            Err(e) => {
                tracing::debug!("Select: dropping stale selection: {}", e);
                self.selection = None;
                return;
            }
        };

        match selection {
            Selection::Knot(_) => knot.move_to(event.pos),
            Selection::ControlPoint { handle, .. } => {
                knot.handle_mut(handle).position = event.pos;
            }
        }
        tracing::trace!("Select: moved {:?} to {:?}", selection, event.pos);
    }

    fn left_up(&mut self, _event: MouseEvent, _data: &mut EditSession) {
        if let Some(selection) = self.selection.take() {
            tracing::debug!("Select: released {:?}", selection);
        }
    }

    fn cancel(&mut self, _data: &mut EditSession) {
        self.selection = None;
    }
}
