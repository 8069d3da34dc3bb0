// Copyright 2025 the Spline Pen Authors
// SPDX-License-Identifier: Apache-2.0

//! Pen tool for appending knots
//!
//! Pressing appends a knot under the pointer. Dragging before release pulls
//! out its outgoing handle while the incoming handle mirrors it through the
//! knot. Releasing commits the knot and decides which handles stay visible.

use crate::editing::{EditSession, MouseDelegate, MouseEvent};
use crate::model::{Curve, HandleSide};
use crate::tools::{Tool, ToolId};

// ===== PenTool Struct =====

/// The pen tool
#[derive(Debug, Clone, Default)]
pub struct PenTool {
    /// Index of the knot being placed, between press and release
    placing: Option<usize>,
}

impl PenTool {
    /// Index of the knot currently being placed
    pub fn placing(&self) -> Option<usize> {
        self.placing
    }
}

// ===== Tool Implementation =====

impl Tool for PenTool {
    fn id(&self) -> ToolId {
        ToolId::Pen
    }

    fn is_busy(&self) -> bool {
        self.placing.is_some()
    }
}

// ===== MouseDelegate Implementation =====

impl MouseDelegate for PenTool {
    type Data = EditSession;

    fn left_down(&mut self, event: MouseEvent, data: &mut EditSession) {
        if let Some(index) = self.placing {
            tracing::debug!("Pen: press while placing knot {}, ignored", index);
            return;
        }

        match data.curve.append_knot(event.pos) {
            Ok(index) => {
                tracing::debug!("Pen: placing knot {} at {:?}", index, event.pos);
                self.placing = Some(index);
            }
            Err(e) => {
                tracing::debug!("Pen: {}", e);
            }
        }
    }

    fn mouse_moved(&mut self, event: MouseEvent, data: &mut EditSession) {
        let Some(index) = self.placing else {
            return;
        };
        match data.curve.try_knot_mut(index) {
            Ok(knot) => knot.mirror_handles(event.pos),
            Err(e) => {
                tracing::debug!("Pen: dropping stale placement: {}", e);
                self.placing = None;
            }
        }
    }

    fn left_up(&mut self, event: MouseEvent, data: &mut EditSession) {
        if self.placing.is_none() {
            return;
        }
        self.mouse_moved(event, data);
        if let Some(index) = self.placing.take() {
            finish_knot(&mut data.curve, index);
        }
    }

    fn cancel(&mut self, data: &mut EditSession) {
        // Leaving the pen mid-drag commits the knot as it stands
        if let Some(index) = self.placing.take() {
            finish_knot(&mut data.curve, index);
        }
    }
}

// ===== Helper Functions =====

/// Commit a placed knot.
///
/// The new knot's outgoing handle is hidden until a following knot exists.
/// Its incoming handle shows unless it starts the curve, and the previous
/// knot's outgoing handle shows now that its segment is complete.
fn finish_knot(curve: &mut Curve, index: usize) {
    let Some(knot) = curve.knot_mut(index) else {
        return;
    };
    knot.handle_mut(HandleSide::Outgoing).active = false;
    knot.handle_mut(HandleSide::Incoming).active = index > 0;

    if let Some(previous) = index.checked_sub(1).and_then(|i| curve.knot_mut(i)) {
        previous.handle_mut(HandleSide::Outgoing).active = true;
    }

    tracing::debug!("Pen: finished knot {}", index);
}
