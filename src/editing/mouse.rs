// Copyright 2025 the Spline Pen Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer events as seen by tools

use kurbo::Point;

/// A primary-button pointer event in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseEvent {
    pub pos: Point,
}

impl MouseEvent {
    pub fn new(pos: Point) -> Self {
        Self { pos }
    }
}

/// Receiver of pointer events.
///
/// Every method defaults to a no-op so a delegate only handles the events
/// it cares about. Events that do not fit the delegate's current state
/// must be absorbed rather than treated as errors.
pub trait MouseDelegate {
    type Data;

    /// Primary button pressed
    fn left_down(&mut self, _event: MouseEvent, _data: &mut Self::Data) {}

    /// Pointer moved, with or without the button held
    fn mouse_moved(&mut self, _event: MouseEvent, _data: &mut Self::Data) {}

    /// Primary button released
    fn left_up(&mut self, _event: MouseEvent, _data: &mut Self::Data) {}

    /// The delegate is being replaced mid-interaction
    fn cancel(&mut self, _data: &mut Self::Data) {}
}
