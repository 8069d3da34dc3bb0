// Copyright 2025 the Spline Pen Authors
// SPDX-License-Identifier: Apache-2.0

//! Knots and their tangent handles.
//!
//! Every knot owns exactly two control points: the incoming handle, which
//! shapes the segment ending at the knot, and the outgoing handle, which
//! shapes the segment starting at it. Inactive handles keep their position
//! but are neither drawn nor hit-tested.

use crate::geometry::reflect;
use crate::settings;
use kurbo::Point;

/// Which of a knot's two handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleSide {
    /// Handle facing the previous knot (index 0)
    Incoming,
    /// Handle facing the next knot (index 1)
    Outgoing,
}

impl HandleSide {
    /// Both sides in scan order
    pub const ALL: [HandleSide; settings::curve::CONTROL_POINTS_PER_KNOT] =
        [HandleSide::Incoming, HandleSide::Outgoing];

    /// Storage index of this handle
    pub fn index(self) -> usize {
        match self {
            HandleSide::Incoming => 0,
            HandleSide::Outgoing => 1,
        }
    }
}

/// A tangent handle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    pub position: Point,
    pub active: bool,
}

impl ControlPoint {
    pub fn new(position: Point) -> Self {
        Self {
            position,
            active: true,
        }
    }
}

/// An anchor the spline passes through
#[derive(Debug, Clone, PartialEq)]
pub struct Knot {
    pub position: Point,
    control_points: [ControlPoint; settings::curve::CONTROL_POINTS_PER_KNOT],
}

impl Knot {
    /// Create a knot with both handles active and collapsed onto it
    pub fn new(position: Point) -> Self {
        Self {
            position,
            control_points: [ControlPoint::new(position); 2],
        }
    }

    pub fn handle(&self, side: HandleSide) -> &ControlPoint {
        &self.control_points[side.index()]
    }

    pub fn handle_mut(&mut self, side: HandleSide) -> &mut ControlPoint {
        &mut self.control_points[side.index()]
    }

    /// Iterate the handles that are currently active, in scan order
    pub fn active_handles(&self) -> impl Iterator<Item = (HandleSide, &ControlPoint)> {
        HandleSide::ALL
            .into_iter()
            .map(move |side| (side, self.handle(side)))
            .filter(|(_, cp)| cp.active)
    }

    /// Place the outgoing handle at `cursor` and the incoming handle
    /// opposite it, keeping both collinear and equidistant through the knot
    pub fn mirror_handles(&mut self, cursor: Point) {
        let anchor = self.position;
        self.handle_mut(HandleSide::Outgoing).position = cursor;
        self.handle_mut(HandleSide::Incoming).position = reflect(cursor, anchor);
    }

    /// Move the knot to `position`, carrying both handles along
    pub fn move_to(&mut self, position: Point) {
        let delta = position - self.position;
        self.position = position;
        for cp in &mut self.control_points {
            cp.position += delta;
        }
    }
}
