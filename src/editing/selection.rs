// Copyright 2025 the Spline Pen Authors
// SPDX-License-Identifier: Apache-2.0

//! What the select tool is currently holding.
//!
//! At most one thing is selected at a time, and only for the duration of a
//! press-drag-release gesture.

use crate::model::HandleSide;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// A knot body; dragging it carries both handles along
    Knot(usize),
    /// One handle of a knot; dragging it moves only that handle
    ControlPoint { knot: usize, handle: HandleSide },
}

impl Selection {
    /// Index of the knot the selection belongs to
    pub fn knot_index(&self) -> usize {
        match *self {
            Selection::Knot(index) => index,
            Selection::ControlPoint { knot, .. } => knot,
        }
    }
}
