// Copyright 2025 the Spline Pen Authors
// SPDX-License-Identifier: Apache-2.0

//! Curve data model

pub mod curve;
pub mod knot;
pub mod playback;

pub use curve::{Curve, CurveError};
pub use knot::{ControlPoint, HandleSide, Knot};
pub use playback::PlaybackCursor;
