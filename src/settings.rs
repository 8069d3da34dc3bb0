// Copyright 2025 the Spline Pen Authors
// SPDX-License-Identifier: Apache-2.0

//! Application settings and default constants.
//!
//! This module holds non-visual settings that stay stable across theme
//! changes. Visual styling (colors, stroke widths) belongs in `theme.rs`.
//! Every value here can be overridden at runtime through `Config`.

// ============================================================================
// CURVE SETTINGS
// ============================================================================
/// Maximum number of knots a curve can hold
const MAX_KNOTS: usize = 256;

/// Number of tangent handles attached to each knot (incoming, outgoing)
const CONTROL_POINTS_PER_KNOT: usize = 2;

/// Parameter step used when sampling a segment into a polyline
const SAMPLE_STEP: f64 = 0.01;

/// Largest knot capacity a config may ask for
const MAX_KNOTS_LIMIT: usize = 65_536;

/// Finest sampling step a config may ask for (10 000 samples per segment)
const MIN_SAMPLE_STEP: f64 = 1e-4;

// ============================================================================
// INTERACTION SETTINGS
// ============================================================================
/// Radius of knot circles, also used as the hit radius for knots and handles
const KNOT_RADIUS: f64 = 15.0;

/// Radius of handle circles
const CONTROL_POINT_RADIUS: f64 = 10.0;

// ============================================================================
// PLAYBACK SETTINGS
// ============================================================================
/// Curve parameter units advanced per second of elapsed time
const PLAYBACK_SPEED: f64 = 0.5;

// ============================================================================
// WINDOW SETTINGS
// ============================================================================
const WINDOW_WIDTH: f64 = 1600.0;
const WINDOW_HEIGHT: f64 = 900.0;
const WINDOW_TITLE: &str = "Bézier spline";

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Curve storage and evaluation
pub mod curve {
    /// Default knot capacity
    pub const MAX_KNOTS: usize = super::MAX_KNOTS;

    /// Handles per knot
    pub const CONTROL_POINTS_PER_KNOT: usize = super::CONTROL_POINTS_PER_KNOT;

    /// Default polyline sampling step
    pub const SAMPLE_STEP: f64 = super::SAMPLE_STEP;

    /// Upper bound on a configured capacity
    pub const MAX_KNOTS_LIMIT: usize = super::MAX_KNOTS_LIMIT;

    /// Lower bound on a sampling step
    pub const MIN_SAMPLE_STEP: f64 = super::MIN_SAMPLE_STEP;
}

/// Pointer interaction
pub mod interaction {
    /// Knot radius and hit radius
    pub const KNOT_RADIUS: f64 = super::KNOT_RADIUS;

    /// Handle radius
    pub const CONTROL_POINT_RADIUS: f64 = super::CONTROL_POINT_RADIUS;
}

/// Playback cursor
pub mod playback {
    pub const SPEED: f64 = super::PLAYBACK_SPEED;
}

/// Main window
pub mod window {
    pub const WIDTH: f64 = super::WINDOW_WIDTH;
    pub const HEIGHT: f64 = super::WINDOW_HEIGHT;
    pub const TITLE: &str = super::WINDOW_TITLE;
}
