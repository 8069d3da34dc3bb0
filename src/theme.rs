// Copyright 2025 the Spline Pen Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors and constants
//!
//! All colors use hexadecimal format: Color::from_rgb8(0xRR, 0xGG, 0xBB)

use masonry::vello::peniko::Color;

// ============================================================================
// BASE COLORS
// ============================================================================
const BASE_B: Color = Color::from_rgb8(0x18, 0x18, 0x18);
const BASE_I: Color = Color::from_rgb8(0x90, 0x90, 0x90);

// ============================================================================
// CANVAS
// ============================================================================
const CANVAS_BACKGROUND: Color = BASE_B;

// ============================================================================
// CURVE AND KNOTS
// ============================================================================
const CURVE_STROKE: Color = Color::from_rgb8(0xe6, 0x29, 0x37);
const KNOT_FILL: Color = Color::from_rgb8(0xe6, 0x29, 0x37);

// ============================================================================
// CONTROL POINT HANDLES
// ============================================================================
const HANDLE_LINE: Color = Color::from_rgb8(0x00, 0x79, 0xf1);
const HANDLE_FILL: Color = Color::from_rgb8(0x00, 0x79, 0xf1);

// ============================================================================
// UI TEXT
// ============================================================================
const STATUS_TEXT: Color = BASE_I;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Colors for the editor canvas
pub mod canvas {
    use super::Color;
    pub const BACKGROUND: Color = super::CANVAS_BACKGROUND;
}

/// Colors for the spline and its knots
pub mod curve {
    use super::Color;
    pub const STROKE: Color = super::CURVE_STROKE;
    pub const KNOT: Color = super::KNOT_FILL;
}

/// Colors for tangent handles
pub mod handle {
    use super::Color;
    pub const LINE: Color = super::HANDLE_LINE;
    pub const FILL: Color = super::HANDLE_FILL;
}

/// Colors for overlay text
pub mod text {
    use super::Color;
    pub const STATUS: Color = super::STATUS_TEXT;
}

/// Sizes for rendering
pub mod size {
    /// Width of the lines joining a knot to its handles
    pub const HANDLE_LINE_WIDTH: f64 = 2.0;

    /// Width of the sampled curve polyline
    pub const CURVE_STROKE_WIDTH: f64 = 1.0;

    /// Margin from screen edges for floating UI panels
    pub const UI_PANEL_MARGIN: f64 = 16.0;
}
