// Copyright 2025 the Spline Pen Authors
// SPDX-License-Identifier: Apache-2.0

//! Turning an edit session into draw calls.
//!
//! The renderer knows nothing about the backend. It talks to a
//! [`DrawTarget`], which the canvas widget implements on a Vello scene and
//! tests implement with a recorder.

use crate::config::Config;
use crate::editing::EditSession;
use crate::geometry::sample_segment;
use crate::theme;
use kurbo::Point;
use peniko::Color;

/// The three primitives the editor needs from a backend
pub trait DrawTarget {
    fn fill_circle(&mut self, center: Point, radius: f64, color: Color);

    fn line(&mut self, from: Point, to: Point, width: f64, color: Color);

    /// An open polyline through `points`
    fn polyline(&mut self, points: &[Point], width: f64, color: Color);
}

/// Sizes and colors used when drawing a session
#[derive(Debug, Clone, Copy)]
pub struct RenderStyle {
    pub knot_radius: f64,
    pub control_point_radius: f64,
    pub handle_line_width: f64,
    pub curve_width: f64,
    pub sample_step: f64,
    pub curve_color: Color,
    pub knot_color: Color,
    pub handle_line_color: Color,
    pub handle_fill_color: Color,
}

impl RenderStyle {
    pub fn from_config(config: &Config) -> Self {
        Self {
            knot_radius: config.knot_radius,
            control_point_radius: config.control_point_radius,
            handle_line_width: config.handle_line_width,
            curve_width: config.curve_width,
            sample_step: config.sample_step,
            curve_color: theme::curve::STROKE,
            knot_color: theme::curve::KNOT,
            handle_line_color: theme::handle::LINE,
            handle_fill_color: theme::handle::FILL,
        }
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Draw the curve, then handle lines, then knots with their handles on top
pub fn draw_session(target: &mut impl DrawTarget, session: &EditSession, style: &RenderStyle) {
    let knots = session.curve.knots();

    let mut points = Vec::new();
    for segment in session.curve.segments() {
        points.clear();
        points.extend(sample_segment(&segment, style.sample_step));
        target.polyline(&points, style.curve_width, style.curve_color);
    }

    for knot in knots {
        for (_, cp) in knot.active_handles() {
            target.line(
                knot.position,
                cp.position,
                style.handle_line_width,
                style.handle_line_color,
            );
        }
    }

    for knot in knots {
        target.fill_circle(knot.position, style.knot_radius, style.knot_color);
        for (_, cp) in knot.active_handles() {
            target.fill_circle(
                cp.position,
                style.control_point_radius,
                style.handle_fill_color,
            );
        }
    }
}
