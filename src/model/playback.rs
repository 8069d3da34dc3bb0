// Copyright 2025 the Spline Pen Authors
// SPDX-License-Identifier: Apache-2.0

//! Playback cursor that walks along the curve over time.
//!
//! The cursor position `u` runs over `[0, knot_count - 1)`: the integer part
//! picks a segment and the fraction is the parameter inside it. It is
//! advanced once per painted frame but nothing draws it.

use super::curve::Curve;
use crate::geometry::evaluate_de_casteljau;
use crate::settings;
use kurbo::Point;

#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackCursor {
    u: f64,
    speed: f64,
}

impl PlaybackCursor {
    pub fn new(speed: f64) -> Self {
        Self { u: 0.0, speed }
    }

    pub fn position(&self) -> f64 {
        self.u
    }

    /// Advance by `elapsed` seconds, wrapping to the start once the cursor
    /// runs off the last segment
    pub fn advance(&mut self, elapsed: f64, knot_count: usize) {
        self.u += elapsed * self.speed;
        if self.u >= knot_count as f64 - 1.0 {
            self.u = 0.0;
        }
    }

    pub fn reset(&mut self) {
        self.u = 0.0;
    }

    /// The point on the curve under the cursor, if the curve has a segment.
    ///
    /// The canvas never draws this point; it only reports it in trace logs.
    pub fn sample(&self, curve: &Curve) -> Option<Point> {
        let index = self.u.floor();
        let segment = curve.segment(index as usize).ok()?;
        Some(evaluate_de_casteljau(&segment, self.u - index))
    }
}

impl Default for PlaybackCursor {
    fn default() -> Self {
        Self::new(settings::playback::SPEED)
    }
}
