// Copyright 2025 the Spline Pen Authors
// SPDX-License-Identifier: Apache-2.0

//! Geometry kernel: point reflection and cubic Bézier evaluation.
//!
//! Segments are plain `kurbo::CubicBez` values. Two evaluators are provided:
//! `evaluate_de_casteljau` (three rounds of linear interpolation) and
//! `CubicCoefficients`, the expanded power-basis form used on the sampling
//! path. They produce the same curve up to floating point error.

use crate::settings;
use kurbo::{CubicBez, Point, Vec2};

/// Reflect `point` through `pivot`.
///
/// Used to keep a knot's incoming handle opposite its outgoing handle.
pub fn reflect(point: Point, pivot: Point) -> Point {
    pivot + (pivot - point)
}

/// Evaluate a cubic segment at `t` by repeated linear interpolation.
pub fn evaluate_de_casteljau(segment: &CubicBez, t: f64) -> Point {
    let a = segment.p0.lerp(segment.p1, t);
    let b = segment.p1.lerp(segment.p2, t);
    let c = segment.p2.lerp(segment.p3, t);
    let d = a.lerp(b, t);
    let e = b.lerp(c, t);
    d.lerp(e, t)
}

/// Power-basis coefficients of a cubic segment.
///
/// `point(t) = p0 + c1 t + c2 t² + c3 t³`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicCoefficients {
    pub p0: Point,
    pub c1: Vec2,
    pub c2: Vec2,
    pub c3: Vec2,
}

impl CubicCoefficients {
    pub fn from_segment(segment: &CubicBez) -> Self {
        let p0 = segment.p0.to_vec2();
        let p1 = segment.p1.to_vec2();
        let p2 = segment.p2.to_vec2();
        let p3 = segment.p3.to_vec2();

        Self {
            p0: segment.p0,
            c1: (p1 - p0) * 3.0,
            c2: p0 * 3.0 - p1 * 6.0 + p2 * 3.0,
            c3: -p0 + p1 * 3.0 - p2 * 3.0 + p3,
        }
    }

    pub fn eval(&self, t: f64) -> Point {
        let t2 = t * t;
        let t3 = t2 * t;
        self.p0 + self.c1 * t + self.c2 * t2 + self.c3 * t3
    }
}

/// Parameter values sampled from 0 to 1 at a fixed step.
///
/// The sequence starts at exactly 0, increases strictly, and ends at
/// exactly 1. A non-positive or non-finite step falls back to
/// `settings::curve::SAMPLE_STEP`; a positive step finer than
/// `settings::curve::MIN_SAMPLE_STEP` is raised to it.
#[derive(Debug, Clone)]
pub struct SampleParams {
    step: f64,
    index: usize,
    last: usize,
}

impl Iterator for SampleParams {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.index > self.last {
            return None;
        }
        let t = (self.index as f64 * self.step).min(1.0);
        self.index += 1;
        Some(t)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.last + 1).saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SampleParams {}

/// Iterate the sampling parameters for a given step.
pub fn sample_params(step: f64) -> SampleParams {
    let step = if step.is_finite() && step > 0.0 {
        step.clamp(settings::curve::MIN_SAMPLE_STEP, 1.0)
    } else {
        settings::curve::SAMPLE_STEP
    };
    // Snap away float noise so that 1.0 / 0.01 gives 100 intervals, not 101
    let intervals = (1.0 / step - 1e-9).ceil().max(1.0) as usize;

    SampleParams {
        step,
        index: 0,
        last: intervals,
    }
}

/// Sample a segment into an ordered polyline.
pub fn sample_segment(segment: &CubicBez, step: f64) -> impl Iterator<Item = Point> + Clone {
    let coefficients = CubicCoefficients::from_segment(segment);
    sample_params(step).map(move |t| coefficients.eval(t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use kurbo::ParamCurve;

    fn wavy() -> CubicBez {
        CubicBez::new((100.0, 100.0), (150.0, 400.0), (420.0, -80.0), (500.0, 300.0))
    }

    #[test]
    fn reflect_mirrors_through_pivot() {
        let reflected = reflect(Point::new(110.0, 130.0), Point::new(100.0, 100.0));
        assert_eq!(reflected, Point::new(90.0, 70.0));

        // Reflecting the pivot itself is a fixed point
        let pivot = Point::new(3.0, -4.0);
        assert_eq!(reflect(pivot, pivot), pivot);
    }

    #[test]
    fn polynomial_matches_de_casteljau() {
        let segment = wavy();
        let coefficients = CubicCoefficients::from_segment(&segment);

        for i in 0..=1000 {
            let t = i as f64 / 1000.0;
            let a = coefficients.eval(t);
            let b = evaluate_de_casteljau(&segment, t);
            assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-4);
            assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-4);
        }
    }

    #[test]
    fn de_casteljau_matches_kurbo() {
        let segment = wavy();
        for i in 0..=64 {
            let t = i as f64 / 64.0;
            let ours = evaluate_de_casteljau(&segment, t);
            let theirs = segment.eval(t);
            assert_abs_diff_eq!(ours.x, theirs.x, epsilon = 1e-9);
            assert_abs_diff_eq!(ours.y, theirs.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn endpoints_are_interpolated() {
        let segment = wavy();
        let coefficients = CubicCoefficients::from_segment(&segment);
        assert_eq!(coefficients.eval(0.0), segment.p0);

        let end = coefficients.eval(1.0);
        assert_abs_diff_eq!(end.x, segment.p3.x, epsilon = 1e-9);
        assert_abs_diff_eq!(end.y, segment.p3.y, epsilon = 1e-9);
    }

    #[test]
    fn default_step_covers_closed_interval() {
        let params: Vec<f64> = sample_params(0.01).collect();

        assert_eq!(params.len(), 101);
        assert_eq!(params[0], 0.0);
        assert_eq!(*params.last().unwrap(), 1.0);
        assert!(params.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn uneven_step_is_clamped_at_one() {
        let params: Vec<f64> = sample_params(0.3).collect();
        assert_eq!(params.len(), 5);
        assert_abs_diff_eq!(params[3], 0.9, epsilon = 1e-12);
        assert_eq!(params[4], 1.0);
        assert!(params.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn invalid_step_falls_back_to_default() {
        assert_eq!(sample_params(0.0).len(), 101);
        assert_eq!(sample_params(-1.0).len(), 101);
        assert_eq!(sample_params(f64::NAN).len(), 101);
    }

    #[test]
    fn minuscule_step_is_raised_to_minimum() {
        let params = sample_params(1e-300);
        assert_eq!(params.len(), 10_001);
        assert_eq!(params.last(), Some(1.0));
    }

    #[test]
    fn sampled_polyline_starts_at_p0_and_ends_at_p3() {
        let segment = wavy();
        let points: Vec<Point> = sample_segment(&segment, 0.01).collect();

        assert_eq!(points.len(), 101);
        assert_eq!(points[0], segment.p0);
        let last = points.last().unwrap();
        assert_abs_diff_eq!(last.x, segment.p3.x, epsilon = 1e-9);
        assert_abs_diff_eq!(last.y, segment.p3.y, epsilon = 1e-9);
    }

    #[test]
    fn sampling_is_restartable() {
        let segment = wavy();
        let samples = sample_segment(&segment, 0.05);
        let first: Vec<Point> = samples.clone().collect();
        let second: Vec<Point> = samples.collect();
        assert_eq!(first, second);
    }
}
