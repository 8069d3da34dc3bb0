// Copyright 2025 the Spline Pen Authors
// SPDX-License-Identifier: Apache-2.0

//! The ordered, bounded sequence of knots that makes up the spline.
//!
//! Knots are only ever appended or cleared all at once, so indices stay
//! stable for the lifetime of a knot. Segment `i` joins knot `i` to knot
//! `i + 1` through the outgoing handle of the first and the incoming handle
//! of the second.

use super::knot::{HandleSide, Knot};
use crate::settings;
use kurbo::{CubicBez, Point};
use thiserror::Error;

/// Errors from curve operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    #[error("curve is full ({capacity} knots)")]
    CapacityReached { capacity: usize },

    #[error("segment {index} out of range ({count} segments)")]
    SegmentOutOfRange { index: usize, count: usize },

    #[error("knot {index} out of range ({count} knots)")]
    KnotOutOfRange { index: usize, count: usize },
}

/// A cubic Bézier spline
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    knots: Vec<Knot>,
    capacity: usize,
}

impl Curve {
    /// Create an empty curve holding at most `capacity` knots.
    ///
    /// The bound is enforced on append; storage grows on demand.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            knots: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.knots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.knots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.knots.len() >= self.capacity
    }

    pub fn knots(&self) -> &[Knot] {
        &self.knots
    }

    pub fn knot(&self, index: usize) -> Option<&Knot> {
        self.knots.get(index)
    }

    pub fn knot_mut(&mut self, index: usize) -> Option<&mut Knot> {
        self.knots.get_mut(index)
    }

    /// Like `knot_mut`, but reports a stale index as an error
    pub fn try_knot_mut(&mut self, index: usize) -> Result<&mut Knot, CurveError> {
        let count = self.knots.len();
        self.knots
            .get_mut(index)
            .ok_or(CurveError::KnotOutOfRange { index, count })
    }

    /// Append a knot at `position` with both handles active and collapsed
    /// onto it. Returns the new knot's index.
    pub fn append_knot(&mut self, position: Point) -> Result<usize, CurveError> {
        if self.is_full() {
            return Err(CurveError::CapacityReached {
                capacity: self.capacity,
            });
        }
        self.knots.push(Knot::new(position));
        Ok(self.knots.len() - 1)
    }

    pub fn segment_count(&self) -> usize {
        self.knots.len().saturating_sub(1)
    }

    /// The four control points of segment `index`
    pub fn segment(&self, index: usize) -> Result<CubicBez, CurveError> {
        let count = self.segment_count();
        if index >= count {
            return Err(CurveError::SegmentOutOfRange { index, count });
        }
        Ok(Self::join(&self.knots[index], &self.knots[index + 1]))
    }

    /// All segments in curve order
    pub fn segments(&self) -> impl Iterator<Item = CubicBez> + '_ {
        self.knots
            .windows(2)
            .map(|pair| Self::join(&pair[0], &pair[1]))
    }

    /// Remove every knot
    pub fn clear(&mut self) {
        self.knots.clear();
    }

    fn join(start: &Knot, end: &Knot) -> CubicBez {
        CubicBez::new(
            start.position,
            start.handle(HandleSide::Outgoing).position,
            end.handle(HandleSide::Incoming).position,
            end.position,
        )
    }
}

impl Default for Curve {
    fn default() -> Self {
        Self::with_capacity(settings::curve::MAX_KNOTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_curve_has_no_segments() {
        let curve = Curve::default();
        assert!(curve.is_empty());
        assert_eq!(curve.capacity(), 256);
        assert_eq!(curve.segment_count(), 0);
        assert_eq!(curve.segments().count(), 0);
    }

    #[test]
    fn single_knot_has_no_segments() {
        let mut curve = Curve::default();
        curve.append_knot(Point::new(1.0, 1.0)).unwrap();
        assert_eq!(curve.segment_count(), 0);
        assert_eq!(
            curve.segment(0),
            Err(CurveError::SegmentOutOfRange { index: 0, count: 0 })
        );
    }

    #[test]
    fn append_returns_sequential_indices() {
        let mut curve = Curve::default();
        assert_eq!(curve.append_knot(Point::new(0.0, 0.0)), Ok(0));
        assert_eq!(curve.append_knot(Point::new(1.0, 0.0)), Ok(1));
        assert_eq!(curve.append_knot(Point::new(2.0, 0.0)), Ok(2));
        assert_eq!(curve.len(), 3);
    }

    #[test]
    fn append_stops_at_capacity() {
        let mut curve = Curve::with_capacity(3);
        for i in 0..3 {
            curve.append_knot(Point::new(i as f64, 0.0)).unwrap();
        }
        let before = curve.clone();

        assert_eq!(
            curve.append_knot(Point::new(99.0, 99.0)),
            Err(CurveError::CapacityReached { capacity: 3 })
        );
        assert_eq!(curve, before);
        assert!(curve.is_full());
    }

    #[test]
    fn huge_capacity_does_not_allocate_up_front() {
        let mut curve = Curve::with_capacity(usize::MAX);
        assert_eq!(curve.capacity(), usize::MAX);
        assert_eq!(curve.append_knot(Point::new(5.0, 5.0)), Ok(0));
        assert!(!curve.is_full());
    }

    #[test]
    fn segment_uses_facing_handles() {
        let mut curve = Curve::default();
        let a = curve.append_knot(Point::new(0.0, 0.0)).unwrap();
        let b = curve.append_knot(Point::new(100.0, 0.0)).unwrap();
        curve.knot_mut(a).unwrap().handle_mut(HandleSide::Outgoing).position =
            Point::new(30.0, 40.0);
        curve.knot_mut(b).unwrap().handle_mut(HandleSide::Incoming).position =
            Point::new(70.0, 40.0);
        // The far-side handles must not leak into the segment
        curve.knot_mut(a).unwrap().handle_mut(HandleSide::Incoming).position =
            Point::new(-500.0, -500.0);
        curve.knot_mut(b).unwrap().handle_mut(HandleSide::Outgoing).position =
            Point::new(500.0, 500.0);

        let segment = curve.segment(0).unwrap();
        assert_eq!(segment.p0, Point::new(0.0, 0.0));
        assert_eq!(segment.p1, Point::new(30.0, 40.0));
        assert_eq!(segment.p2, Point::new(70.0, 40.0));
        assert_eq!(segment.p3, Point::new(100.0, 0.0));
        assert_eq!(curve.segments().next(), Some(segment));
    }

    #[test]
    fn clear_is_idempotent() {
        let mut curve = Curve::default();
        curve.append_knot(Point::new(1.0, 2.0)).unwrap();
        curve.clear();
        assert!(curve.is_empty());
        curve.clear();
        assert!(curve.is_empty());
        assert_eq!(curve.append_knot(Point::ZERO), Ok(0));
    }

    #[test]
    fn stale_knot_index_is_reported() {
        let mut curve = Curve::default();
        assert!(curve.knot(0).is_none());
        assert_eq!(
            curve.try_knot_mut(2).map(|_| ()),
            Err(CurveError::KnotOutOfRange { index: 2, count: 0 })
        );
    }
}
