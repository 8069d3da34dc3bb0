// Copyright 2025 the Spline Pen Authors
// SPDX-License-Identifier: Apache-2.0

//! Hit testing of knots and handles.
//!
//! The scan order decides overlapping hits: knots in index order, and for
//! each knot both handles (incoming before outgoing) before the knot body.
//! Handles are picked whether or not they are drawn. The first hit ends the
//! scan.

use super::selection::Selection;
use crate::model::{Curve, HandleSide};
use kurbo::Point;

/// Find what lies under `pos`, if anything, within `radius`
pub fn hit_test(curve: &Curve, pos: Point, radius: f64) -> Option<Selection> {
    for (index, knot) in curve.knots().iter().enumerate() {
        if let Some(side) = HandleSide::ALL
            .into_iter()
            .find(|&side| knot.handle(side).position.distance(pos) <= radius)
        {
            return Some(Selection::ControlPoint {
                knot: index,
                handle: side,
            });
        }

        if knot.position.distance(pos) <= radius {
            return Some(Selection::Knot(index));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const RADIUS: f64 = 15.0;

    fn curve_with_knots(points: &[(f64, f64)]) -> Curve {
        let mut curve = Curve::default();
        for &(x, y) in points {
            curve.append_knot(Point::new(x, y)).unwrap();
        }
        curve
    }

    #[test]
    fn empty_curve_has_no_hits() {
        assert_eq!(hit_test(&Curve::default(), Point::ZERO, RADIUS), None);
    }

    #[test]
    fn miss_outside_radius() {
        let curve = curve_with_knots(&[(100.0, 100.0)]);
        assert_eq!(hit_test(&curve, Point::new(116.0, 100.0), RADIUS), None);
    }

    #[test]
    fn knot_body_hit_when_no_handle_overlaps() {
        let mut curve = curve_with_knots(&[(100.0, 100.0)]);
        let knot = curve.knot_mut(0).unwrap();
        knot.mirror_handles(Point::new(200.0, 100.0));

        assert_eq!(
            hit_test(&curve, Point::new(100.0, 100.0), RADIUS),
            Some(Selection::Knot(0))
        );
        // Boundary is inclusive
        assert_eq!(
            hit_test(&curve, Point::new(115.0, 100.0), RADIUS),
            Some(Selection::Knot(0))
        );
    }

    #[test]
    fn handles_win_over_their_knot() {
        // Collapsed handles sit exactly on the knot
        let curve = curve_with_knots(&[(100.0, 100.0)]);
        assert_eq!(
            hit_test(&curve, Point::new(100.0, 100.0), RADIUS),
            Some(Selection::ControlPoint {
                knot: 0,
                handle: HandleSide::Incoming
            })
        );
    }

    #[test]
    fn inactive_handles_are_still_picked() {
        let mut curve = curve_with_knots(&[(100.0, 100.0)]);
        let knot = curve.knot_mut(0).unwrap();
        knot.handle_mut(HandleSide::Incoming).active = false;
        knot.handle_mut(HandleSide::Outgoing).active = false;

        assert_eq!(
            hit_test(&curve, Point::new(100.0, 100.0), RADIUS),
            Some(Selection::ControlPoint {
                knot: 0,
                handle: HandleSide::Incoming
            })
        );
    }

    #[test]
    fn hidden_incoming_handle_wins_over_visible_outgoing() {
        // First knot after a second click: incoming hidden, outgoing shown,
        // both collapsed onto the knot
        let mut curve = curve_with_knots(&[(100.0, 100.0), (300.0, 100.0)]);
        let knot = curve.knot_mut(0).unwrap();
        knot.handle_mut(HandleSide::Incoming).active = false;

        assert_eq!(
            hit_test(&curve, Point::new(100.0, 100.0), RADIUS),
            Some(Selection::ControlPoint {
                knot: 0,
                handle: HandleSide::Incoming
            })
        );
    }

    #[test]
    fn lower_handle_index_wins_within_a_knot() {
        let mut curve = curve_with_knots(&[(100.0, 100.0)]);
        let knot = curve.knot_mut(0).unwrap();
        knot.handle_mut(HandleSide::Incoming).position = Point::new(200.0, 205.0);
        knot.handle_mut(HandleSide::Outgoing).position = Point::new(200.0, 195.0);

        assert_eq!(
            hit_test(&curve, Point::new(200.0, 199.0), RADIUS),
            Some(Selection::ControlPoint {
                knot: 0,
                handle: HandleSide::Incoming
            })
        );
    }

    #[test]
    fn earlier_knot_wins_over_later_handle() {
        let mut curve = curve_with_knots(&[(100.0, 100.0), (300.0, 100.0)]);
        curve.knot_mut(0).unwrap().mirror_handles(Point::new(100.0, 0.0));
        // Knot 1's incoming handle overlaps knot 0's body
        curve
            .knot_mut(1)
            .unwrap()
            .handle_mut(HandleSide::Incoming)
            .position = Point::new(105.0, 100.0);

        assert_eq!(
            hit_test(&curve, Point::new(102.0, 100.0), RADIUS),
            Some(Selection::Knot(0))
        );
    }
}
