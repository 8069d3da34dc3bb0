// Copyright 2025 the Spline Pen Authors
// SPDX-License-Identifier: Apache-2.0

//! Drawing primitives on a Vello scene

use crate::render::DrawTarget;
use kurbo::{Affine, BezPath, Circle, Line, Point, Stroke};
use masonry::util::fill_color;
use masonry::vello::Scene;
use peniko::{Brush, Color};

impl DrawTarget for Scene {
    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        fill_color(self, &Circle::new(center, radius), color);
    }

    fn line(&mut self, from: Point, to: Point, width: f64, color: Color) {
        let stroke = Stroke::new(width);
        let brush = Brush::Solid(color);
        self.stroke(&stroke, Affine::IDENTITY, &brush, None, &Line::new(from, to));
    }

    fn polyline(&mut self, points: &[Point], width: f64, color: Color) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };

        let mut path = BezPath::new();
        path.move_to(*first);
        for point in rest {
            path.line_to(*point);
        }

        let stroke = Stroke::new(width);
        let brush = Brush::Solid(color);
        self.stroke(&stroke, Affine::IDENTITY, &brush, None, &path);
    }
}
