//! Geometric shapes: line, arrow, rectangle, circle.

use crate::color::Rgba;
use crate::surface::Surface;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Arrowhead half-angle off the shaft, 30 degrees.
const HEAD_HALF_ANGLE: f64 = std::f64::consts::FRAC_PI_6;

/// Geometric shape variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Line,
    Arrow,
    Rect,
    Circle,
}

/// A completed two-point shape.
///
/// `from` is the pointer-press position, `to` the release position.
/// For circles `from` is the center and `to` a point on the rim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub kind: ShapeKind,
    pub color: Rgba,
    pub width: f64,
    pub from: Point,
    pub to: Point,
}

impl Shape {
    pub fn new(kind: ShapeKind, color: Rgba, width: f64, from: Point, to: Point) -> Self {
        Self {
            kind,
            color,
            width,
            from,
            to,
        }
    }

    /// Paint the shape. Zero-extent geometry renders near-invisibly
    /// rather than being rejected.
    pub fn paint(&self, surface: &mut dyn Surface) {
        match self.kind {
            ShapeKind::Line => {
                surface.stroke_polyline(&[self.from, self.to], self.color, self.width);
            }
            ShapeKind::Arrow => {
                surface.stroke_polyline(&[self.from, self.to], self.color, self.width);
                let [left, right] = arrow_head(self.from, self.to, self.width);
                surface.stroke_polyline(&[self.to, left], self.color, self.width);
                surface.stroke_polyline(&[self.to, right], self.color, self.width);
            }
            ShapeKind::Rect => {
                surface.stroke_rect(Rect::from_points(self.from, self.to), self.color, self.width);
            }
            ShapeKind::Circle => {
                let radius = self.from.distance(self.to);
                surface.stroke_circle(self.from, radius, self.color, self.width);
            }
        }
    }
}

/// Far endpoints of the two arrowhead strokes for an arrow shaft
/// `from` → `to` of the given stroke width.
///
/// Both strokes start at `to`, run back at ±30° off the shaft angle,
/// and are 3× the stroke width long.
pub fn arrow_head(from: Point, to: Point, width: f64) -> [Point; 2] {
    let angle = (to.y - from.y).atan2(to.x - from.x);
    let head_length = width * 3.0;
    let left = Point::new(
        to.x - head_length * (angle - HEAD_HALF_ANGLE).cos(),
        to.y - head_length * (angle - HEAD_HALF_ANGLE).sin(),
    );
    let right = Point::new(
        to.x - head_length * (angle + HEAD_HALF_ANGLE).cos(),
        to.y - head_length * (angle + HEAD_HALF_ANGLE).sin(),
    );
    [left, right]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingSurface;

    #[test]
    fn horizontal_arrow_head_geometry() {
        let from = Point::new(10.0, 10.0);
        let to = Point::new(100.0, 10.0);
        let [left, right] = arrow_head(from, to, 4.0);

        // Both head strokes end 12px back from the tip at ±30° off the
        // horizontal shaft.
        for end in [left, right] {
            let length = to.distance(end);
            assert!((length - 12.0).abs() < 1e-9);
            let angle = (end.y - to.y).atan2(end.x - to.x).abs();
            let off_shaft = (std::f64::consts::PI - angle).abs();
            assert!((off_shaft - HEAD_HALF_ANGLE).abs() < 1e-9);
        }
        assert!((left.y - right.y).abs() > 1.0, "head strokes straddle the shaft");
    }

    #[test]
    fn arrow_paints_shaft_and_two_head_strokes() {
        let mut surface = RecordingSurface::new();
        let arrow = Shape::new(
            ShapeKind::Arrow,
            Rgba::black(),
            4.0,
            Point::new(0.0, 0.0),
            Point::new(50.0, 0.0),
        );
        arrow.paint(&mut surface);
        assert_eq!(
            surface.calls,
            vec!["polyline(2)", "polyline(2)", "polyline(2)"]
        );
    }

    #[test]
    fn rect_normalizes_reversed_corners() {
        let mut surface = RecordingSurface::new();
        let rect = Shape::new(
            ShapeKind::Rect,
            Rgba::black(),
            2.0,
            Point::new(80.0, 60.0),
            Point::new(20.0, 10.0),
        );
        rect.paint(&mut surface);
        assert_eq!(surface.calls, vec!["stroke_rect(20,10,80,60)"]);
    }

    #[test]
    fn circle_radius_is_center_to_rim_distance() {
        let mut surface = RecordingSurface::new();
        let circle = Shape::new(
            ShapeKind::Circle,
            Rgba::black(),
            2.0,
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
        );
        circle.paint(&mut surface);
        assert_eq!(surface.calls, vec!["stroke_circle(r=5)"]);
    }
}
