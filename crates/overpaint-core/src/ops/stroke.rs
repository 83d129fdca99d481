//! Freehand strokes: brush, eraser, highlighter.

use crate::color::Rgba;
use crate::surface::{CompositeMode, Surface};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Effective source alpha of a highlighter stamp (30% opacity).
pub(crate) const HIGHLIGHT_ALPHA: u8 = 77;

/// What a freehand stroke does to the pixels underneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrokeKind {
    /// Solid polyline in the stroke color.
    Brush,
    /// Removes existing pixels along the path.
    Eraser,
    /// Translucent multiply tint along the path.
    Highlighter,
}

/// A completed freehand stroke.
///
/// The path records every sampled pointer position between press and
/// release, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub kind: StrokeKind,
    pub color: Rgba,
    pub width: f64,
    pub path: Vec<Point>,
}

impl Stroke {
    pub fn new(kind: StrokeKind, color: Rgba, width: f64, path: Vec<Point>) -> Self {
        Self {
            kind,
            color,
            width,
            path,
        }
    }

    /// Paint the stroke.
    ///
    /// Eraser and highlighter stamp one circle per sampled point rather
    /// than sweeping a continuous capsule; fast pointer movement leaves
    /// visible gaps. An empty path renders nothing.
    pub fn paint(&self, surface: &mut dyn Surface) {
        if self.path.is_empty() {
            return;
        }
        match self.kind {
            StrokeKind::Brush => {
                surface.stroke_polyline(&self.path, self.color, self.width);
            }
            StrokeKind::Eraser => {
                for point in &self.path {
                    surface.fill_circle(
                        *point,
                        self.width / 2.0,
                        Rgba::black(),
                        CompositeMode::DestinationOut,
                    );
                }
            }
            StrokeKind::Highlighter => {
                let tint = self.color.with_alpha(HIGHLIGHT_ALPHA);
                for point in &self.path {
                    surface.fill_circle(*point, self.width / 2.0, tint, CompositeMode::Multiply);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingSurface;

    #[test]
    fn empty_path_paints_nothing() {
        let mut surface = RecordingSurface::new();
        Stroke::new(StrokeKind::Brush, Rgba::black(), 4.0, Vec::new()).paint(&mut surface);
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn brush_paints_one_polyline() {
        let mut surface = RecordingSurface::new();
        let path = vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        Stroke::new(StrokeKind::Brush, Rgba::black(), 4.0, path).paint(&mut surface);
        assert_eq!(surface.calls, vec!["polyline(2)"]);
    }

    #[test]
    fn eraser_stamps_each_point() {
        let mut surface = RecordingSurface::new();
        let path = vec![
            Point::new(0.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(10.0, 0.0),
        ];
        Stroke::new(StrokeKind::Eraser, Rgba::black(), 8.0, path).paint(&mut surface);
        assert_eq!(surface.calls.len(), 3);
        assert!(surface.calls.iter().all(|c| c == "fill_circle(erase)"));
    }

    #[test]
    fn highlighter_stamps_translucent_multiply() {
        let mut surface = RecordingSurface::new();
        let path = vec![Point::new(0.0, 0.0)];
        Stroke::new(StrokeKind::Highlighter, Rgba::opaque(255, 255, 0), 12.0, path)
            .paint(&mut surface);
        assert_eq!(surface.calls, vec!["fill_circle(multiply)"]);
    }
}
