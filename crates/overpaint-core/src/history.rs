//! Append-only drawing history and deterministic replay.

use crate::ops::{Annotation, Operation};
use crate::surface::Surface;
use serde::{Deserialize, Serialize};

/// The ordered log of completed operations — the source of truth for
/// redrawing the surface from scratch.
///
/// Insertion order is visual z-order: later entries paint on top.
/// Annotations are kept in their own sub-collection so they can be
/// cleared independently, and always paint after everything else.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrawingHistoryStore {
    ops: Vec<Operation>,
    annotations: Vec<Annotation>,
}

impl DrawingHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a completed operation to the end of the log.
    ///
    /// Annotations are routed into the annotation set; everything else
    /// lands in the main log. No validation is performed — a malformed
    /// operation simply renders nothing.
    pub fn append(&mut self, op: Operation) {
        match op {
            Operation::Annotation(annotation) => self.annotations.push(annotation),
            other => self.ops.push(other),
        }
    }

    /// Drop every recorded operation and annotation.
    pub fn clear(&mut self) {
        self.ops.clear();
        self.annotations.clear();
    }

    /// Repaint the entire visible state from scratch.
    ///
    /// Clears the surface, then paints every operation in insertion
    /// order followed by every annotation in insertion order. Replaying
    /// twice yields identical pixels.
    pub fn replay(&self, surface: &mut dyn Surface) {
        surface.clear();
        for op in &self.ops {
            op.paint(surface);
        }
        for annotation in &self.annotations {
            annotation.paint(surface);
        }
    }

    /// Operations in the main log (annotations excluded).
    pub fn ops(&self) -> &[Operation] {
        &self.ops
    }

    /// Recorded annotations, oldest first.
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn len(&self) -> usize {
        self.ops.len() + self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty() && self.annotations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::ops::{Shape, ShapeKind, Stroke, StrokeKind};
    use crate::testing::RecordingSurface;
    use kurbo::Point;

    fn stroke() -> Operation {
        Operation::Stroke(Stroke::new(
            StrokeKind::Brush,
            Rgba::black(),
            4.0,
            vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)],
        ))
    }

    fn line() -> Operation {
        Operation::Shape(Shape::new(
            ShapeKind::Line,
            Rgba::black(),
            4.0,
            Point::new(0.0, 0.0),
            Point::new(20.0, 0.0),
        ))
    }

    #[test]
    fn append_routes_annotations_separately() {
        let mut store = DrawingHistoryStore::new();
        store.append(stroke());
        store.append(Operation::Annotation(Annotation::new(
            1,
            Point::new(50.0, 50.0),
            "Hi".to_string(),
        )));

        assert_eq!(store.ops().len(), 1);
        assert_eq!(store.annotations().len(), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn clear_empties_both_collections() {
        let mut store = DrawingHistoryStore::new();
        store.append(Operation::Annotation(Annotation::new(
            1,
            Point::new(50.0, 50.0),
            "Hi".to_string(),
        )));
        assert_eq!(store.len(), 1);

        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn replay_clears_then_paints_in_order() {
        let mut store = DrawingHistoryStore::new();
        store.append(Operation::Annotation(Annotation::new(
            1,
            Point::new(50.0, 50.0),
            "Hi".to_string(),
        )));
        store.append(stroke());
        store.append(line());

        let mut surface = RecordingSurface::new();
        store.replay(&mut surface);

        // Clear first, ops in insertion order, annotations last.
        assert_eq!(surface.calls[0], "clear");
        assert_eq!(surface.calls[1], "polyline(2)");
        assert_eq!(surface.calls[2], "polyline(2)");
        assert!(surface.calls[3].starts_with("fill_rect"));
    }

    #[test]
    fn replay_is_deterministic() {
        let mut store = DrawingHistoryStore::new();
        store.append(stroke());
        store.append(line());

        let mut first = RecordingSurface::new();
        let mut second = RecordingSurface::new();
        store.replay(&mut first);
        store.replay(&mut second);
        assert_eq!(first.calls, second.calls);
    }
}
