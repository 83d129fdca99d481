//! Raster-snapshot undo/redo, independent of the semantic history log.

use crate::surface::{Snapshot, Surface};

/// Maximum number of snapshots kept on the undo stack.
pub const MAX_SNAPSHOTS: usize = 50;

/// Bounded two-stack undo engine over full surface captures.
///
/// `commit` records the pixel state after each completed operation;
/// `undo`/`redo` swap captures between the stacks and write them back
/// to the surface. The history log is never consulted or rewound.
#[derive(Debug, Clone)]
pub struct SnapshotUndoEngine {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
}

impl SnapshotUndoEngine {
    /// Create an engine seeded with a capture of the surface's current
    /// (normally blank) state. That initial capture is never popped.
    pub fn new(surface: &dyn Surface) -> Self {
        Self {
            undo_stack: vec![surface.snapshot()],
            redo_stack: Vec::new(),
        }
    }

    /// Record the surface's current pixel state.
    ///
    /// Any redo states are discarded; when the stack exceeds
    /// [`MAX_SNAPSHOTS`] the oldest capture is evicted from the bottom.
    pub fn commit(&mut self, surface: &dyn Surface) {
        self.undo_stack.push(surface.snapshot());
        if self.undo_stack.len() > MAX_SNAPSHOTS {
            self.undo_stack.remove(0);
        }
        self.redo_stack.clear();
    }

    /// Step the surface back to the previous capture.
    ///
    /// Returns false (and leaves everything untouched) when only the
    /// initial capture remains.
    pub fn undo(&mut self, surface: &mut dyn Surface) -> bool {
        if self.undo_stack.len() <= 1 {
            return false;
        }
        if let Some(popped) = self.undo_stack.pop() {
            self.redo_stack.push(popped);
        }
        if let Some(top) = self.undo_stack.last() {
            surface.restore(top);
        }
        true
    }

    /// Step the surface forward to the most recently undone capture.
    ///
    /// Returns false when there is nothing to redo.
    pub fn redo(&mut self, surface: &mut dyn Surface) -> bool {
        match self.redo_stack.pop() {
            Some(snapshot) => {
                surface.restore(&snapshot);
                self.undo_stack.push(snapshot);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.undo_stack.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of captures currently held on the undo stack.
    pub fn depth(&self) -> usize {
        self.undo_stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::testing::RecordingSurface;
    use kurbo::Point;

    fn paint_something(surface: &mut RecordingSurface) {
        surface.stroke_polyline(
            &[Point::new(0.0, 0.0), Point::new(10.0, 10.0)],
            Rgba::black(),
            4.0,
        );
    }

    #[test]
    fn undo_restores_previous_commit() {
        let mut surface = RecordingSurface::new();
        let mut engine = SnapshotUndoEngine::new(&surface);

        paint_something(&mut surface);
        let after_first = surface.state();
        engine.commit(&surface);

        paint_something(&mut surface);
        engine.commit(&surface);

        assert!(engine.undo(&mut surface));
        assert_eq!(surface.state(), after_first);
    }

    #[test]
    fn redo_restores_pre_undo_state() {
        let mut surface = RecordingSurface::new();
        let mut engine = SnapshotUndoEngine::new(&surface);

        paint_something(&mut surface);
        engine.commit(&surface);
        let committed = surface.state();

        assert!(engine.undo(&mut surface));
        assert_ne!(surface.state(), committed);
        assert!(engine.redo(&mut surface));
        assert_eq!(surface.state(), committed);
    }

    #[test]
    fn undo_stops_at_initial_capture() {
        let mut surface = RecordingSurface::new();
        let mut engine = SnapshotUndoEngine::new(&surface);

        assert!(!engine.can_undo());
        assert!(!engine.undo(&mut surface));
        assert_eq!(engine.depth(), 1);
    }

    #[test]
    fn redo_on_empty_stack_is_a_noop() {
        let mut surface = RecordingSurface::new();
        let mut engine = SnapshotUndoEngine::new(&surface);
        assert!(!engine.redo(&mut surface));
    }

    #[test]
    fn commit_discards_redo_states() {
        let mut surface = RecordingSurface::new();
        let mut engine = SnapshotUndoEngine::new(&surface);

        paint_something(&mut surface);
        engine.commit(&surface);
        assert!(engine.undo(&mut surface));
        assert!(engine.can_redo());

        paint_something(&mut surface);
        engine.commit(&surface);
        assert!(!engine.can_redo());
        assert!(!engine.redo(&mut surface));
    }

    #[test]
    fn stack_caps_at_fifty_with_fifo_eviction() {
        let mut surface = RecordingSurface::new();
        let mut engine = SnapshotUndoEngine::new(&surface);

        let mut states = Vec::new();
        for _ in 0..60 {
            paint_something(&mut surface);
            states.push(surface.state());
            engine.commit(&surface);
        }
        assert_eq!(engine.depth(), MAX_SNAPSHOTS);

        // Undoing down the stack walks the most recent commits in order;
        // the initial capture and the ten oldest commits were evicted.
        for expected in states.iter().rev().skip(1).take(MAX_SNAPSHOTS - 1) {
            assert!(engine.undo(&mut surface));
            assert_eq!(surface.state(), *expected);
        }
        assert!(!engine.undo(&mut surface));
    }
}
