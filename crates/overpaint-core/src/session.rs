//! The drawing session: one surface, one history, one undo engine.

use crate::capture::{CaptureMode, CaptureResult};
use crate::color::Rgba;
use crate::command::{Command, CommandOutcome};
use crate::history::DrawingHistoryStore;
use crate::inspect::{self, ElementDescriptor};
use crate::ops::{Annotation, AnnotationId, HIGHLIGHT_ALPHA, Operation, StrokeKind};
use crate::surface::{CompositeMode, Snapshot, Surface};
use crate::tools::{ToolDraft, ToolKind};
use crate::undo::SnapshotUndoEngine;
use kurbo::Point;

/// An annotation waiting for its text.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingAnnotation {
    id: AnnotationId,
    position: Point,
}

/// One drawing session over one page.
///
/// The session owns every piece of mutable state: the live surface, the
/// operation log, the snapshot stacks, the active tool/color/width and
/// the pending-annotation table. All transitions happen synchronously
/// inside the handler that triggered them; there is exactly one writer.
///
/// Pointer flow: `pointer_down` starts a draft, `pointer_move` paints
/// live feedback, `pointer_up` finalizes — appending the completed
/// operation to history, replaying, and committing a snapshot. Release
/// always finalizes; nothing is aborted mid-drag.
#[derive(Debug)]
pub struct Session<S: Surface> {
    surface: S,
    history: DrawingHistoryStore,
    snapshots: SnapshotUndoEngine,
    draft: ToolDraft,
    color: Rgba,
    width: f64,
    enabled: bool,
    capture_in_flight: bool,
    inspected: Option<ElementDescriptor>,
    next_annotation_id: AnnotationId,
    pending: Vec<PendingAnnotation>,
}

impl<S: Surface> Session<S> {
    /// Create a session over a fresh surface. The initial (blank)
    /// snapshot is captured immediately; the overlay starts disabled.
    pub fn new(surface: S) -> Self {
        let snapshots = SnapshotUndoEngine::new(&surface);
        Self {
            surface,
            history: DrawingHistoryStore::new(),
            snapshots,
            draft: ToolDraft::new(),
            color: Rgba::opaque(34, 34, 34),
            width: 4.0,
            enabled: false,
            capture_in_flight: false,
            inspected: None,
            next_annotation_id: 1,
            pending: Vec::new(),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn history(&self) -> &DrawingHistoryStore {
        &self.history
    }

    pub fn tool(&self) -> ToolKind {
        self.draft.tool()
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the overlay should currently be shown. Hidden while
    /// disabled or while a capture is in flight.
    pub fn is_visible(&self) -> bool {
        self.enabled && !self.capture_in_flight
    }

    fn accepts_input(&self) -> bool {
        self.enabled && !self.capture_in_flight
    }

    // ---- command channel ------------------------------------------------

    /// Apply a discrete command from the host. Every command except
    /// `ToggleExtension` is a no-op while the overlay is disabled.
    pub fn apply(&mut self, command: Command) -> CommandOutcome {
        if !self.enabled && !matches!(command, Command::ToggleExtension(_)) {
            return CommandOutcome::Ignored;
        }
        match command {
            Command::SetTool(tool) => {
                self.set_tool(tool);
                CommandOutcome::Applied
            }
            Command::SetColor(token) => match Rgba::from_hex(&token) {
                Some(color) => {
                    self.color = color;
                    CommandOutcome::Applied
                }
                None => {
                    log::warn!("ignoring malformed color token {token:?}");
                    CommandOutcome::Ignored
                }
            },
            Command::SetSize(size) => {
                if size > 0.0 {
                    self.width = size;
                    CommandOutcome::Applied
                } else {
                    CommandOutcome::Ignored
                }
            }
            Command::ClearCanvas => {
                self.clear_all();
                CommandOutcome::Applied
            }
            Command::Undo => {
                if self.undo() {
                    CommandOutcome::Applied
                } else {
                    CommandOutcome::Ignored
                }
            }
            Command::Redo => {
                if self.redo() {
                    CommandOutcome::Applied
                } else {
                    CommandOutcome::Ignored
                }
            }
            Command::TakeScreenshot(mode) => {
                if self.begin_capture(mode) {
                    CommandOutcome::CaptureStarted(mode)
                } else {
                    CommandOutcome::Ignored
                }
            }
            Command::CopyToClipboard => CommandOutcome::Clipboard(self.surface.snapshot()),
            Command::ToggleExtension(enabled) => {
                self.set_enabled(enabled);
                CommandOutcome::Applied
            }
        }
    }

    pub fn set_tool(&mut self, tool: ToolKind) {
        self.draft.set_tool(tool);
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        log::debug!("overlay {}", if enabled { "enabled" } else { "disabled" });
        self.enabled = enabled;
        self.draft.reset();
    }

    // ---- pointer protocol -----------------------------------------------

    /// Pointer press. Ignored while disabled or mid-capture, and for
    /// the Annotate/Inspect tools (those route through
    /// [`Session::begin_annotation`] / [`Session::show_inspection`]).
    pub fn pointer_down(&mut self, point: Point) {
        if !self.accepts_input() {
            return;
        }
        self.draft.begin(point);
        if !self.draft.is_active() {
            return;
        }
        // Eraser and highlighter stamp their first circle on press.
        match self.draft.tool().stroke_kind() {
            Some(StrokeKind::Eraser) => self.stamp_eraser(point),
            Some(StrokeKind::Highlighter) => self.stamp_highlighter(point),
            _ => {}
        }
    }

    /// Pointer move: live feedback. Freehand tools paint incrementally;
    /// shape and widget tools repaint history plus a preview.
    pub fn pointer_move(&mut self, point: Point) {
        if !self.accepts_input() || !self.draft.is_active() {
            return;
        }
        match self.draft.tool().stroke_kind() {
            Some(StrokeKind::Brush) => {
                let previous = self.draft.current().unwrap_or(point);
                self.draft.update(point);
                self.surface
                    .stroke_polyline(&[previous, point], self.color, self.width);
            }
            Some(StrokeKind::Eraser) => {
                self.draft.update(point);
                self.stamp_eraser(point);
            }
            Some(StrokeKind::Highlighter) => {
                self.draft.update(point);
                self.stamp_highlighter(point);
            }
            None => {
                self.draft.update(point);
                self.history.replay(&mut self.surface);
                if let Some(preview) = self.draft.preview(self.color, self.width) {
                    preview.paint(&mut self.surface);
                }
            }
        }
    }

    /// Pointer release: finalize the draft, append it to history,
    /// repaint from the log and commit a snapshot.
    pub fn pointer_up(&mut self, point: Point) {
        if !self.accepts_input() || !self.draft.is_active() {
            return;
        }
        if let Some(op) = self.draft.end(point, self.color, self.width) {
            self.complete_operation(op);
        }
    }

    fn complete_operation(&mut self, op: Operation) {
        self.history.append(op);
        self.history.replay(&mut self.surface);
        self.snapshots.commit(&self.surface);
    }

    fn stamp_eraser(&mut self, point: Point) {
        self.surface.fill_circle(
            point,
            self.width / 2.0,
            Rgba::black(),
            CompositeMode::DestinationOut,
        );
    }

    fn stamp_highlighter(&mut self, point: Point) {
        self.surface.fill_circle(
            point,
            self.width / 2.0,
            self.color.with_alpha(HIGHLIGHT_ALPHA),
            CompositeMode::Multiply,
        );
    }

    // ---- undo / redo / clear --------------------------------------------

    /// Undo the last committed snapshot. Surface-level only; the
    /// history log is not rewound.
    pub fn undo(&mut self) -> bool {
        self.snapshots.undo(&mut self.surface)
    }

    /// Redo the most recently undone snapshot.
    pub fn redo(&mut self) -> bool {
        self.snapshots.redo(&mut self.surface)
    }

    /// Clear everything drawn: history, annotations and the surface.
    ///
    /// The undo stack is not reset — one fresh blank snapshot is
    /// committed on top, so undo after clear steps back to the
    /// pre-clear pixels even though the log is empty.
    pub fn clear_all(&mut self) {
        self.history.clear();
        self.pending.clear();
        self.inspected = None;
        self.surface.clear();
        self.snapshots.commit(&self.surface);
        log::debug!("canvas cleared");
    }

    pub fn can_undo(&self) -> bool {
        self.snapshots.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.snapshots.can_redo()
    }

    // ---- annotations ----------------------------------------------------

    /// Start a text annotation at `point`. Returns the pending token
    /// the host hands back once the user has typed the text, or None
    /// while input is not accepted.
    pub fn begin_annotation(&mut self, point: Point) -> Option<AnnotationId> {
        if !self.accepts_input() {
            return None;
        }
        let id = self.next_annotation_id;
        self.next_annotation_id += 1;
        self.pending.push(PendingAnnotation {
            id,
            position: point,
        });
        Some(id)
    }

    /// Supply the text for a pending annotation. Empty text cancels, as
    /// does an unknown token; returns whether an annotation was
    /// appended.
    pub fn complete_annotation(&mut self, id: AnnotationId, text: &str) -> bool {
        let Some(index) = self.pending.iter().position(|p| p.id == id) else {
            return false;
        };
        let pending = self.pending.remove(index);
        if text.is_empty() {
            return false;
        }
        let annotation = Annotation::new(pending.id, pending.position, text.to_string());
        self.complete_operation(Operation::Annotation(annotation));
        true
    }

    /// Discard a pending annotation.
    pub fn cancel_annotation(&mut self, id: AnnotationId) {
        self.pending.retain(|p| p.id != id);
    }

    /// Pending annotation tokens, oldest first.
    pub fn pending_annotations(&self) -> Vec<AnnotationId> {
        self.pending.iter().map(|p| p.id).collect()
    }

    // ---- inspection -----------------------------------------------------

    /// Display the inspection overlay for an element the host resolved
    /// under the pointer. Repaints history first so a previous
    /// highlight disappears.
    pub fn show_inspection(&mut self, descriptor: ElementDescriptor) {
        if !self.accepts_input() {
            return;
        }
        self.history.replay(&mut self.surface);
        inspect::paint_highlight(&mut self.surface, &descriptor);
        self.inspected = Some(descriptor);
    }

    /// The most recently inspected element, if any.
    pub fn inspected(&self) -> Option<&ElementDescriptor> {
        self.inspected.as_ref()
    }

    // ---- capture --------------------------------------------------------

    /// Mark a capture as in flight: the overlay hides and pointer input
    /// is ignored until [`Session::finish_capture`]. Returns false if
    /// disabled or a capture is already pending.
    pub fn begin_capture(&mut self, mode: CaptureMode) -> bool {
        if !self.enabled || self.capture_in_flight {
            return false;
        }
        log::debug!("capture started ({})", mode.as_str());
        self.capture_in_flight = true;
        self.draft.reset();
        true
    }

    /// Complete a capture. Visibility is restored unconditionally; a
    /// failure is logged and yields None, with no retry.
    pub fn finish_capture(&mut self, outcome: CaptureResult<Snapshot>) -> Option<Snapshot> {
        if !self.capture_in_flight {
            return None;
        }
        self.capture_in_flight = false;
        match outcome {
            Ok(image) => Some(image),
            Err(error) => {
                log::error!("screenshot capture failed: {error}");
                None
            }
        }
    }
}
