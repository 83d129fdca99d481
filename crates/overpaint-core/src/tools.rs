//! Tool selection and the pointer-drag interaction state machine.

use crate::color::Rgba;
use crate::ops::{Operation, Shape, ShapeKind, Stroke, StrokeKind, Widget, WidgetKind};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ToolKind {
    #[default]
    Brush,
    Eraser,
    Highlighter,
    Line,
    Arrow,
    Rect,
    Circle,
    UiButton,
    UiInput,
    UiCard,
    UiNavbar,
    /// Text callouts; routed through the session's pending-annotation
    /// flow instead of the drag state machine.
    Annotate,
    /// Element inspection; consumes descriptors, never draws from drags.
    Inspect,
}

impl ToolKind {
    /// The stroke variant this tool records, if it is a freehand tool.
    pub fn stroke_kind(&self) -> Option<StrokeKind> {
        match self {
            ToolKind::Brush => Some(StrokeKind::Brush),
            ToolKind::Eraser => Some(StrokeKind::Eraser),
            ToolKind::Highlighter => Some(StrokeKind::Highlighter),
            _ => None,
        }
    }

    /// The shape variant this tool produces, if any.
    pub fn shape_kind(&self) -> Option<ShapeKind> {
        match self {
            ToolKind::Line => Some(ShapeKind::Line),
            ToolKind::Arrow => Some(ShapeKind::Arrow),
            ToolKind::Rect => Some(ShapeKind::Rect),
            ToolKind::Circle => Some(ShapeKind::Circle),
            _ => None,
        }
    }

    /// The widget variant this tool produces, if any.
    pub fn widget_kind(&self) -> Option<WidgetKind> {
        match self {
            ToolKind::UiButton => Some(WidgetKind::Button),
            ToolKind::UiInput => Some(WidgetKind::Input),
            ToolKind::UiCard => Some(WidgetKind::Card),
            ToolKind::UiNavbar => Some(WidgetKind::Navbar),
            _ => None,
        }
    }

    pub fn is_freehand(&self) -> bool {
        self.stroke_kind().is_some()
    }
}

/// State of a pointer-drag interaction.
#[derive(Debug, Clone, Default)]
enum DraftState {
    #[default]
    Idle,
    Active {
        start: Point,
        current: Point,
        /// Sampled path for freehand tools; empty for shape/widget
        /// drags.
        path: Vec<Point>,
    },
}

/// Builds one completed operation out of a pointer press/drag/release.
///
/// Freehand tools accumulate every sampled position; shape and widget
/// tools track only the drag endpoints. Release always finalizes the
/// draft — there is no mid-drag abort.
#[derive(Debug, Clone, Default)]
pub struct ToolDraft {
    tool: ToolKind,
    state: DraftState,
}

impl ToolDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    /// Switch tools, discarding any in-progress draft.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.tool = tool;
        self.state = DraftState::Idle;
    }

    /// Discard any in-progress draft without changing tools.
    pub fn reset(&mut self) {
        self.state = DraftState::Idle;
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, DraftState::Active { .. })
    }

    /// Current pointer position of an active drag.
    pub fn current(&self) -> Option<Point> {
        match &self.state {
            DraftState::Active { current, .. } => Some(*current),
            DraftState::Idle => None,
        }
    }

    /// Begin a drag. Annotate/Inspect never enter the drag state.
    pub fn begin(&mut self, point: Point) {
        if matches!(self.tool, ToolKind::Annotate | ToolKind::Inspect) {
            return;
        }
        let path = if self.tool.is_freehand() {
            vec![point]
        } else {
            Vec::new()
        };
        self.state = DraftState::Active {
            start: point,
            current: point,
            path,
        };
    }

    /// Record a pointer move within an active drag.
    pub fn update(&mut self, point: Point) {
        if let DraftState::Active { current, path, .. } = &mut self.state {
            *current = point;
            if self.tool.is_freehand() {
                path.push(point);
            }
        }
    }

    /// Finish the drag at `point` and build the completed operation.
    pub fn end(&mut self, point: Point, color: Rgba, width: f64) -> Option<Operation> {
        let state = std::mem::take(&mut self.state);
        let DraftState::Active {
            start, mut path, ..
        } = state
        else {
            return None;
        };

        if let Some(kind) = self.tool.stroke_kind() {
            path.push(point);
            return Some(Operation::Stroke(Stroke::new(kind, color, width, path)));
        }
        if let Some(kind) = self.tool.shape_kind() {
            return Some(Operation::Shape(Shape::new(kind, color, width, start, point)));
        }
        self.tool
            .widget_kind()
            .map(|kind| Operation::Widget(Widget::new(kind, start, point)))
    }

    /// The operation the drag would produce if released now, for live
    /// preview of shape and widget tools.
    pub fn preview(&self, color: Rgba, width: f64) -> Option<Operation> {
        let DraftState::Active { start, current, .. } = &self.state else {
            return None;
        };
        if let Some(kind) = self.tool.shape_kind() {
            return Some(Operation::Shape(Shape::new(
                kind, color, width, *start, *current,
            )));
        }
        self.tool
            .widget_kind()
            .map(|kind| Operation::Widget(Widget::new(kind, *start, *current)))
    }
}
