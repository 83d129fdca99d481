//! Drawable operations recorded in history.

mod annotation;
mod shape;
mod stroke;
mod widget;

pub use annotation::{Annotation, AnnotationId};
pub use shape::{Shape, ShapeKind, arrow_head};
pub use stroke::{Stroke, StrokeKind};
pub use widget::{Widget, WidgetKind};

pub(crate) use stroke::HIGHLIGHT_ALPHA;

use crate::surface::Surface;
use serde::{Deserialize, Serialize};

/// One completed, immutable drawable action.
///
/// Operations never carry partial in-progress state; the tool draft
/// builds them whole at pointer release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operation {
    Stroke(Stroke),
    Shape(Shape),
    Widget(Widget),
    Annotation(Annotation),
}

impl Operation {
    /// Paint this operation onto a surface using its own paint rule.
    pub fn paint(&self, surface: &mut dyn Surface) {
        match self {
            Operation::Stroke(stroke) => stroke.paint(surface),
            Operation::Shape(shape) => shape.paint(surface),
            Operation::Widget(widget) => widget.paint(surface),
            Operation::Annotation(annotation) => annotation.paint(surface),
        }
    }
}
