//! Text callout annotations.

use crate::color::Rgba;
use crate::surface::Surface;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

const FONT_SIZE: f64 = 12.0;
const PADDING: f64 = 8.0;

const CALLOUT_FILL: Rgba = Rgba::new(255, 193, 7, 230);
const CALLOUT_BORDER: Rgba = Rgba::opaque(255, 193, 7);
const TEXT_COLOR: Rgba = Rgba::opaque(51, 51, 51);

/// Unique monotonic token identifying an annotation within a session.
pub type AnnotationId = u64;

/// A completed text callout anchored at a page point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub id: AnnotationId,
    /// Anchor point; the callout box sits above it.
    pub position: Point,
    /// Non-empty callout text.
    pub text: String,
    pub created_at: SystemTime,
}

impl Annotation {
    pub fn new(id: AnnotationId, position: Point, text: String) -> Self {
        Self {
            id,
            position,
            text,
            created_at: SystemTime::now(),
        }
    }

    /// Paint the callout: a filled, bordered box sized to the text with
    /// its bottom-left corner at the anchor, a triangular pointer below
    /// it, and the text inside.
    pub fn paint(&self, surface: &mut dyn Surface) {
        let Point { x, y } = self.position;
        let box_width = surface.text_width(&self.text, FONT_SIZE) + PADDING * 2.0;
        let box_height = FONT_SIZE + PADDING * 2.0;

        let callout = Rect::new(x, y - box_height, x + box_width, y);
        surface.fill_rect(callout, CALLOUT_FILL);
        surface.stroke_rect(callout, CALLOUT_BORDER, 1.0);

        surface.fill_text(
            &self.text,
            Point::new(x + PADDING, y - PADDING),
            FONT_SIZE,
            TEXT_COLOR,
        );

        surface.fill_triangle(
            Point::new(x + 10.0, y),
            Point::new(x + 15.0, y + 8.0),
            Point::new(x + 5.0, y + 8.0),
            CALLOUT_BORDER,
        );
    }
}
