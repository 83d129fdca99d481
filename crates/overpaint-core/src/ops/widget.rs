//! UI-mockup widgets with fixed styling.

use crate::color::Rgba;
use crate::surface::Surface;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Accent used by every widget regardless of the selected color.
const ACCENT: Rgba = Rgba::opaque(0, 123, 255);
/// Accent at 10% opacity for the body fill.
const ACCENT_FILL: Rgba = Rgba::new(0, 123, 255, 26);
const OUTLINE_WIDTH: f64 = 2.0;

const LABEL_DARK: Rgba = Rgba::opaque(51, 51, 51);
const LABEL_MUTED: Rgba = Rgba::opaque(102, 102, 102);

/// Mockup widget variants. Style is fixed per kind, not
/// user-configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WidgetKind {
    Button,
    Input,
    Card,
    Navbar,
}

impl WidgetKind {
    /// The label painted inside the widget body.
    pub fn label(&self) -> &'static str {
        match self {
            WidgetKind::Button => "Button",
            WidgetKind::Input => "Input field",
            WidgetKind::Card => "Card Component",
            WidgetKind::Navbar => "Navigation Bar",
        }
    }
}

/// A completed mockup widget spanning the dragged box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    pub kind: WidgetKind,
    pub from: Point,
    pub to: Point,
}

impl Widget {
    pub fn new(kind: WidgetKind, from: Point, to: Point) -> Self {
        Self { kind, from, to }
    }

    /// Paint the widget: filled and outlined box in the fixed accent,
    /// then the kind-specific label. Reversed drags are normalized.
    pub fn paint(&self, surface: &mut dyn Surface) {
        let rect = Rect::from_points(self.from, self.to);
        surface.fill_rect(rect, ACCENT_FILL);
        surface.stroke_rect(rect, ACCENT, OUTLINE_WIDTH);

        let label = self.kind.label();
        match self.kind {
            WidgetKind::Button => {
                let size = 14.0;
                let x = rect.center().x - surface.text_width(label, size) / 2.0;
                let y = rect.y0 + rect.height() / 2.0 + 5.0;
                surface.fill_text(label, Point::new(x, y), size, ACCENT);
            }
            WidgetKind::Input => {
                let size = 12.0;
                let y = rect.y0 + rect.height() / 2.0 + 4.0;
                surface.fill_text(label, Point::new(rect.x0 + 8.0, y), size, LABEL_MUTED);
            }
            WidgetKind::Card => {
                let size = 16.0;
                let x = rect.center().x - surface.text_width(label, size) / 2.0;
                surface.fill_text(label, Point::new(x, rect.y0 + 30.0), size, LABEL_DARK);
            }
            WidgetKind::Navbar => {
                let size = 14.0;
                let y = rect.y0 + rect.height() / 2.0 + 5.0;
                surface.fill_text(label, Point::new(rect.x0 + 16.0, y), size, LABEL_DARK);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingSurface;

    #[test]
    fn widget_labels() {
        assert_eq!(WidgetKind::Button.label(), "Button");
        assert_eq!(WidgetKind::Input.label(), "Input field");
        assert_eq!(WidgetKind::Card.label(), "Card Component");
        assert_eq!(WidgetKind::Navbar.label(), "Navigation Bar");
    }

    #[test]
    fn paints_fill_outline_then_label() {
        let mut surface = RecordingSurface::new();
        Widget::new(WidgetKind::Button, Point::new(0.0, 0.0), Point::new(120.0, 40.0))
            .paint(&mut surface);
        assert_eq!(
            surface.calls,
            vec![
                "fill_rect(0,0,120,40)",
                "stroke_rect(0,0,120,40)",
                "fill_text(Button)",
            ]
        );
    }

    #[test]
    fn reversed_drag_is_normalized() {
        let mut surface = RecordingSurface::new();
        Widget::new(WidgetKind::Card, Point::new(120.0, 40.0), Point::new(0.0, 0.0))
            .paint(&mut surface);
        assert_eq!(surface.calls[0], "fill_rect(0,0,120,40)");
    }
}
