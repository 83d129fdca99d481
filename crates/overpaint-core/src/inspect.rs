//! Page-element descriptors and the inspection overlay.

use crate::color::Rgba;
use crate::surface::Surface;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

const HIGHLIGHT: Rgba = Rgba::opaque(255, 107, 107);
const HIGHLIGHT_FILL: Rgba = Rgba::new(255, 107, 107, 230);
const DASH: f64 = 5.0;
const LABEL_SIZE: f64 = 12.0;

/// Opaque description of a page element under the pointer.
///
/// The host's DOM walker produces these; the core only displays them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementDescriptor {
    /// Lowercased tag name, e.g. `button`.
    pub tag: String,
    /// Element id, empty when absent.
    pub id: String,
    /// Space-separated class list, empty when absent.
    pub class_name: String,
    /// Bounding box in device coordinates.
    pub bounds: Rect,
}

impl ElementDescriptor {
    /// Short selector-style label: `tag#id.firstclass`.
    pub fn label(&self) -> String {
        let mut label = self.tag.clone();
        if !self.id.is_empty() {
            label.push('#');
            label.push_str(&self.id);
        }
        if let Some(first) = self.class_name.split_whitespace().next() {
            label.push('.');
            label.push_str(first);
        }
        label
    }
}

/// Redesign-prompt text for an inspected element, keyed by tag.
pub fn design_prompt(descriptor: &ElementDescriptor) -> String {
    match descriptor.tag.as_str() {
        "button" => "Redesign this button with modern glassmorphism effect and subtle animations",
        "input" => "Transform this input field with floating labels and smooth focus transitions",
        "nav" => "Modernize this navigation with gradient backgrounds and hover effects",
        "div" => "Convert this section into a modern card component with shadows and rounded corners",
        "img" => "Add a stylish image overlay with zoom effects and captions",
        "h1" => "Style this heading with modern typography and gradient text effects",
        "h2" => "Enhance this heading with custom fonts and spacing",
        "p" => "Improve this text with better typography and reading experience",
        "a" => "Style this link with modern hover effects and transitions",
        tag => return format!("Redesign this {tag} element with modern UI principles"),
    }
    .to_string()
}

/// Paint the inspection overlay: a dashed box around the element and a
/// selector label above its top-left corner.
pub fn paint_highlight(surface: &mut dyn Surface, descriptor: &ElementDescriptor) {
    let bounds = descriptor.bounds;
    let corners = [
        Point::new(bounds.x0, bounds.y0),
        Point::new(bounds.x1, bounds.y0),
        Point::new(bounds.x1, bounds.y1),
        Point::new(bounds.x0, bounds.y1),
    ];
    for i in 0..4 {
        dashed_segment(surface, corners[i], corners[(i + 1) % 4], HIGHLIGHT, 2.0);
    }

    let label = descriptor.label();
    let label_width = surface.text_width(&label, LABEL_SIZE);
    surface.fill_rect(
        Rect::new(
            bounds.x0,
            bounds.y0 - 20.0,
            bounds.x0 + label_width + 8.0,
            bounds.y0 - 2.0,
        ),
        HIGHLIGHT_FILL,
    );
    surface.fill_text(
        &label,
        Point::new(bounds.x0 + 4.0, bounds.y0 - 6.0),
        LABEL_SIZE,
        Rgba::white(),
    );
}

/// Stroke `a` → `b` as a 5-on/5-off dashed line.
fn dashed_segment(surface: &mut dyn Surface, a: Point, b: Point, color: Rgba, width: f64) {
    let delta = b - a;
    let length = delta.hypot();
    if length < f64::EPSILON {
        return;
    }
    let dir = delta / length;
    let mut t = 0.0;
    let mut on = true;
    while t < length {
        let end = (t + DASH).min(length);
        if on {
            surface.stroke_polyline(&[a + dir * t, a + dir * end], color, width);
        }
        on = !on;
        t = end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingSurface;

    fn descriptor() -> ElementDescriptor {
        ElementDescriptor {
            tag: "button".to_string(),
            id: "submit".to_string(),
            class_name: "primary large".to_string(),
            bounds: Rect::new(10.0, 30.0, 110.0, 60.0),
        }
    }

    #[test]
    fn label_uses_first_class_only() {
        assert_eq!(descriptor().label(), "button#submit.primary");
    }

    #[test]
    fn label_omits_empty_parts() {
        let descriptor = ElementDescriptor {
            tag: "p".to_string(),
            id: String::new(),
            class_name: String::new(),
            bounds: Rect::ZERO,
        };
        assert_eq!(descriptor.label(), "p");
    }

    #[test]
    fn known_tags_get_tailored_prompts() {
        let prompt = design_prompt(&descriptor());
        assert!(prompt.contains("glassmorphism"));
    }

    #[test]
    fn unknown_tags_get_the_generic_prompt() {
        let mut descriptor = descriptor();
        descriptor.tag = "section".to_string();
        assert_eq!(
            design_prompt(&descriptor),
            "Redesign this section element with modern UI principles"
        );
    }

    #[test]
    fn highlight_paints_dashes_label_box_and_text() {
        let mut surface = RecordingSurface::new();
        paint_highlight(&mut surface, &descriptor());

        let dashes = surface.calls.iter().filter(|c| c.starts_with("polyline")).count();
        // 100px and 30px edges dashed at 5 on / 5 off.
        assert!(dashes > 10);
        assert!(surface.calls.iter().any(|c| c.starts_with("fill_rect")));
        assert!(
            surface
                .calls
                .contains(&"fill_text(button#submit.primary)".to_string())
        );
    }
}
