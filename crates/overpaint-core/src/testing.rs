//! Test doubles shared across module tests.

use crate::color::Rgba;
use crate::surface::{CompositeMode, Snapshot, Surface};
use kurbo::{Point, Rect};

/// Surface double that records paint calls and models pixel state as a
/// counter, so snapshot/restore behave like real captures.
pub(crate) struct RecordingSurface {
    pub calls: Vec<String>,
    state: u64,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            state: 0,
        }
    }

    /// Opaque value standing in for the current pixel content.
    pub fn state(&self) -> u64 {
        self.state
    }

    fn record(&mut self, call: String) {
        self.calls.push(call);
        self.state += 1;
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> u32 {
        100
    }

    fn height(&self) -> u32 {
        100
    }

    fn clear(&mut self) {
        self.record("clear".to_string());
    }

    fn stroke_polyline(&mut self, points: &[Point], _color: Rgba, _width: f64) {
        self.record(format!("polyline({})", points.len()));
    }

    fn stroke_rect(&mut self, rect: Rect, _color: Rgba, _width: f64) {
        self.record(format!(
            "stroke_rect({},{},{},{})",
            rect.x0, rect.y0, rect.x1, rect.y1
        ));
    }

    fn stroke_circle(&mut self, _center: Point, radius: f64, _color: Rgba, _width: f64) {
        self.record(format!("stroke_circle(r={radius})"));
    }

    fn fill_rect(&mut self, rect: Rect, _color: Rgba) {
        self.record(format!(
            "fill_rect({},{},{},{})",
            rect.x0, rect.y0, rect.x1, rect.y1
        ));
    }

    fn fill_circle(&mut self, _center: Point, _radius: f64, _color: Rgba, mode: CompositeMode) {
        let tag = match mode {
            CompositeMode::SourceOver => "src",
            CompositeMode::DestinationOut => "erase",
            CompositeMode::Multiply => "multiply",
        };
        self.record(format!("fill_circle({tag})"));
    }

    fn fill_triangle(&mut self, _a: Point, _b: Point, _c: Point, _color: Rgba) {
        self.record("fill_triangle".to_string());
    }

    fn text_width(&self, text: &str, _size: f64) -> f64 {
        text.chars().count() as f64 * 6.0
    }

    fn fill_text(&mut self, text: &str, _origin: Point, _size: f64, _color: Rgba) {
        self.record(format!("fill_text({text})"));
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            width: self.width(),
            height: self.height(),
            pixels: self.state.to_le_bytes().to_vec(),
        }
    }

    fn restore(&mut self, snapshot: &Snapshot) {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&snapshot.pixels);
        self.state = u64::from_le_bytes(bytes);
    }
}
