//! Surface seam between the document model and the host raster.

use crate::color::Rgba;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Pixel-blending rule for composite fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CompositeMode {
    /// Ordinary alpha blend, new pixels painted over existing ones.
    #[default]
    SourceOver,
    /// Removes existing pixels where the fill lands (erasing).
    DestinationOut,
    /// Multiplies source and destination channels, weighted by the
    /// source alpha (highlighting).
    Multiply,
}

/// A full pixel-level capture of a surface at one point in time.
///
/// Snapshots compare by value so undo/redo guarantees can be checked as
/// bit-identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub width: u32,
    pub height: u32,
    /// RGBA8 pixel data, row-major.
    pub pixels: Vec<u8>,
}

impl Snapshot {
    /// A fully transparent capture of the given dimensions.
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }
}

/// A mutable 2D raster surface with the primitive paint operations the
/// replay rules need.
///
/// The host environment provides the concrete implementation;
/// `overpaint-render` ships a deterministic software one. Text origins
/// are the left end of the baseline. Stroked outlines use round caps
/// and joins.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Reset every pixel to fully transparent.
    fn clear(&mut self);

    /// Stroke a polyline through the given points. A single point draws
    /// a round dot; fewer renders nothing.
    fn stroke_polyline(&mut self, points: &[Point], color: Rgba, width: f64);

    /// Stroke an axis-aligned rectangle outline.
    fn stroke_rect(&mut self, rect: Rect, color: Rgba, width: f64);

    /// Stroke a circle outline.
    fn stroke_circle(&mut self, center: Point, radius: f64, color: Rgba, width: f64);

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    /// Fill a circle under the given composite mode.
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba, mode: CompositeMode);

    /// Fill a triangle.
    fn fill_triangle(&mut self, a: Point, b: Point, c: Point, color: Rgba);

    /// Advance width of `text` at the given font size.
    fn text_width(&self, text: &str, size: f64) -> f64;

    /// Draw `text` with its baseline starting at `origin`.
    fn fill_text(&mut self, text: &str, origin: Point, size: f64, color: Rgba);

    /// Capture the full pixel state.
    fn snapshot(&self) -> Snapshot;

    /// Restore a previously captured pixel state.
    fn restore(&mut self, snapshot: &Snapshot);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_snapshot_is_transparent() {
        let snapshot = Snapshot::blank(4, 3);
        assert_eq!(snapshot.pixels.len(), 48);
        assert!(snapshot.pixels.iter().all(|&b| b == 0));
    }
}
