//! CPU raster surface over an RGBA8 pixel buffer.

use crate::text;
use ab_glyph::FontArc;
use image::RgbaImage;
use kurbo::{Point, Rect};
use overpaint_core::color::Rgba;
use overpaint_core::surface::{CompositeMode, Snapshot, Surface};

/// Deterministic software implementation of the core `Surface`.
///
/// Thick strokes are built from circle stamps along each segment, which
/// gives round caps and joins for free. All blending happens per pixel
/// in straight (non-premultiplied) RGBA8.
///
/// Text needs a font: supply one with [`PixelSurface::with_font`].
/// Without it, metrics fall back to a fixed advance and glyphs are
/// skipped rather than failing.
pub struct PixelSurface {
    image: RgbaImage,
    font: Option<FontArc>,
}

impl PixelSurface {
    /// Create a fully transparent surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            font: None,
        }
    }

    /// Attach a font for text rendering.
    pub fn with_font(mut self, font: FontArc) -> Self {
        self.font = Some(font);
        self
    }

    /// The underlying pixel buffer.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Read one pixel as RGBA8, or None outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x < self.image.width() && y < self.image.height() {
            Some(self.image.get_pixel(x, y).0)
        } else {
            None
        }
    }

    fn composite(&mut self, x: i64, y: i64, color: Rgba, mode: CompositeMode) {
        if x < 0 || y < 0 || x >= self.image.width() as i64 || y >= self.image.height() as i64 {
            return;
        }
        let pixel = self.image.get_pixel_mut(x as u32, y as u32);
        pixel.0 = blend(pixel.0, color, mode);
    }

    /// Stamp a filled circle; every thick primitive reduces to this.
    fn stamp_circle(&mut self, center: Point, radius: f64, color: Rgba, mode: CompositeMode) {
        if radius <= 0.0 {
            return;
        }
        let radius_sq = radius * radius;
        let min_x = (center.x - radius).floor() as i64;
        let max_x = (center.x + radius).ceil() as i64;
        let min_y = (center.y - radius).floor() as i64;
        let max_y = (center.y + radius).ceil() as i64;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let dx = x as f64 + 0.5 - center.x;
                let dy = y as f64 + 0.5 - center.y;
                if dx * dx + dy * dy <= radius_sq {
                    self.composite(x, y, color, mode);
                }
            }
        }
    }

    /// Stamp circles along a segment, one per pixel of travel.
    fn stamp_segment(&mut self, a: Point, b: Point, color: Rgba, width: f64) {
        let dx = b.x - a.x;
        let dy = b.y - a.y;
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as i64;
        let radius = (width / 2.0).max(0.5);
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let point = Point::new(a.x + dx * t, a.y + dy * t);
            self.stamp_circle(point, radius, color, CompositeMode::SourceOver);
        }
    }
}

impl Surface for PixelSurface {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn clear(&mut self) {
        for pixel in self.image.pixels_mut() {
            pixel.0 = [0, 0, 0, 0];
        }
    }

    fn stroke_polyline(&mut self, points: &[Point], color: Rgba, width: f64) {
        match points {
            [] => {}
            [point] => {
                self.stamp_circle(
                    *point,
                    (width / 2.0).max(0.5),
                    color,
                    CompositeMode::SourceOver,
                );
            }
            _ => {
                for pair in points.windows(2) {
                    self.stamp_segment(pair[0], pair[1], color, width);
                }
            }
        }
    }

    fn stroke_rect(&mut self, rect: Rect, color: Rgba, width: f64) {
        let corners = [
            Point::new(rect.x0, rect.y0),
            Point::new(rect.x1, rect.y0),
            Point::new(rect.x1, rect.y1),
            Point::new(rect.x0, rect.y1),
            Point::new(rect.x0, rect.y0),
        ];
        for pair in corners.windows(2) {
            self.stamp_segment(pair[0], pair[1], color, width);
        }
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, color: Rgba, width: f64) {
        if radius <= 0.0 {
            self.stamp_circle(center, (width / 2.0).max(0.5), color, CompositeMode::SourceOver);
            return;
        }
        // Walk the rim at roughly one stamp per pixel of arc length.
        let steps = (radius * std::f64::consts::TAU).ceil().max(8.0) as i64;
        let stamp_radius = (width / 2.0).max(0.5);
        for i in 0..steps {
            let angle = i as f64 / steps as f64 * std::f64::consts::TAU;
            let point = Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            );
            self.stamp_circle(point, stamp_radius, color, CompositeMode::SourceOver);
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        let rect = rect.abs();
        let min_x = rect.x0.floor() as i64;
        let max_x = rect.x1.ceil() as i64 - 1;
        let min_y = rect.y0.floor() as i64;
        let max_y = rect.y1.ceil() as i64 - 1;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                self.composite(x, y, color, CompositeMode::SourceOver);
            }
        }
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba, mode: CompositeMode) {
        self.stamp_circle(center, radius, color, mode);
    }

    fn fill_triangle(&mut self, a: Point, b: Point, c: Point, color: Rgba) {
        let min_x = a.x.min(b.x).min(c.x).floor() as i64;
        let max_x = a.x.max(b.x).max(c.x).ceil() as i64;
        let min_y = a.y.min(b.y).min(c.y).floor() as i64;
        let max_y = a.y.max(b.y).max(c.y).ceil() as i64;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let p = Point::new(x as f64 + 0.5, y as f64 + 0.5);
                if point_in_triangle(p, a, b, c) {
                    self.composite(x, y, color, CompositeMode::SourceOver);
                }
            }
        }
    }

    fn text_width(&self, text: &str, size: f64) -> f64 {
        text::measure(self.font.as_ref(), text, size)
    }

    fn fill_text(&mut self, text: &str, origin: Point, size: f64, color: Rgba) {
        let Some(font) = self.font.clone() else {
            return;
        };
        text::draw(&mut self.image, &font, text, origin, size, color);
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            width: self.image.width(),
            height: self.image.height(),
            pixels: self.image.as_raw().clone(),
        }
    }

    fn restore(&mut self, snapshot: &Snapshot) {
        if let Some(image) =
            RgbaImage::from_raw(snapshot.width, snapshot.height, snapshot.pixels.clone())
        {
            self.image = image;
        }
    }
}

/// Sign-based point-in-triangle test.
fn point_in_triangle(p: Point, a: Point, b: Point, c: Point) -> bool {
    fn sign(p1: Point, p2: Point, p3: Point) -> f64 {
        (p1.x - p3.x) * (p2.y - p3.y) - (p2.x - p3.x) * (p1.y - p3.y)
    }
    let d1 = sign(p, a, b);
    let d2 = sign(p, b, c);
    let d3 = sign(p, c, a);
    let has_neg = (d1 < 0.0) || (d2 < 0.0) || (d3 < 0.0);
    let has_pos = (d1 > 0.0) || (d2 > 0.0) || (d3 > 0.0);
    !(has_neg && has_pos)
}

/// Blend one source color into a destination pixel.
fn blend(dst: [u8; 4], src: Rgba, mode: CompositeMode) -> [u8; 4] {
    let sa = src.a as f64 / 255.0;
    match mode {
        CompositeMode::SourceOver => {
            if src.a == 0 {
                return dst;
            }
            let da = dst[3] as f64 / 255.0;
            let out_a = sa + da * (1.0 - sa);
            if out_a <= 0.0 {
                return [0, 0, 0, 0];
            }
            let channel = |s: u8, d: u8| -> u8 {
                let s = s as f64 / 255.0;
                let d = d as f64 / 255.0;
                ((s * sa + d * da * (1.0 - sa)) / out_a * 255.0)
                    .round()
                    .clamp(0.0, 255.0) as u8
            };
            [
                channel(src.r, dst[0]),
                channel(src.g, dst[1]),
                channel(src.b, dst[2]),
                (out_a * 255.0).round() as u8,
            ]
        }
        CompositeMode::DestinationOut => {
            // Alpha is knocked out; color channels are left alone.
            let da = dst[3] as f64 / 255.0;
            let out_a = da * (1.0 - sa);
            [dst[0], dst[1], dst[2], (out_a * 255.0).round() as u8]
        }
        CompositeMode::Multiply => {
            // Full Porter-Duff source-over with a multiply blend term,
            // in premultiplied space.
            let da = dst[3] as f64 / 255.0;
            let out_a = sa + da * (1.0 - sa);
            if out_a <= 0.0 {
                return [0, 0, 0, 0];
            }
            let channel = |s: u8, d: u8| -> u8 {
                let s = s as f64 / 255.0;
                let d = d as f64 / 255.0;
                let premul = sa * (1.0 - da) * s + da * (1.0 - sa) * d + sa * da * (s * d);
                (premul / out_a * 255.0).round().clamp(0.0, 255.0) as u8
            };
            [
                channel(src.r, dst[0]),
                channel(src.g, dst[1]),
                channel(src.b, dst[2]),
                (out_a * 255.0).round() as u8,
            ]
        }
    }
}
