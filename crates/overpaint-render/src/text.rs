//! Glyph rasterization for the software surface.

use ab_glyph::{Font, FontArc, ScaleFont, point};
use image::RgbaImage;
use kurbo::Point;
use overpaint_core::color::Rgba;

/// Advance per character, as a fraction of the font size, when no font
/// is available to measure with.
const FALLBACK_ADVANCE: f64 = 0.6;

/// Advance width of `text` at `size`, via font metrics when a font is
/// present and a fixed per-character estimate otherwise.
pub(crate) fn measure(font: Option<&FontArc>, text: &str, size: f64) -> f64 {
    match font {
        Some(font) => {
            let scaled = font.as_scaled(size as f32);
            text.chars()
                .map(|ch| scaled.h_advance(scaled.glyph_id(ch)) as f64)
                .sum()
        }
        None => text.chars().count() as f64 * size * FALLBACK_ADVANCE,
    }
}

/// Draw `text` with its baseline starting at `origin`, blending each
/// glyph's coverage into the buffer.
pub(crate) fn draw(
    image: &mut RgbaImage,
    font: &FontArc,
    text: &str,
    origin: Point,
    size: f64,
    color: Rgba,
) {
    if text.is_empty() {
        return;
    }
    let scaled = font.as_scaled(size as f32);
    let mut caret = point(origin.x as f32, origin.y as f32);
    for ch in text.chars() {
        let mut glyph = scaled.scaled_glyph(ch);
        glyph.position = caret;
        caret.x += scaled.h_advance(glyph.id);
        if let Some(outlined) = scaled.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|x, y, coverage| {
                let px = x as i64 + bounds.min.x as i64;
                let py = y as i64 + bounds.min.y as i64;
                if px >= 0 && py >= 0 && px < image.width() as i64 && py < image.height() as i64 {
                    let alpha = (color.a as f32 * coverage).round().clamp(0.0, 255.0) as u8;
                    if alpha == 0 {
                        return;
                    }
                    let pixel = image.get_pixel_mut(px as u32, py as u32);
                    pixel.0 = blend_coverage(pixel.0, color, alpha);
                }
            });
        }
    }
}

fn blend_coverage(dst: [u8; 4], color: Rgba, alpha: u8) -> [u8; 4] {
    let sa = alpha as f64 / 255.0;
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
        channel(color.r, dst[0]),
        channel(color.g, dst[1]),
        channel(color.b, dst[2]),
        (out_a * 255.0).round() as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_metrics_scale_with_text_length() {
        let short = measure(None, "ab", 12.0);
        let long = measure(None, "abcd", 12.0);
        assert!((long - short * 2.0).abs() < 1e-9);
    }

    #[test]
    fn fallback_metrics_scale_with_font_size() {
        let small = measure(None, "abc", 12.0);
        let large = measure(None, "abc", 24.0);
        assert!((large - small * 2.0).abs() < 1e-9);
    }

    #[test]
    fn empty_text_measures_zero() {
        assert_eq!(measure(None, "", 12.0), 0.0);
    }

    #[test]
    fn full_coverage_over_transparent_deposits_the_color() {
        let out = blend_coverage([0, 0, 0, 0], Rgba::opaque(51, 51, 51), 255);
        assert_eq!(out, [51, 51, 51, 255]);
    }
}
