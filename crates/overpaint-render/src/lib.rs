//! Software raster backend for Overpaint.
//!
//! [`PixelSurface`] implements the core's `Surface` trait over an RGBA8
//! pixel buffer, deterministically and without a GPU: the reference
//! surface for tests and for embedders that want raw pixels out.

mod encode;
mod pixel;
mod text;

pub use encode::{EncodeError, encode_png};
pub use pixel::PixelSurface;
