//! PNG encoding for snapshots.

use image::RgbaImage;
use overpaint_core::surface::Snapshot;
use std::io::Cursor;
use thiserror::Error;

/// Encoding errors.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("snapshot dimensions do not match its pixel data")]
    InvalidDimensions,
    #[error("png encoding failed: {0}")]
    Encoding(#[from] image::ImageError),
}

/// Encode a snapshot as PNG bytes, for the host's clipboard and
/// download collaborators.
pub fn encode_png(snapshot: &Snapshot) -> Result<Vec<u8>, EncodeError> {
    let image = RgbaImage::from_raw(snapshot.width, snapshot.height, snapshot.pixels.clone())
        .ok_or(EncodeError::InvalidDimensions)?;
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, image::ImageFormat::Png)?;
    Ok(bytes.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_and_decodes_back() {
        let mut snapshot = Snapshot::blank(4, 2);
        snapshot.pixels[0..4].copy_from_slice(&[255, 0, 0, 255]);

        let bytes = encode_png(&snapshot).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded.width(), 4);
        assert_eq!(decoded.height(), 2);
        assert_eq!(decoded.get_pixel(0, 0).0, [255, 0, 0, 255]);
    }

    #[test]
    fn mismatched_dimensions_are_rejected() {
        let snapshot = Snapshot {
            width: 10,
            height: 10,
            pixels: vec![0; 4],
        };
        assert!(matches!(
            encode_png(&snapshot),
            Err(EncodeError::InvalidDimensions)
        ));
    }
}
