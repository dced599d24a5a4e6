//! Decoding of user-selected image files (PNG, JPEG) into RGBA rasters.

use std::io::Cursor;

use image::ImageReader;

use super::{DecodeError, RasterImage};

/// Decode an encoded image file into an RGBA raster.
///
/// The format is guessed from the leading bytes, so the file name or MIME
/// type supplied by the browser is not needed.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the bytes are not a supported format.
/// Returns `DecodeError::CorruptedFile` if decoding fails part way.
/// Returns `DecodeError::EmptyImage` if the file decodes to zero pixels.
pub fn decode_image(bytes: &[u8]) -> Result<RasterImage, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if img.width() == 0 || img.height() == 0 {
        return Err(DecodeError::EmptyImage {
            width: img.width(),
            height: img.height(),
        });
    }

    log::debug!("decoded {}x{} image", img.width(), img.height());
    Ok(RasterImage::from_rgba_image(img.into_rgba8()))
}
