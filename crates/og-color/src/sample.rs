//! Dominant color sampling
//!
//! Reduces an encoded raster image to one representative sRGB triple by
//! box-averaging the whole frame down to a single pixel. "Dominant" here
//! means the mean color, a documented simplification of histogram or
//! clustering approaches; it is crude but stable and cheap, and it feeds
//! a pipeline that only needs a tonal anchor, not an exact palette.

use thiserror::Error;

use crate::color::Rgb;

/// Failure to turn image bytes into a sample.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The bytes are not a supported raster format, or are corrupt.
    #[error("image decode failed: {0}")]
    Decode(#[from] image::ImageError),

    /// The image decoded but contains no pixels.
    #[error("image has no pixels")]
    Empty,
}

/// Sample the dominant color of an encoded image.
///
/// Decodes the bytes (PNG, JPEG, GIF, WebP), scales the frame to a single
/// pixel with an area-averaging filter, and discards any alpha channel.
/// Fully transparent regions contribute whatever color the decoder left
/// under them.
///
/// Callers that cannot decode should fall back to a neutral default rather
/// than fail the whole preview; see the error policy of the consuming
/// service.
///
/// # Errors
///
/// [`DecodeError::Decode`] on corrupt bytes or unsupported formats,
/// [`DecodeError::Empty`] on zero-dimension images.
pub fn sample_dominant_color(bytes: &[u8]) -> Result<Rgb, DecodeError> {
    let img = image::load_from_memory(bytes)?;

    if img.width() == 0 || img.height() == 0 {
        return Err(DecodeError::Empty);
    }

    // Box-filter average of the entire frame, then drop alpha
    let pixel = img.thumbnail_exact(1, 1).to_rgb8();
    let p = pixel.get_pixel(0, 0);

    Ok(Rgb::new(p[0], p[1], p[2]))
}
