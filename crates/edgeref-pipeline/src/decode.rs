//! Image decoding entry point.
//!
//! Decoding is delegated entirely to the `image` crate; this module
//! only fixes the pixel layout (8-bit RGB) and enforces the run's
//! configured dimensions before any stage executes.

use crate::types::{Dimensions, PipelineError, RgbImage};

/// Decode raw image bytes into an 8-bit RGB buffer.
///
/// Supports PNG, JPEG, and BMP (whatever the `image` crate features
/// enable). Alpha, grayscale, and 16-bit sources are converted to
/// 8-bit RGB.
///
/// # Errors
///
/// Returns [`PipelineError::EmptyInput`] if `bytes` is empty.
/// Returns [`PipelineError::ImageDecode`] if the image format is
/// unrecognized or the data is corrupt.
pub fn decode_rgb(bytes: &[u8]) -> Result<RgbImage, PipelineError> {
    if bytes.is_empty() {
        return Err(PipelineError::EmptyInput);
    }

    let img = image::load_from_memory(bytes)?;
    Ok(img.to_rgb8())
}

/// Check a decoded buffer against the run's configured dimensions.
///
/// The hardware memories are sized for a fixed resolution, so a
/// buffer of any other size must abort the run rather than be
/// silently truncated or padded.
///
/// # Errors
///
/// Returns [`PipelineError::DimensionMismatch`] when the buffer's
/// dimensions differ from `expected`.
pub fn expect_dimensions<P, C>(
    image: &image::ImageBuffer<P, C>,
    expected: Dimensions,
) -> Result<(), PipelineError>
where
    P: image::Pixel,
    C: std::ops::Deref<Target = [P::Subpixel]>,
{
    let actual = Dimensions {
        width: image.width(),
        height: image.height(),
    };
    if actual == expected {
        Ok(())
    } else {
        Err(PipelineError::DimensionMismatch { expected, actual })
    }
}
