//! Shift-weighted grayscale conversion.
//!
//! The hardware has no multiplier in this stage: the standard luma
//! weights (0.299 R, 0.587 G, 0.114 B) are approximated by sums of
//! right-shifted channel values. This module reproduces that
//! arithmetic exactly -- no rounding, no floating point.

use crate::types::{GrayImage, RgbImage};

/// Convert an 8-bit RGB buffer to a single-channel intensity buffer.
///
/// Per pixel:
///
/// ```text
/// gray = (R>>3)+(R>>5)+(R>>6) + (G>>1)+(G>>4)+(G>>5) + (B>>3)
/// ```
///
/// The per-channel weights are 11/64 (R), 19/32 (G), and 1/8 (B),
/// summing to 57/64 < 1, so the result fits in 8 bits for all 8-bit
/// inputs; no saturation is applied. Pure per-pixel map, no
/// cross-pixel dependency.
#[must_use = "returns the grayscale image"]
pub fn to_grayscale(image: &RgbImage) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        let image::Rgb([r, g, b]) = *image.get_pixel(x, y);
        image::Luma([shift_luma(r, g, b)])
    })
}

/// The shift-sum luma formula for one pixel.
///
/// Accumulates in `u16`; the maximum possible sum is 221 (all
/// channels 255), so the narrowing back to `u8` is lossless.
#[must_use]
pub fn shift_luma(r: u8, g: u8, b: u8) -> u8 {
    let (r, g, b) = (u16::from(r), u16::from(g), u16::from(b));
    let sum = (r >> 3) + (r >> 5) + (r >> 6) + (g >> 1) + (g >> 4) + (g >> 5) + (b >> 3);
    u8::try_from(sum).unwrap_or(u8::MAX)
}
