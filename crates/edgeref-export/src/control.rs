//! Control-file codec.
//!
//! The canonical line-oriented form shared with the hardware
//! testbench: one pixel per line in row-major order (row outer,
//! column inner). Single-channel buffers serialize as a bare decimal
//! value; RGB buffers as `R,G,B` with no spaces. Files end with a
//! trailing newline after the final line.
//!
//! [`gray_from_text`] is the inverse of [`gray_to_text`] and backs
//! the standalone text-to-image reconstruction utility.

use std::fmt::Write;

use edgeref_pipeline::{Dimensions, GrayImage, RgbImage};

use crate::FormatError;

/// Serialize a single-channel buffer: one decimal value per line.
#[must_use]
pub fn gray_to_text(image: &GrayImage) -> String {
    let mut out = String::new();
    for pixel in image.pixels() {
        let _ = writeln!(out, "{}", pixel.0[0]);
    }
    out
}

/// Serialize an RGB buffer: one `R,G,B` triple per line.
#[must_use]
pub fn rgb_to_text(image: &RgbImage) -> String {
    let mut out = String::new();
    for &image::Rgb([r, g, b]) in image.pixels() {
        let _ = writeln!(out, "{r},{g},{b}");
    }
    out
}

/// Parse a control-format text back into a single-channel buffer of
/// the declared dimensions (row-major fill order).
///
/// # Errors
///
/// Returns [`FormatError::ParseLine`] for any line that is not a
/// decimal value in `0..=255`, and [`FormatError::LineCount`] when
/// the number of lines differs from `width * height`.
pub fn gray_from_text(text: &str, dimensions: Dimensions) -> Result<GrayImage, FormatError> {
    let expected = dimensions.pixel_count();
    let mut samples = Vec::with_capacity(expected);

    for (line, content) in text.lines().enumerate() {
        let value: u8 = content
            .trim()
            .parse()
            .map_err(|_| FormatError::ParseLine {
                line,
                content: content.to_string(),
            })?;
        samples.push(value);
    }

    let actual = samples.len();
    GrayImage::from_raw(dimensions.width, dimensions.height, samples)
        .filter(|_| actual == expected)
        .ok_or(FormatError::LineCount { expected, actual })
}
