//! COE-style memory initialization encoder.
//!
//! Packs quantized RGB pixels into one 12-bit word per pixel for
//! hardware block-RAM initialization. The artifact is two fixed
//! header lines followed by decimal packed values, comma-terminated
//! except the final value, which is semicolon-terminated and emitted
//! without a trailing newline.
//!
//! Exactly `width * height` values are emitted even when the source
//! buffer is larger -- the cutoff is the hardware memory size, fixed
//! per target resolution, so it stays a parameter rather than a
//! constant here.

use std::fmt::Write;

use edgeref_pipeline::{Dimensions, RgbImage};

use crate::FormatError;

/// First header line: decimal radix declaration.
pub const RADIX_HEADER: &str = "memory_initialization_radix=10;";

/// Second header line: opens the value vector.
pub const VECTOR_HEADER: &str = "memory_initialization_vector=";

/// Pack one pixel's top 4 bits per channel into a 12-bit word:
/// `(B4 << 8) | (G4 << 4) | R4`.
#[must_use]
pub fn pack_rgb444(r: u8, g: u8, b: u8) -> u16 {
    ((u16::from(b) >> 4) << 8) | ((u16::from(g) >> 4) << 4) | (u16::from(r) >> 4)
}

/// Encode an RGB buffer as a COE memory-initialization text.
///
/// Emits the first `dimensions.pixel_count()` pixels in row-major
/// order; pixels beyond the configured memory size are silently
/// skipped.
///
/// # Errors
///
/// Returns [`FormatError::PixelCount`] when the buffer holds fewer
/// pixels than the configured memory size.
pub fn to_coe(image: &RgbImage, dimensions: Dimensions) -> Result<String, FormatError> {
    let count = dimensions.pixel_count();
    let available = image.width() as usize * image.height() as usize;
    if available < count {
        return Err(FormatError::PixelCount {
            expected: count,
            actual: available,
        });
    }

    let mut out = String::new();
    let _ = writeln!(out, "{RADIX_HEADER}");
    let _ = writeln!(out, "{VECTOR_HEADER}");

    for (index, &image::Rgb([r, g, b])) in image.pixels().take(count).enumerate() {
        let packed = pack_rgb444(r, g, b);
        if index + 1 == count {
            let _ = write!(out, "{packed};");
        } else {
            let _ = writeln!(out, "{packed},");
        }
    }

    Ok(out)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn dims(width: u32, height: u32) -> Dimensions {
        Dimensions { width, height }
    }

    #[test]
    fn packing_places_channels_in_bgr_nibbles() {
        // R=0xF0 -> nibble 0xF at bits 0..4, G=0xA0 -> 0xA at 4..8,
        // B=0x50 -> 0x5 at 8..12.
        assert_eq!(pack_rgb444(0xF0, 0xA0, 0x50), 0x5AF);
    }

    #[test]
    fn packing_truncates_low_bits() {
        // Low nibbles are quantized away, not rounded.
        assert_eq!(pack_rgb444(0x1F, 0x1F, 0x1F), 0x111);
        assert_eq!(pack_rgb444(255, 255, 255), 0xFFF);
    }

    #[test]
    fn header_lines_are_fixed() {
        let img = RgbImage::new(1, 1);
        let coe = to_coe(&img, dims(1, 1)).unwrap();
        let mut lines = coe.lines();
        assert_eq!(lines.next(), Some("memory_initialization_radix=10;"));
        assert_eq!(lines.next(), Some("memory_initialization_vector="));
    }

    #[test]
    fn values_comma_terminated_final_semicolon_no_newline() {
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(0, 0, image::Rgb([0x10, 0x20, 0x30]));
        img.put_pixel(1, 0, image::Rgb([0xFF, 0xFF, 0xFF]));
        let coe = to_coe(&img, dims(2, 1)).unwrap();
        let expected = format!(
            "{RADIX_HEADER}\n{VECTOR_HEADER}\n{},\n{};",
            pack_rgb444(0x10, 0x20, 0x30),
            0xFFF,
        );
        assert_eq!(coe, expected);
        assert!(!coe.ends_with('\n'));
    }

    #[test]
    fn emits_exactly_configured_pixel_count() {
        // 4x4 source, 2x2 configured memory: 4 values, the rest
        // silently skipped.
        let img = RgbImage::from_pixel(4, 4, image::Rgb([16, 16, 16]));
        let coe = to_coe(&img, dims(2, 2)).unwrap();
        let body = coe
            .lines()
            .skip(2)
            .flat_map(|l| l.split_terminator([',', ';']))
            .filter(|v| !v.is_empty())
            .count();
        assert_eq!(body, 4);
        assert!(coe.ends_with(';'));
    }

    #[test]
    fn undersized_buffer_is_an_error() {
        let img = RgbImage::new(2, 2);
        let result = to_coe(&img, dims(640, 480));
        assert!(matches!(
            result,
            Err(FormatError::PixelCount {
                expected: 307_200,
                actual: 4,
            })
        ));
    }

    #[test]
    fn values_are_row_major() {
        let mut img = RgbImage::new(2, 2);
        img.put_pixel(0, 0, image::Rgb([0x10, 0, 0])); // packed 1
        img.put_pixel(1, 0, image::Rgb([0x20, 0, 0])); // packed 2
        img.put_pixel(0, 1, image::Rgb([0x30, 0, 0])); // packed 3
        img.put_pixel(1, 1, image::Rgb([0x40, 0, 0])); // packed 4
        let coe = to_coe(&img, dims(2, 2)).unwrap();
        assert!(coe.ends_with("1,\n2,\n3,\n4;"));
    }
}
