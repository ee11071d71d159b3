//! Sobel gradient magnitude and optional threshold stage.
//!
//! Computes horizontal and vertical gradients over the zero-padded
//! input, combines them with the L1 norm (|gx| + |gy|, not the
//! Euclidean norm -- the hardware has no square root), and saturates
//! to 8 bits. A non-zero threshold binarizes the magnitude buffer.

use crate::convolve;
use crate::types::GrayImage;

/// Horizontal gradient weights: left column minus right column.
pub const SOBEL_X: [[i32; 3]; 3] = [[1, 0, -1], [2, 0, -2], [1, 0, -1]];

/// Vertical gradient weights: top row minus bottom row.
pub const SOBEL_Y: [[i32; 3]; 3] = [[1, 2, 1], [0, 0, 0], [-1, -2, -1]];

/// Compute the saturated Sobel gradient magnitude.
///
/// Per pixel, over the zero-padded 3x3 neighborhood `v[row][col]`:
///
/// ```text
/// gx  = (v00 + 2*v10 + v20) - (v02 + 2*v12 + v22)
/// gy  = (v00 + 2*v01 + v02) - (v20 + 2*v21 + v22)
/// out = min(|gx| + |gy|, 255)
/// ```
///
/// When `threshold > 0`, the magnitude buffer just produced is then
/// binarized over its own dimensions: pixels below the threshold
/// become 0, pixels at or above it become 255. `threshold == 0`
/// disables binarization and returns raw saturated magnitudes.
#[must_use = "returns the gradient image"]
pub fn sobel(input: &GrayImage, threshold: u8) -> GrayImage {
    let mut magnitude = convolve::map_neighborhoods(input, |n| {
        let gx = convolve::dot(n, &SOBEL_X).abs();
        let gy = convolve::dot(n, &SOBEL_Y).abs();
        u8::try_from((gx + gy).min(255)).unwrap_or(u8::MAX)
    });

    if threshold > 0 {
        for pixel in magnitude.pixels_mut() {
            pixel.0[0] = if pixel.0[0] < threshold { 0 } else { 255 };
        }
    }

    magnitude
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 8x8 image with a vertical step from 0 to 200 at x = 4.
    fn vertical_step() -> GrayImage {
        GrayImage::from_fn(8, 8, |x, _y| {
            if x < 4 {
                image::Luma([0])
            } else {
                image::Luma([200])
            }
        })
    }

    #[test]
    fn uniform_interior_has_zero_gradient() {
        let img = GrayImage::from_pixel(8, 8, image::Luma([77]));
        let out = sobel(&img, 0);
        // Interior pixels see a flat neighborhood; only the border
        // ring reacts to the zero padding.
        for y in 1..7 {
            for x in 1..7 {
                assert_eq!(out.get_pixel(x, y).0[0], 0, "at ({x},{y})");
            }
        }
    }

    #[test]
    fn vertical_step_detected_by_gx() {
        let out = sobel(&vertical_step(), 0);
        // Columns adjacent to the step: |gx| = 4 * 200 saturates.
        assert_eq!(out.get_pixel(3, 4).0[0], 255);
        assert_eq!(out.get_pixel(4, 4).0[0], 255);
        // Far from the step and the border, nothing.
        assert_eq!(out.get_pixel(1, 4).0[0], 0);
        assert_eq!(out.get_pixel(6, 4).0[0], 0);
    }

    #[test]
    fn magnitude_saturates_at_255() {
        let out = sobel(&vertical_step(), 0);
        assert!(out.pixels().all(|p| p.0[0] <= 255));
        // The step gradient is 800 before saturation; the stored
        // value must be the clamp, not a wrapped 800 % 256 = 32.
        assert_eq!(out.get_pixel(4, 4).0[0], 255);
    }

    #[test]
    fn l1_combination_not_euclidean() {
        // Single bright pixel: its diagonal neighbors see |gx| = 50
        // and |gy| = 50. L1 gives exactly 100; the Euclidean norm
        // would give 70.
        let mut img = GrayImage::new(5, 5);
        img.put_pixel(2, 2, image::Luma([50]));
        let out = sobel(&img, 0);
        assert_eq!(out.get_pixel(1, 1).0[0], 100);
        assert_eq!(out.get_pixel(3, 3).0[0], 100);
    }

    #[test]
    fn zero_threshold_leaves_raw_magnitudes() {
        let mut img = GrayImage::new(5, 5);
        img.put_pixel(2, 2, image::Luma([50]));
        let out = sobel(&img, 0);
        // 100 is neither 0 nor 255: proof the binarization pass did
        // not run.
        assert_eq!(out.get_pixel(1, 1).0[0], 100);
    }

    #[test]
    fn threshold_binarizes_entire_buffer() {
        let out = sobel(&vertical_step(), 100);
        for pixel in out.pixels() {
            assert!(pixel.0[0] == 0 || pixel.0[0] == 255);
        }
    }

    #[test]
    fn threshold_boundary_is_inclusive() {
        // A pixel exactly at the threshold maps to 255, below it to 0.
        let mut img = GrayImage::new(5, 5);
        img.put_pixel(2, 2, image::Luma([50]));
        // Diagonal neighbors have magnitude exactly 100.
        let at = sobel(&img, 100);
        assert_eq!(at.get_pixel(1, 1).0[0], 255);
        let above = sobel(&img, 101);
        assert_eq!(above.get_pixel(1, 1).0[0], 0);
    }

    #[test]
    fn binarization_uses_buffer_dimensions() {
        // Non-reference dimensions must binarize every pixel -- the
        // pass is sized to the buffer, not to a fixed 640x480.
        let img = GrayImage::from_fn(3, 7, |x, _| image::Luma([if x == 1 { 200 } else { 0 }]));
        let out = sobel(&img, 10);
        assert_eq!(out.width(), 3);
        assert_eq!(out.height(), 7);
        for pixel in out.pixels() {
            assert!(pixel.0[0] == 0 || pixel.0[0] == 255);
        }
    }

    #[test]
    fn all_zero_input_stays_zero() {
        let out = sobel(&GrayImage::new(6, 6), 0);
        assert!(out.pixels().all(|p| p.0[0] == 0));
    }
}
