//! Fixed-kernel Gaussian smoothing stage.
//!
//! A binomial 3x3 approximation of a Gaussian, normalized by a
//! truncating shift. Sits between grayscale conversion and the Sobel
//! stage to suppress single-pixel noise before gradients are taken.

use crate::convolve;
use crate::types::{GrayImage, Kernel};

/// The blur kernel burned into the hardware.
///
/// Weights sum to 16, so `shift = 4` renormalizes exactly: outputs
/// stay within 8 bits for all 8-bit inputs.
pub const GAUSS_KERNEL: Kernel = Kernel {
    weights: [[1, 2, 1], [2, 4, 2], [1, 2, 1]],
    shift: 4,
};

/// Apply the fixed Gaussian kernel with zero-padded borders.
///
/// Normalization is integer division by 16 via truncating shift --
/// remainders are discarded, never rounded. Output dimensions equal
/// input dimensions.
#[must_use = "returns the smoothed image"]
pub fn gaussian_smooth(input: &GrayImage) -> GrayImage {
    convolve::convolve3x3(input, &GAUSS_KERNEL)
}
