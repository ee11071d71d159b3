//! edgeref-pipeline: Bit-exact reference model for the hardware
//! edge-detection pipeline (sans-IO).
//!
//! Reproduces the three fixed-point stages implemented in hardware
//! description logic:
//! grayscale conversion -> Gaussian smoothing -> Sobel gradient/threshold.
//!
//! The point of this crate is bit-for-bit parity with the hardware's
//! integer arithmetic: shift-based scaling, truncation instead of
//! rounding, saturation, and zero-padded borders. Convenient
//! floating-point equivalents are deliberately absent -- a one-bit
//! divergence from the hardware must be attributable to the hardware,
//! never to this model.
//!
//! This crate has **no I/O dependencies** beyond decoding in-memory
//! image bytes. Control-file serialization lives in `edgeref-export`;
//! comparison against simulator output lives in `edgeref-verify`.

pub mod convolve;
pub mod decode;
pub mod gauss;
pub mod grayscale;
pub mod sobel;
pub mod types;

pub use decode::{decode_rgb, expect_dimensions};
pub use gauss::gaussian_smooth;
pub use grayscale::to_grayscale;
pub use sobel::sobel;
pub use types::{Dimensions, GrayImage, Kernel, PipelineError, RgbImage};

/// Output of every reference stage for one source image.
///
/// Produced by [`reference_stages`]; used to regenerate all three
/// control files in one pass. Each buffer is freshly allocated --
/// stages never mutate their inputs.
#[derive(Debug, Clone)]
pub struct ReferenceStages {
    /// Stage 1: shift-weighted grayscale conversion.
    pub gray: GrayImage,
    /// Stage 2: Gaussian smoothing of the grayscale buffer.
    pub gauss: GrayImage,
    /// Stage 3: Sobel gradient magnitude (binarized when
    /// `threshold > 0`).
    pub sobel: GrayImage,
}

/// Run the full reference pipeline over a decoded RGB image.
///
/// `threshold` is forwarded to the Sobel stage; `0` disables
/// binarization. All stage arithmetic is total, so this cannot fail.
#[must_use = "returns the computed stage buffers"]
pub fn reference_stages(image: &RgbImage, threshold: u8) -> ReferenceStages {
    let gray = grayscale::to_grayscale(image);
    let gauss = gauss::gaussian_smooth(&gray);
    let sobel = sobel::sobel(&gauss, threshold);
    ReferenceStages { gray, gauss, sobel }
}
