//! Shared types for the edge-detection reference model.

use serde::{Deserialize, Serialize};

/// Re-export `GrayImage` so downstream crates can reference
/// single-channel stage buffers without depending on `image` directly.
pub use image::GrayImage;

/// Re-export `RgbImage` so downstream crates can reference the
/// decoded source image without depending on `image` directly.
pub use image::RgbImage;

/// Image dimensions in pixels.
///
/// The hardware reference configuration is 640x480; every run fixes
/// its dimensions up front and they never change between stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// Total pixel count (`width * height`).
    #[must_use]
    pub const fn pixel_count(self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A fixed 3x3 integer convolution kernel with shift-based
/// normalization.
///
/// The hardware divides by powers of two only, so normalization is a
/// truncating right shift by `shift` bits -- never a rounding divide.
/// Kernels are compile-time constants, never derived at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel {
    /// Row-major kernel weights.
    pub weights: [[i32; 3]; 3],
    /// Right-shift applied to each dot product (truncation).
    pub shift: u32,
}

/// Errors that can occur before or between pipeline stages.
///
/// Stage arithmetic itself is total over 8-bit inputs and never
/// raises; only decoding and dimension checks can fail, and both are
/// fatal for the run.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Failed to decode the input image.
    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// The input image bytes were empty.
    #[error("input image data is empty")]
    EmptyInput,

    /// A buffer's dimensions differ from the configured run dimensions.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Dimensions the run was configured for.
        expected: Dimensions,
        /// Dimensions actually observed.
        actual: Dimensions,
    },
}
