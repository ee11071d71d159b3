//! Zero-padded 3x3 neighborhood primitive.
//!
//! The blur and gradient stages share one edge-handling policy: the
//! input is conceptually padded with a one-pixel border of zeros, and
//! every output pixel -- the outermost ring included -- is computed
//! from its padded 3x3 neighborhood. There is no special-cased edge
//! formula; the zero border *is* the policy, matching the hardware's
//! line buffers.

use crate::types::{GrayImage, Kernel};

/// Sample the zero-padded input at a possibly out-of-range position.
fn padded_sample(input: &GrayImage, x: i64, y: i64) -> u8 {
    let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
        return 0;
    };
    if x < input.width() && y < input.height() {
        input.get_pixel(x, y).0[0]
    } else {
        0
    }
}

const OFFSETS: [i64; 3] = [-1, 0, 1];

/// Extract the zero-padded 3x3 neighborhood centered on `(x, y)`.
///
/// Indexed `[row][col]`, row 0 above the center pixel.
#[must_use]
pub fn neighborhood(input: &GrayImage, x: u32, y: u32) -> [[u8; 3]; 3] {
    std::array::from_fn(|row| {
        std::array::from_fn(|col| {
            padded_sample(input, i64::from(x) + OFFSETS[col], i64::from(y) + OFFSETS[row])
        })
    })
}

/// Integer dot product of a neighborhood and a 3x3 weight matrix.
///
/// Accumulates in `i32`: the largest possible magnitude is
/// `max|weight| * 255 * 9`, comfortably in range for every kernel
/// this pipeline uses.
#[must_use]
pub fn dot(neighborhood: &[[u8; 3]; 3], weights: &[[i32; 3]; 3]) -> i32 {
    neighborhood
        .iter()
        .zip(weights)
        .flat_map(|(samples, row)| samples.iter().zip(row))
        .map(|(&sample, &weight)| i32::from(sample) * weight)
        .sum()
}

/// Apply `f` to the zero-padded 3x3 neighborhood of every pixel.
///
/// Output dimensions equal input dimensions. The shared primitive
/// behind both [`convolve3x3`] and the Sobel stage, which evaluates
/// two gradient kernels per neighborhood.
#[must_use = "returns the mapped image"]
pub fn map_neighborhoods<F>(input: &GrayImage, f: F) -> GrayImage
where
    F: Fn(&[[u8; 3]; 3]) -> u8,
{
    GrayImage::from_fn(input.width(), input.height(), |x, y| {
        image::Luma([f(&neighborhood(input, x, y))])
    })
}

/// Convolve with a [`Kernel`]: dot product, then truncating right
/// shift by `kernel.shift`.
///
/// The caller's kernel must keep `dot >> shift` within `0..=255` for
/// 8-bit inputs (the Gaussian kernel does, by its normalization); the
/// narrowing here saturates rather than wraps as a last resort.
#[must_use = "returns the convolved image"]
pub fn convolve3x3(input: &GrayImage, kernel: &Kernel) -> GrayImage {
    map_neighborhoods(input, |n| {
        u8::try_from(dot(n, &kernel.weights) >> kernel.shift).unwrap_or(u8::MAX)
    })
}
