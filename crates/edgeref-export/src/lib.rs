//! edgeref-export: Pure text serializers (sans-IO).
//!
//! Converts pixel buffers into the line-oriented text artifacts the
//! hardware testbench consumes and produces, and parses them back:
//!
//! - control files: one decimal value (or `R,G,B` triple) per pixel
//!   per line, row-major ([`control`]);
//! - COE-style memory initialization with 12-bit packed RGB values
//!   ([`coe`]).
//!
//! Every serializer returns a `String`; file placement is the
//! caller's concern.

pub mod coe;
pub mod control;

pub use coe::{pack_rgb444, to_coe};
pub use control::{gray_from_text, gray_to_text, rgb_to_text};

/// Errors produced while encoding or parsing text artifacts.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// A line held non-numeric or out-of-range content where an 8-bit
    /// decimal value was expected.
    #[error("malformed value at line {line}: {content:?}")]
    ParseLine {
        /// 0-based index of the offending line.
        line: usize,
        /// Raw content of the offending line.
        content: String,
    },

    /// The number of lines does not match the declared dimensions.
    #[error("expected {expected} lines, found {actual}")]
    LineCount {
        /// `width * height` of the declared dimensions.
        expected: usize,
        /// Lines actually present.
        actual: usize,
    },

    /// The source buffer holds fewer pixels than the configured
    /// memory size.
    #[error("memory size requires {expected} pixels, buffer holds {actual}")]
    PixelCount {
        /// Pixels required by the configured dimensions.
        expected: usize,
        /// Pixels available in the buffer.
        actual: usize,
    },
}
