//! Errors raised while reading or writing PPM images.

use thiserror::Error;

/// Errors raised while reading or writing PPM images.
#[derive(Debug, Error)]
pub enum PpmError {
    /// The data does not start with `P3` or `P6`.
    #[error("Not a PPM image (expected P3 or P6 magic)")]
    InvalidMagic,

    /// A header field is missing or is not a decimal number.
    #[error("Malformed PPM header: missing or invalid {0}")]
    MalformedHeader(&'static str),

    /// `maxval` is outside of `1..=65535`.
    #[error("Invalid PPM maxval {0}, expected 1..=65535")]
    InvalidMaxval(u64),

    /// The image is too large to address in memory.
    #[error("PPM dimensions {width}x{height} are too large")]
    ImageTooLarge {
        /// Declared width.
        width: usize,
        /// Declared height.
        height: usize,
    },

    /// A sample is larger than `maxval`.
    #[error("PPM sample {sample} exceeds maxval {maxval}")]
    SampleOutOfRange {
        /// The offending sample.
        sample: u64,
        /// The image's maxval.
        maxval: u16,
    },

    /// A sample of a plain (`P3`) image is not a decimal number.
    #[error("PPM sample {index} is not a number")]
    InvalidPlainSample {
        /// Index of the sample, counting from 0.
        index: usize,
    },

    /// The pixel data ends before every sample was read.
    #[error("PPM pixel data is truncated: {read} of {expected} samples present")]
    TruncatedPixelData {
        /// Samples declared by the header.
        expected: usize,
        /// Samples actually present.
        read: usize,
    },

    /// Writing the image failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
