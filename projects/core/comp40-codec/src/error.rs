//! Error types for compression and decompression.

use comp40_bitpack::BitpackError;
use thiserror::Error;

/// Result type used throughout the codec.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors which can occur while compressing or decompressing an image.
#[derive(Debug, Error)]
pub enum CodecError {
    /// A quantized field did not fit in its codeword slot.
    #[error("Quantized field does not fit in the codeword: {0}")]
    Overflow(#[from] BitpackError),

    /// The compressed stream is malformed.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Writing the compressed stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Problems with the layout of a compressed stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The stream does not begin with the expected format tag.
    #[error("Stream does not start with a COMP40 header")]
    InvalidHeader,

    /// The dimensions line is missing or not two decimal numbers.
    #[error("Stream header has malformed dimensions")]
    InvalidDimensions,

    /// The header declares dimensions which cannot be split into 2x2 blocks.
    #[error("Stream header declares odd dimensions {width}x{height}")]
    OddDimensions {
        /// Declared width in pixels.
        width: usize,
        /// Declared height in pixels.
        height: usize,
    },

    /// The stream ends before the codeword for `block`.
    #[error("Stream ended at block {block}: {available} codeword bytes left, 4 required")]
    TruncatedCodeword {
        /// Row-major index of the first block with no complete codeword.
        block: usize,
        /// Bytes remaining for that block.
        available: usize,
    },
}
