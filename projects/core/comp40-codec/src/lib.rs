//! # comp40-codec
//!
//! A lossy image codec which stores every 2x2 block of pixels as a single 32-bit
//! codeword.
//!
//! ## Pipeline
//!
//! Compression of one block runs the following stages:
//!
//! 1. [`color`]: RGB to component video (`Y`, `Pb`, `Pr`).
//! 2. [`block_transform`]: the four luma samples become the coefficients `a`, `b`, `c`, `d`.
//! 3. [`quantize`]: coefficients are scaled and rounded into small integers; the chroma
//!    channels are averaged and mapped through a [`ChromaTable`] to 4-bit indices.
//! 4. [`codeword`]: the six quantized fields are packed into a 32-bit [`Codeword`].
//!
//! Decompression runs the same stages in reverse. The [`pipeline`] module walks an
//! image block by block and owns the [`stream`] format:
//!
//! ```text
//! COMP40 Compressed image format 2\n
//! <width> <height>\n
//! <codeword 0><codeword 1>...    (4 bytes each, big endian, row-major block order)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use comp40_codec::raster::{Array2, Pixmap, Rgb, UArray2};
//! use comp40_codec::{compress_to_vec, decompress, CompressOptions, StandardChromaTable};
//!
//! let pixels = UArray2::new(4, 2, Rgb::new(200, 120, 40));
//! let image = Pixmap::new(pixels, 255);
//!
//! let stream = compress_to_vec(&image, &StandardChromaTable, CompressOptions::default())?;
//! assert!(stream.starts_with(b"COMP40 Compressed image format 2\n4 2\n"));
//!
//! let restored: Pixmap<UArray2<Rgb>> = decompress(&stream, &StandardChromaTable)?;
//! assert_eq!(restored.width(), 4);
//! # Ok::<(), comp40_codec::CodecError>(())
//! ```
#![warn(missing_docs)]

pub mod block_transform;
pub mod chroma;
pub mod codeword;
pub mod color;
pub mod error;
pub mod pipeline;
pub mod quantize;
pub mod raster;
pub mod stream;

pub use chroma::{ChromaTable, StandardChromaTable};
pub use codeword::{Codeword, CodewordField};
pub use error::{CodecError, CodecResult, FormatError};
pub use pipeline::{
    compress, compress_to_vec, compress_with_options, decompress, CompressOptions,
};
pub use quantize::{QuantizedBlock, Quantizer};

/// Width and height, in pixels, of the blocks the image is split into.
pub const BLOCK_SIZE: usize = 2;

/// Number of pixels in a single block.
pub const BLOCK_AREA: usize = BLOCK_SIZE * BLOCK_SIZE;

/// Common test prelude for avoiding duplicate imports in test modules
#[cfg(test)]
pub(crate) mod test_prelude;
