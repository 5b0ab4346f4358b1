//! Whole-image compression and decompression.
//!
//! Both directions walk the image one 2x2 block at a time in row-major block
//! order. Compression trims a trailing odd column and/or row before encoding;
//! decompression always produces an image with a denominator of
//! [`DECOMPRESSED_DENOMINATOR`].

mod compress;
mod decompress;

pub use compress::{compress, compress_to_vec, compress_with_options};
pub use decompress::decompress;

/// Denominator of every decompressed image.
pub const DECOMPRESSED_DENOMINATOR: u16 = 255;

/// Offsets `(column, row)` of the pixels within a block, in row-major order.
pub(crate) const BLOCK_OFFSETS: [(usize, usize); crate::BLOCK_AREA] =
    [(0, 0), (1, 0), (0, 1), (1, 1)];

/// Settings for [`compress_with_options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CompressOptions {
    /// Encode rows of blocks on the rayon thread pool.
    ///
    /// Has no effect unless the `multithreaded` feature is enabled. The output is
    /// identical either way.
    pub multithreaded: bool,
}
