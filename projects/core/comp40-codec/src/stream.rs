//! Layout of a compressed stream.
//!
//! A stream is a short text header followed by raw codewords:
//!
//! ```text
//! COMP40 Compressed image format 2\n
//! <width> <height>\n
//! <codeword>*
//! ```
//!
//! Width and height are ASCII decimal, separated by a single space, and always even.
//! There is one codeword for each 2x2 block, in row-major block order, each stored
//! as 4 big endian bytes.

use crate::codeword::Codeword;
use crate::error::FormatError;
use crate::BLOCK_SIZE;
use endian_writer::{BigEndianReader, BigEndianWriter, EndianReader, EndianWriter};

/// Tag every compressed stream starts with.
pub const HEADER_TAG: &[u8] = b"COMP40 Compressed image format 2\n";

/// Size of a serialized codeword in bytes.
pub const CODEWORD_SIZE: usize = 4;

/// Dimensions stored in a stream header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StreamHeader {
    /// Width of the image in pixels. Always even.
    pub width: usize,
    /// Height of the image in pixels. Always even.
    pub height: usize,
}

impl StreamHeader {
    /// Creates a header for an image of the given (even) dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        debug_assert!(width % BLOCK_SIZE == 0 && height % BLOCK_SIZE == 0);
        Self { width, height }
    }

    /// Number of blocks in each row.
    #[inline]
    pub fn block_columns(&self) -> usize {
        self.width / BLOCK_SIZE
    }

    /// Number of rows of blocks.
    #[inline]
    pub fn block_rows(&self) -> usize {
        self.height / BLOCK_SIZE
    }

    /// Number of codewords following the header, or [`None`] if the count
    /// does not fit in a [`usize`].
    #[inline]
    pub fn block_count(&self) -> Option<usize> {
        self.block_columns().checked_mul(self.block_rows())
    }

    /// Appends the textual header to `out`.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(HEADER_TAG);
        out.extend_from_slice(format!("{} {}\n", self.width, self.height).as_bytes());
    }

    /// Parses a header from the start of `data`.
    ///
    /// # Returns
    ///
    /// The header and the offset of the first codeword byte.
    ///
    /// # Errors
    ///
    /// - [`FormatError::InvalidHeader`] if `data` does not start with [`HEADER_TAG`].
    /// - [`FormatError::InvalidDimensions`] if the dimensions line is malformed.
    /// - [`FormatError::OddDimensions`] if either dimension is odd.
    pub fn parse(data: &[u8]) -> Result<(Self, usize), FormatError> {
        let rest = data
            .strip_prefix(HEADER_TAG)
            .ok_or(FormatError::InvalidHeader)?;

        let (width, rest) = parse_decimal(rest)?;
        let rest = rest
            .strip_prefix(b" ")
            .ok_or(FormatError::InvalidDimensions)?;
        let (height, rest) = parse_decimal(rest)?;
        let rest = rest
            .strip_prefix(b"\n")
            .ok_or(FormatError::InvalidDimensions)?;

        if width % BLOCK_SIZE != 0 || height % BLOCK_SIZE != 0 {
            return Err(FormatError::OddDimensions { width, height });
        }

        Ok((Self { width, height }, data.len() - rest.len()))
    }
}

/// Reads a run of ASCII digits, returning the value and the remaining bytes.
fn parse_decimal(data: &[u8]) -> Result<(usize, &[u8]), FormatError> {
    let digits = data.iter().take_while(|byte| byte.is_ascii_digit()).count();
    if digits == 0 {
        return Err(FormatError::InvalidDimensions);
    }

    let mut value = 0usize;
    for &digit in &data[..digits] {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add((digit - b'0') as usize))
            .ok_or(FormatError::InvalidDimensions)?;
    }

    Ok((value, &data[digits..]))
}

/// Appends `codewords` to `out` in stream order.
pub fn append_codewords(out: &mut Vec<u8>, codewords: &[Codeword]) {
    let start = out.len();
    out.resize(start + codewords.len() * CODEWORD_SIZE, 0);

    // SAFETY: `out` was resized above to hold every codeword after `start`.
    unsafe {
        let mut writer = BigEndianWriter::new(out.as_mut_ptr().add(start));
        for (index, codeword) in codewords.iter().enumerate() {
            writer.write_u32_at(u32::from(*codeword), (index * CODEWORD_SIZE) as isize);
        }
    }
}

/// Bounds checked access to the codewords following a header.
#[derive(Debug, Clone, Copy)]
pub struct CodewordReader<'a> {
    data: &'a [u8],
    count: usize,
}

impl<'a> CodewordReader<'a> {
    /// Validates that `data` holds at least `count` codewords.
    ///
    /// # Errors
    ///
    /// [`FormatError::TruncatedCodeword`] naming the first block whose codeword is
    /// incomplete.
    pub fn new(data: &'a [u8], count: usize) -> Result<Self, FormatError> {
        let complete = data.len() / CODEWORD_SIZE;
        if complete < count {
            return Err(FormatError::TruncatedCodeword {
                block: complete,
                available: data.len() % CODEWORD_SIZE,
            });
        }

        Ok(Self { data, count })
    }

    /// Number of codewords available.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the stream holds no codewords.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Bytes after the last codeword.
    #[inline]
    pub fn trailing_bytes(&self) -> usize {
        self.data.len() - self.count * CODEWORD_SIZE
    }

    /// Returns the codeword of block `index` in row-major block order.
    ///
    /// # Panics
    ///
    /// If `index >= self.len()`.
    #[inline]
    pub fn get(&self, index: usize) -> Codeword {
        assert!(index < self.count, "codeword {index} out of range");

        // SAFETY: `new` verified `count * CODEWORD_SIZE` bytes are present.
        unsafe {
            let mut reader = BigEndianReader::new(self.data.as_ptr());
            Codeword(reader.read_u32_at((index * CODEWORD_SIZE) as isize))
        }
    }
}
