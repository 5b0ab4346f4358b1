use super::{BLOCK_OFFSETS, DECOMPRESSED_DENOMINATOR};
use crate::chroma::ChromaTable;
use crate::color::ycc_to_rgb;
use crate::error::{CodecResult, FormatError};
use crate::quantize::Quantizer;
use crate::raster::{Array2, Pixmap, Rgb};
use crate::stream::{CodewordReader, StreamHeader};
use crate::BLOCK_SIZE;
use tracing::{debug, warn};

/// Decompresses a complete stream into a new image.
///
/// The output has the dimensions stored in the header and a denominator of
/// [`DECOMPRESSED_DENOMINATOR`]. Bytes after the final codeword are ignored.
///
/// # Errors
///
/// [`CodecError::Format`] if the header is malformed or the stream holds fewer
/// codewords than the header requires. No image is returned in that case.
///
/// [`CodecError::Format`]: crate::CodecError::Format
pub fn decompress<A, T>(data: &[u8], table: &T) -> CodecResult<Pixmap<A>>
where
    A: Array2<Element = Rgb>,
    T: ChromaTable,
{
    let (header, offset) = StreamHeader::parse(data)?;
    let count = header
        .block_count()
        .ok_or(FormatError::InvalidDimensions)?;

    // Validated before allocating, so a bogus header cannot request a huge image.
    let codewords = CodewordReader::new(&data[offset..], count)?;
    if codewords.trailing_bytes() > 0 {
        warn!(
            "Ignoring {} trailing bytes after the last codeword",
            codewords.trailing_bytes()
        );
    }
    debug!(
        width = header.width,
        height = header.height,
        blocks = count,
        "Decoding stream"
    );

    let quantizer = Quantizer::new(table);
    let mut pixels = A::new(header.width, header.height, Rgb::default());
    for block_row in 0..header.block_rows() {
        for block_col in 0..header.block_columns() {
            let codeword = codewords.get(block_row * header.block_columns() + block_col);
            let block = quantizer.dequantize(codeword.unpack());

            let (col, row) = (block_col * BLOCK_SIZE, block_row * BLOCK_SIZE);
            for ((dc, dr), ycc) in BLOCK_OFFSETS.into_iter().zip(block) {
                *pixels.at_mut(col + dc, row + dr) = ycc_to_rgb(ycc, DECOMPRESSED_DENOMINATOR);
            }
        }
    }

    Ok(Pixmap::new(pixels, DECOMPRESSED_DENOMINATOR))
}
