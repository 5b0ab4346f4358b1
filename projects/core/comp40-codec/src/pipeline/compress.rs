use super::{CompressOptions, BLOCK_OFFSETS};
use crate::chroma::ChromaTable;
use crate::codeword::Codeword;
use crate::color::rgb_to_ycc;
use crate::error::CodecResult;
use crate::quantize::Quantizer;
use crate::raster::{Array2, Pixmap, Rgb};
use crate::stream::{append_codewords, StreamHeader, CODEWORD_SIZE, HEADER_TAG};
use crate::BLOCK_SIZE;
use comp40_bitpack::BitpackError;
use std::io::Write;
use tracing::debug;

/// Longest possible `<width> <height>\n` line.
const MAX_DIMENSIONS_LEN: usize = 2 * 20 + 2;

/// Compresses `image` and writes the stream to `out`.
///
/// Equivalent to [`compress_with_options`] with default options.
pub fn compress<A, T, W>(image: &Pixmap<A>, table: &T, out: &mut W) -> CodecResult<()>
where
    A: Array2<Element = Rgb> + Sync,
    T: ChromaTable + Sync,
    W: Write + ?Sized,
{
    compress_with_options(image, table, CompressOptions::default(), out)
}

/// Compresses `image` and writes the stream to `out`.
///
/// The whole stream is built in memory first; nothing is written if encoding fails.
///
/// # Errors
///
/// - [`CodecError::Overflow`] if a quantized field does not fit its codeword slot.
/// - [`CodecError::Io`] if writing to `out` fails.
///
/// [`CodecError::Overflow`]: crate::CodecError::Overflow
/// [`CodecError::Io`]: crate::CodecError::Io
pub fn compress_with_options<A, T, W>(
    image: &Pixmap<A>,
    table: &T,
    options: CompressOptions,
    out: &mut W,
) -> CodecResult<()>
where
    A: Array2<Element = Rgb> + Sync,
    T: ChromaTable + Sync,
    W: Write + ?Sized,
{
    let stream = compress_to_vec(image, table, options)?;
    out.write_all(&stream)?;
    Ok(())
}

/// Compresses `image` into a new buffer holding the complete stream.
///
/// An odd final column and/or row is discarded, so the stored dimensions are
/// always even. Images narrower or shorter than a block produce a header and
/// no codewords.
pub fn compress_to_vec<A, T>(
    image: &Pixmap<A>,
    table: &T,
    options: CompressOptions,
) -> CodecResult<Vec<u8>>
where
    A: Array2<Element = Rgb> + Sync,
    T: ChromaTable + Sync,
{
    let header = StreamHeader::new(
        image.width() - image.width() % BLOCK_SIZE,
        image.height() - image.height() % BLOCK_SIZE,
    );
    if header.width != image.width() || header.height != image.height() {
        debug!(
            "Trimming {}x{} image to {}x{}",
            image.width(),
            image.height(),
            header.width,
            header.height
        );
    }

    let quantizer = Quantizer::new(table);
    let codewords = encode_blocks(image, quantizer, &header, options)?;
    debug!(
        width = header.width,
        height = header.height,
        blocks = codewords.len(),
        "Encoded image"
    );

    let mut stream = Vec::with_capacity(
        HEADER_TAG.len() + MAX_DIMENSIONS_LEN + codewords.len() * CODEWORD_SIZE,
    );
    header.write_to(&mut stream);
    append_codewords(&mut stream, &codewords);
    Ok(stream)
}

fn encode_blocks<A, T>(
    image: &Pixmap<A>,
    quantizer: Quantizer<'_, T>,
    header: &StreamHeader,
    options: CompressOptions,
) -> Result<Vec<Codeword>, BitpackError>
where
    A: Array2<Element = Rgb> + Sync,
    T: ChromaTable + Sync,
{
    #[cfg(feature = "multithreaded")]
    {
        use rayon::prelude::*;

        if options.multithreaded {
            // Rows are collected in order, so the output matches the sequential walk.
            let rows = (0..header.block_rows())
                .into_par_iter()
                .map(|block_row| encode_row(image, quantizer, header, block_row))
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(rows.concat());
        }
    }

    #[cfg(not(feature = "multithreaded"))]
    let _ = options;

    let mut codewords = Vec::with_capacity(header.block_columns() * header.block_rows());
    for block_row in 0..header.block_rows() {
        codewords.extend(encode_row(image, quantizer, header, block_row)?);
    }
    Ok(codewords)
}

fn encode_row<A, T>(
    image: &Pixmap<A>,
    quantizer: Quantizer<'_, T>,
    header: &StreamHeader,
    block_row: usize,
) -> Result<Vec<Codeword>, BitpackError>
where
    A: Array2<Element = Rgb>,
    T: ChromaTable,
{
    (0..header.block_columns())
        .map(|block_col| {
            encode_block(
                image,
                quantizer,
                block_col * BLOCK_SIZE,
                block_row * BLOCK_SIZE,
            )
        })
        .collect()
}

/// Runs the encode chain on the block whose top-left pixel is (`col`, `row`).
#[inline]
fn encode_block<A, T>(
    image: &Pixmap<A>,
    quantizer: Quantizer<'_, T>,
    col: usize,
    row: usize,
) -> Result<Codeword, BitpackError>
where
    A: Array2<Element = Rgb>,
    T: ChromaTable,
{
    let block = BLOCK_OFFSETS
        .map(|(dc, dr)| rgb_to_ycc(*image.pixels.at(col + dc, row + dr), image.denominator));
    Codeword::pack(&quantizer.quantize(&block))
}
