use crate::error::CliError;
use bytesize::ByteSize;
use comp40_codec::raster::{Rgb, UArray2};
use comp40_codec::{decompress, StandardChromaTable};
use comp40_ppm::write_ppm;
use std::io::Write;
use std::time::Instant;
use tracing::info;

/// Decompresses the stream in `input` and writes it to `out` as a raw PPM.
pub fn handle_decompress_command<W: Write + ?Sized>(
    input: &[u8],
    out: &mut W,
) -> Result<(), CliError> {
    let start = Instant::now();
    let image = decompress::<UArray2<Rgb>, _>(input, &StandardChromaTable)?;

    write_ppm(&image, out)?;
    out.flush()?;

    info!(
        "Decompressed {} stream to a {}x{} image in {:.2?}",
        ByteSize(input.len() as u64),
        image.width(),
        image.height(),
        start.elapsed()
    );
    Ok(())
}
