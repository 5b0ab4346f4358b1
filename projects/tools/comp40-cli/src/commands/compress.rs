use crate::error::CliError;
use bytesize::ByteSize;
use comp40_codec::{compress_to_vec, CompressOptions, StandardChromaTable};
use comp40_ppm::read_ppm;
use std::io::Write;
use std::time::Instant;
use tracing::info;

/// Reads a PPM image from `input` and writes its compressed stream to `out`.
pub fn handle_compress_command<W: Write + ?Sized>(
    input: &[u8],
    out: &mut W,
) -> Result<(), CliError> {
    let start = Instant::now();
    let image = read_ppm(input)?;
    let options = CompressOptions {
        multithreaded: cfg!(feature = "multithreaded"),
    };
    let stream = compress_to_vec(&image, &StandardChromaTable, options)?;

    out.write_all(&stream)?;
    out.flush()?;

    info!(
        "Compressed {}x{} image: {} -> {} in {:.2?}",
        image.width(),
        image.height(),
        ByteSize(input.len() as u64),
        ByteSize(stream.len() as u64),
        start.elapsed()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use comp40_codec::stream::HEADER_TAG;

    #[test]
    fn writes_stream_for_ppm_input() {
        let input = b"P3\n3 3\n255\n\
            255 255 255  255 255 255  0 0 0\n\
            255 255 255  255 255 255  0 0 0\n\
            0 0 0  0 0 0  0 0 0\n";
        let mut out = Vec::new();
        handle_compress_command(input, &mut out).unwrap();

        let mut expected = HEADER_TAG.to_vec();
        expected.extend_from_slice(b"2 2\n");
        expected.extend_from_slice(&[0xFF, 0x80, 0x00, 0x77]);
        assert_eq!(out, expected);
    }

    #[test]
    fn rejects_non_ppm_input() {
        let mut out = Vec::new();
        let result = handle_compress_command(b"not an image", &mut out);
        assert!(matches!(result, Err(CliError::Ppm(_))));
        assert!(out.is_empty());
    }
}
