use super::constants::CHANNELS;
use super::parse_ppm::{parse_ppm, PpmFormat, PpmInfo, Token, Tokens};
use crate::error::PpmError;
use comp40_codec::raster::{Pixmap, Rgb, UArray2};
use tracing::debug;

/// Reads a complete PPM image.
///
/// The returned [`Pixmap`] uses the file's `maxval` as its denominator.
/// Data after the last sample is ignored.
///
/// # Errors
///
/// Any error from [`parse_ppm`], plus:
///
/// - [`PpmError::ImageTooLarge`] if the sample count overflows.
/// - [`PpmError::TruncatedPixelData`] if there are fewer samples than the header declares.
/// - [`PpmError::SampleOutOfRange`] if a sample exceeds `maxval`.
/// - [`PpmError::InvalidPlainSample`] if a `P3` sample is not a number.
pub fn read_ppm(data: &[u8]) -> Result<Pixmap<UArray2<Rgb>>, PpmError> {
    let info = parse_ppm(data)?;
    let too_large = PpmError::ImageTooLarge {
        width: info.width,
        height: info.height,
    };
    let Some(sample_count) = info.sample_count() else {
        return Err(too_large);
    };

    let body = &data[info.data_offset..];
    let samples = match info.format {
        PpmFormat::Raw => read_raw_samples(body, &info, sample_count)?,
        PpmFormat::Plain => read_plain_samples(body, &info, sample_count)?,
    };
    debug!(
        width = info.width,
        height = info.height,
        maxval = info.maxval,
        format = ?info.format,
        "Read PPM image"
    );

    let pixels = samples
        .chunks_exact(CHANNELS)
        .map(|rgb| Rgb::new(rgb[0], rgb[1], rgb[2]))
        .collect();
    let pixels = UArray2::from_row_major(info.width, info.height, pixels).ok_or(too_large)?;
    Ok(Pixmap::new(pixels, info.maxval))
}

fn read_raw_samples(body: &[u8], info: &PpmInfo, count: usize) -> Result<Vec<u16>, PpmError> {
    let sample_size = info.bytes_per_sample();
    let needed = count
        .checked_mul(sample_size)
        .ok_or(PpmError::ImageTooLarge {
            width: info.width,
            height: info.height,
        })?;
    if body.len() < needed {
        return Err(PpmError::TruncatedPixelData {
            expected: count,
            read: body.len() / sample_size,
        });
    }

    body[..needed]
        .chunks_exact(sample_size)
        .map(|bytes| {
            // Big endian, 1 or 2 bytes.
            let sample = bytes
                .iter()
                .fold(0u64, |sample, &byte| (sample << 8) | byte as u64);
            check_sample(sample, info.maxval)
        })
        .collect()
}

fn read_plain_samples(body: &[u8], info: &PpmInfo, count: usize) -> Result<Vec<u16>, PpmError> {
    // Every sample takes at least one byte, so this bounds the allocation by the input.
    let mut samples = Vec::with_capacity(count.min(body.len()));
    let mut tokens = Tokens::new(body, 0);
    for index in 0..count {
        match tokens.next_number() {
            Token::Number(value) => samples.push(check_sample(value, info.maxval)?),
            Token::End => {
                return Err(PpmError::TruncatedPixelData {
                    expected: count,
                    read: index,
                })
            }
            Token::Invalid => return Err(PpmError::InvalidPlainSample { index }),
        }
    }

    Ok(samples)
}

#[inline]
fn check_sample(sample: u64, maxval: u16) -> Result<u16, PpmError> {
    if sample > maxval as u64 {
        return Err(PpmError::SampleOutOfRange { sample, maxval });
    }
    Ok(sample as u16)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[test]
    fn reads_raw_single_byte_samples() {
        let image = read_ppm(&raw_ppm(2, 1, 255, &[255, 0, 0, 10, 20, 30])).unwrap();
        assert_eq!(image.denominator, 255);
        assert_eq!(image.width(), 2);
        assert_eq!(image.height(), 1);
        assert_eq!(*image.pixels.at(0, 0), Rgb::new(255, 0, 0));
        assert_eq!(*image.pixels.at(1, 0), Rgb::new(10, 20, 30));
    }

    #[test]
    fn reads_raw_two_byte_samples_big_endian() {
        let samples = [0x01, 0x02, 0xFF, 0xFF, 0x00, 0x07];
        let image = read_ppm(&raw_ppm(1, 1, 65535, &samples)).unwrap();
        assert_eq!(image.denominator, 65535);
        assert_eq!(*image.pixels.at(0, 0), Rgb::new(0x0102, 0xFFFF, 7));
    }

    #[test]
    fn reads_plain_samples_row_major() {
        let data = b"P3\n# tiny\n2 2\n15\n 1 2 3   4 5 6\n7 8 9\n10 11 12\n";
        let image = read_ppm(data).unwrap();
        assert_eq!(image.denominator, 15);
        assert_eq!(*image.pixels.at(1, 0), Rgb::new(4, 5, 6));
        assert_eq!(*image.pixels.at(0, 1), Rgb::new(7, 8, 9));
        assert_eq!(*image.pixels.at(1, 1), Rgb::new(10, 11, 12));
    }

    #[test]
    fn trailing_data_is_ignored() {
        let image = read_ppm(&raw_ppm(1, 1, 255, &[1, 2, 3, 4, 5])).unwrap();
        assert_eq!(*image.pixels.at(0, 0), Rgb::new(1, 2, 3));
    }

    #[test]
    fn empty_image_is_allowed() {
        let image = read_ppm(b"P6\n0 0\n255\n").unwrap();
        assert_eq!(image.pixels.size(), 0);
    }

    #[rstest]
    #[case(raw_ppm(2, 1, 255, &[1, 2, 3, 4, 5]), 6, 5)]
    #[case(raw_ppm(1, 1, 1000, &[0, 1, 0, 2, 0]), 3, 2)]
    #[case(b"P3\n1 1\n255\n1 2".to_vec(), 3, 2)]
    fn truncated_pixel_data_is_rejected(
        #[case] data: Vec<u8>,
        #[case] expected: usize,
        #[case] read: usize,
    ) {
        match read_ppm(&data) {
            Err(PpmError::TruncatedPixelData {
                expected: e,
                read: r,
            }) => assert_eq!((e, r), (expected, read)),
            other => panic!("expected truncation, got {other:?}"),
        }
    }

    #[rstest]
    #[case(raw_ppm(1, 1, 100, &[1, 101, 3]), 101, 100)]
    #[case(raw_ppm(1, 1, 300, &[0, 1, 1, 45, 0, 3]), 301, 300)]
    #[case(b"P3\n1 1\n7\n1 2 8\n".to_vec(), 8, 7)]
    fn samples_above_maxval_are_rejected(
        #[case] data: Vec<u8>,
        #[case] sample: u64,
        #[case] maxval: u16,
    ) {
        match read_ppm(&data) {
            Err(PpmError::SampleOutOfRange {
                sample: s,
                maxval: m,
            }) => assert_eq!((s, m), (sample, maxval)),
            other => panic!("expected out of range sample, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_plain_sample_is_rejected() {
        assert!(matches!(
            read_ppm(b"P3\n1 1\n255\n1 x 3\n"),
            Err(PpmError::InvalidPlainSample { index: 1 })
        ));
    }

    #[test]
    fn huge_header_fails_without_allocating() {
        let data = b"P6\n4000000000 4000000000\n255\n\0\0\0";
        assert!(matches!(
            read_ppm(data),
            Err(PpmError::TruncatedPixelData { .. }) | Err(PpmError::ImageTooLarge { .. })
        ));
    }
}
