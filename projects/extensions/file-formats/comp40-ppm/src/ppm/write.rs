use super::constants::MAX_SINGLE_BYTE_MAXVAL;
use crate::error::PpmError;
use comp40_codec::raster::{Array2, Pixmap, Rgb};
use std::io::Write;

/// Writes `image` as a raw (`P6`) PPM using its denominator as `maxval`.
///
/// The whole file is assembled in memory and written with a single `write_all`.
/// Channels above the denominator are clamped to it.
///
/// # Errors
///
/// - [`PpmError::InvalidMaxval`] if the denominator is 0.
/// - [`PpmError::Io`] if writing to `out` fails.
pub fn write_ppm<A, W>(image: &Pixmap<A>, out: &mut W) -> Result<(), PpmError>
where
    A: Array2<Element = Rgb>,
    W: Write + ?Sized,
{
    let maxval = image.denominator;
    if maxval == 0 {
        return Err(PpmError::InvalidMaxval(0));
    }

    let wide = maxval > MAX_SINGLE_BYTE_MAXVAL;
    let mut buffer = format!("P6\n{} {}\n{}\n", image.width(), image.height(), maxval).into_bytes();
    buffer.reserve(image.pixels.size() * 3 * if wide { 2 } else { 1 });

    image.pixels.visit_row_major(|_, _, pixel| {
        for sample in [pixel.red, pixel.green, pixel.blue] {
            let sample = sample.min(maxval);
            if wide {
                buffer.extend_from_slice(&sample.to_be_bytes());
            } else {
                buffer.push(sample as u8);
            }
        }
    });

    out.write_all(&buffer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ppm::read_ppm;
    use crate::test_prelude::*;

    fn image_of(width: usize, height: usize, denominator: u16) -> Pixmap<UArray2<Rgb>> {
        let mut pixels = UArray2::new(width, height, Rgb::default());
        pixels.visit_row_major_mut(|col, row, pixel| {
            let value = ((col * 7 + row * 13) % (denominator as usize + 1)) as u16;
            *pixel = Rgb::new(value, denominator - value, value / 2);
        });
        Pixmap::new(pixels, denominator)
    }

    #[test]
    fn writes_single_byte_samples() {
        let image = Pixmap::new(UArray2::new(1, 1, Rgb::new(1, 2, 3)), 255);
        let mut out = Vec::new();
        write_ppm(&image, &mut out).unwrap();
        assert_eq!(out, raw_ppm(1, 1, 255, &[1, 2, 3]));
    }

    #[test]
    fn writes_two_byte_samples_big_endian() {
        let image = Pixmap::new(UArray2::new(1, 1, Rgb::new(0x0102, 0xFFFF, 7)), 65535);
        let mut out = Vec::new();
        write_ppm(&image, &mut out).unwrap();
        assert_eq!(out, raw_ppm(1, 1, 65535, &[0x01, 0x02, 0xFF, 0xFF, 0x00, 0x07]));
    }

    #[test]
    fn clamps_channels_above_denominator() {
        let image = Pixmap::new(UArray2::new(1, 1, Rgb::new(300, 0, 15)), 15);
        let mut out = Vec::new();
        write_ppm(&image, &mut out).unwrap();
        assert_eq!(out, raw_ppm(1, 1, 15, &[15, 0, 15]));
    }

    #[test]
    fn rejects_zero_denominator() {
        let image = Pixmap::new(UArray2::new(1, 1, Rgb::default()), 0);
        assert!(matches!(
            write_ppm(&image, &mut Vec::new()),
            Err(PpmError::InvalidMaxval(0))
        ));
    }

    #[rstest]
    #[case(3, 2, 255)]
    #[case(5, 4, 1000)]
    #[case(1, 1, 1)]
    #[case(0, 0, 255)]
    fn written_image_reads_back(
        #[case] width: usize,
        #[case] height: usize,
        #[case] denominator: u16,
    ) {
        let image = image_of(width, height, denominator);
        let mut out = Vec::new();
        write_ppm(&image, &mut out).unwrap();
        assert_eq!(read_ppm(&out).unwrap(), image);
    }
}
