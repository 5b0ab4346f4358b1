//! Quantization of a block's coefficients and chroma into small integers.
//!
//! | field            | source                  | range        |
//! |------------------|-------------------------|--------------|
//! | `a`              | `a * 511`               | `0..=511`    |
//! | `b`, `c`, `d`    | `clamp(x, ±0.3) * 50`   | `-15..=15`   |
//! | `pb_index`       | mean `Pb` via the table | `0..=15`     |
//! | `pr_index`       | mean `Pr` via the table | `0..=15`     |
//!
//! Rounding is to the nearest integer with halves away from zero.

use crate::block_transform::{self, Coefficients};
use crate::chroma::ChromaTable;
use crate::color::ComponentVideo;
use crate::BLOCK_AREA;

/// Scale applied to coefficient `a` before rounding.
pub const A_SCALE: f32 = 511.0;

/// Scale applied to coefficients `b`, `c` and `d` before rounding.
pub const BCD_SCALE: f32 = 50.0;

/// Coefficients `b`, `c` and `d` are clamped to `-BCD_LIMIT..=BCD_LIMIT`.
pub const BCD_LIMIT: f32 = 0.3;

/// The six integer fields stored in a codeword.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct QuantizedBlock {
    /// Quantized average luma.
    pub a: u16,
    /// Quantized vertical gradient.
    pub b: i8,
    /// Quantized horizontal gradient.
    pub c: i8,
    /// Quantized diagonal gradient.
    pub d: i8,
    /// Chroma table index of the mean `Pb`.
    pub pb_index: u8,
    /// Chroma table index of the mean `Pr`.
    pub pr_index: u8,
}

/// Converts blocks of component video to [`QuantizedBlock`]s and back using a
/// borrowed [`ChromaTable`].
#[derive(Debug)]
pub struct Quantizer<'t, T> {
    table: &'t T,
}

// Manual impls; a derive would require `T: Copy`.
impl<T> Clone for Quantizer<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Quantizer<'_, T> {}

impl<'t, T: ChromaTable> Quantizer<'t, T> {
    /// Creates a quantizer which maps chroma through `table`.
    #[inline]
    pub fn new(table: &'t T) -> Self {
        Self { table }
    }

    /// Quantizes the four pixels of a block (row-major within the block).
    pub fn quantize(&self, block: &[ComponentVideo; BLOCK_AREA]) -> QuantizedBlock {
        let coefficients = block_transform::forward(block.map(|pixel| pixel.y));
        let pb = (block[0].pb + block[1].pb + block[2].pb + block[3].pb) / BLOCK_AREA as f32;
        let pr = (block[0].pr + block[1].pr + block[2].pr + block[3].pr) / BLOCK_AREA as f32;

        QuantizedBlock {
            a: quantize_a(coefficients.a),
            b: quantize_bcd(coefficients.b),
            c: quantize_bcd(coefficients.c),
            d: quantize_bcd(coefficients.d),
            pb_index: self.table.index_of_chroma(pb),
            pr_index: self.table.index_of_chroma(pr),
        }
    }

    /// Reconstructs the four pixels of a block. Every pixel shares the block's chroma.
    ///
    /// # Panics
    ///
    /// If either chroma index is outside of the table.
    pub fn dequantize(&self, block: QuantizedBlock) -> [ComponentVideo; BLOCK_AREA] {
        let luma = block_transform::inverse(Coefficients {
            a: block.a as f32 / A_SCALE,
            b: block.b as f32 / BCD_SCALE,
            c: block.c as f32 / BCD_SCALE,
            d: block.d as f32 / BCD_SCALE,
        });
        let pb = self.table.chroma_of_index(block.pb_index);
        let pr = self.table.chroma_of_index(block.pr_index);

        luma.map(|y| ComponentVideo::new(y, pb, pr))
    }
}

/// Quantizes the average luma coefficient into `0..=511`.
#[inline]
pub fn quantize_a(a: f32) -> u16 {
    (a.clamp(0.0, 1.0) * A_SCALE).round() as u16
}

/// Quantizes a gradient coefficient into `-15..=15`.
#[inline]
pub fn quantize_bcd(x: f32) -> i8 {
    (x.clamp(-BCD_LIMIT, BCD_LIMIT) * BCD_SCALE).round() as i8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chroma::StandardChromaTable;
    use crate::color::rgb_to_ycc;
    use crate::raster::Rgb;
    use crate::test_prelude::*;

    fn block_of(pixels: [Rgb; BLOCK_AREA]) -> [ComponentVideo; BLOCK_AREA] {
        pixels.map(|pixel| rgb_to_ycc(pixel, 255))
    }

    #[rstest]
    #[case(0.0, 0)]
    #[case(-0.1, 0)]
    #[case(0.25, 128)]
    #[case(1.0, 511)]
    #[case(1.5, 511)]
    #[case(f32::NAN, 0)]
    fn quantize_a_scales_and_clamps(#[case] a: f32, #[case] expected: u16) {
        assert_eq!(quantize_a(a), expected);
    }

    #[rstest]
    #[case(0.0, 0)]
    #[case(0.1, 5)]
    #[case(0.03, 2)]
    #[case(-0.03, -2)]
    #[case(0.05, 3)]
    #[case(-0.05, -3)]
    #[case(0.29, 15)]
    #[case(0.5, 15)]
    #[case(-0.5, -15)]
    fn quantize_bcd_rounds_half_away_from_zero(#[case] x: f32, #[case] expected: i8) {
        assert_eq!(quantize_bcd(x), expected);
    }

    #[test]
    fn white_block_quantizes_to_full_luma() {
        let quantizer = Quantizer::new(&StandardChromaTable);
        let block = block_of([Rgb::new(255, 255, 255); BLOCK_AREA]);
        assert_eq!(
            quantizer.quantize(&block),
            QuantizedBlock {
                a: 511,
                b: 0,
                c: 0,
                d: 0,
                pb_index: 7,
                pr_index: 7
            }
        );
    }

    #[test]
    fn patterned_block_records_gradients_and_chroma() {
        let quantizer = Quantizer::new(&StandardChromaTable);
        let block = block_of([
            Rgb::new(100, 100, 140),
            Rgb::new(120, 100, 140),
            Rgb::new(100, 120, 140),
            Rgb::new(120, 120, 140),
        ]);
        assert_eq!(
            quantizer.quantize(&block),
            QuantizedBlock {
                a: 227,
                b: 1,
                c: 1,
                d: 0,
                pb_index: 10,
                pr_index: 7
            }
        );
    }

    #[test]
    fn dequantize_broadcasts_chroma_to_every_pixel() {
        let quantizer = Quantizer::new(&StandardChromaTable);
        let pixels = quantizer.dequantize(QuantizedBlock {
            a: 511,
            b: 0,
            c: 0,
            d: 0,
            pb_index: 0,
            pr_index: 15,
        });
        for pixel in pixels {
            assert_eq!(pixel, ComponentVideo::new(1.0, -0.35, 0.35));
        }
    }

    #[test]
    fn dequantize_applies_inverse_transform() {
        let quantizer = Quantizer::new(&StandardChromaTable);
        let [y1, y2, y3, y4] = quantizer
            .dequantize(QuantizedBlock {
                a: 0,
                b: 5,
                c: 0,
                d: 0,
                pb_index: 7,
                pr_index: 8,
            })
            .map(|pixel| pixel.y);
        assert_eq!([y1, y2, y3, y4], [-0.1, -0.1, 0.1, 0.1]);
    }

    #[test]
    fn requantizing_dequantized_luma_is_stable() {
        let quantizer = Quantizer::new(&StandardChromaTable);
        let original = QuantizedBlock {
            a: 300,
            b: -7,
            c: 4,
            d: 2,
            pb_index: 3,
            pr_index: 12,
        };
        let restored = quantizer.quantize(&quantizer.dequantize(original));
        assert_eq!(restored, original);
    }

    #[test]
    #[should_panic]
    fn dequantize_rejects_chroma_index_outside_table() {
        Quantizer::new(&StandardChromaTable).dequantize(QuantizedBlock {
            pb_index: 16,
            ..Default::default()
        });
    }
}
