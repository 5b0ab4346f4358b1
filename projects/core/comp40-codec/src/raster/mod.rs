//! Raster containers used by the codec.
//!
//! The pipeline is written against the [`Array2`] trait, so any 2D container with
//! `(column, row)` addressing can be compressed. [`UArray2`] is the implementation
//! used by the PPM reader and by decompression.

mod array2;
mod pixel;
mod uarray2;

pub use array2::Array2;
pub use pixel::Rgb;
pub use uarray2::UArray2;

/// An image: a grid of [`Rgb`] pixels plus the denominator its channels are fractions of.
///
/// For images read from PPM files the denominator is the file's `maxval`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pixmap<A> {
    /// The pixel grid.
    pub pixels: A,
    /// Value of a fully saturated channel. Never 0 for a valid image.
    pub denominator: u16,
}

impl<A: Array2<Element = Rgb>> Pixmap<A> {
    /// Wraps a pixel grid with the given denominator.
    pub fn new(pixels: A, denominator: u16) -> Self {
        Self {
            pixels,
            denominator,
        }
    }

    /// Width of the image in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.pixels.width()
    }

    /// Height of the image in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.pixels.height()
    }
}
