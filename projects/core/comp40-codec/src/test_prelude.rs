//! Common test imports and utilities for codec tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// External crates commonly used in tests
pub use rstest::rstest;

use crate::raster::{Array2, Pixmap, Rgb, UArray2};
use crate::stream::HEADER_TAG;

/// Builds a `width x height` image with a denominator of 255, where `pixel(col, row)`
/// supplies every pixel.
pub fn image_from(
    width: usize,
    height: usize,
    pixel: impl Fn(usize, usize) -> Rgb,
) -> Pixmap<UArray2<Rgb>> {
    let mut pixels = UArray2::new(width, height, Rgb::default());
    pixels.visit_row_major_mut(|col, row, value| *value = pixel(col, row));
    Pixmap::new(pixels, 255)
}

/// Checkerboard-like image whose 2x2 blocks are all identical.
pub fn patterned_image(width: usize, height: usize) -> Pixmap<UArray2<Rgb>> {
    image_from(width, height, |col, row| {
        Rgb::new(
            100 + (col % 2) as u16 * 20,
            100 + (row % 2) as u16 * 20,
            140,
        )
    })
}

/// Smooth diagonal gradient.
pub fn gradient_image(width: usize, height: usize) -> Pixmap<UArray2<Rgb>> {
    image_from(width, height, |col, row| {
        let (col, row) = (col as u16, row as u16);
        Rgb::new(60 + col * 8, 80 + row * 6, 100 + col * 4 + row * 2)
    })
}

/// Builds a compressed stream from a dimensions line and raw codeword bytes.
pub fn stream_with(dimensions: &str, body: &[u8]) -> Vec<u8> {
    let mut data = HEADER_TAG.to_vec();
    data.extend_from_slice(dimensions.as_bytes());
    data.extend_from_slice(body);
    data
}
