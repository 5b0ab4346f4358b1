//! Common test imports and utilities for PPM tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// External crates commonly used in tests
pub use rstest::rstest;

pub use comp40_codec::raster::{Array2, Pixmap, Rgb, UArray2};

/// Builds a raw (`P6`) image from its header fields and sample bytes.
pub fn raw_ppm(width: usize, height: usize, maxval: u32, samples: &[u8]) -> Vec<u8> {
    let mut data = format!("P6\n{width} {height}\n{maxval}\n").into_bytes();
    data.extend_from_slice(samples);
    data
}
