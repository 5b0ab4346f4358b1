//! # comp40-ppm
//!
//! Reads and writes Portable Pixmap (PPM) images as [`Pixmap`]s for the
//! [`comp40_codec`] pipeline.
//!
//! Both the plain (`P3`, ASCII) and raw (`P6`, binary) variants are read.
//! Output is always written as `P6`. Samples are one byte when `maxval < 256` and two
//! big endian bytes otherwise.
//!
//! ```rust
//! use comp40_codec::raster::Array2;
//! use comp40_ppm::{read_ppm, write_ppm};
//!
//! let image = read_ppm(b"P3\n2 1\n255\n255 0 0  0 0 255\n")?;
//! assert_eq!(image.pixels.at(1, 0).blue, 255);
//!
//! let mut out = Vec::new();
//! write_ppm(&image, &mut out)?;
//! assert!(out.starts_with(b"P6\n2 1\n255\n"));
//! # Ok::<(), comp40_ppm::PpmError>(())
//! ```
//!
//! [`Pixmap`]: comp40_codec::raster::Pixmap
#![warn(missing_docs)]

pub mod error;
pub mod ppm;

pub use error::PpmError;
pub use ppm::*;

/// Common test prelude for avoiding duplicate imports in test modules
#[cfg(test)]
pub(crate) mod test_prelude;
