/// Shared constants between modules.
pub mod constants;

/// Determine if a file is a PPM file.
pub mod likely_ppm;

/// Parse the header of a PPM file.
pub mod parse_ppm;

/// Decode PPM pixel data into a [`Pixmap`](comp40_codec::raster::Pixmap).
pub mod read;

/// Encode a [`Pixmap`](comp40_codec::raster::Pixmap) as a raw PPM.
pub mod write;

pub use likely_ppm::*;
pub use parse_ppm::*;
pub use read::*;
pub use write::*;
