//! PPM format constants

/// Magic of a plain (ASCII) PPM.
pub(crate) const PLAIN_MAGIC: [u8; 2] = *b"P3";

/// Magic of a raw (binary) PPM.
pub(crate) const RAW_MAGIC: [u8; 2] = *b"P6";

/// Length of the magic at the start of the file.
pub(crate) const MAGIC_SIZE: usize = 2;

/// Starts a comment which runs to the end of the line.
pub(crate) const COMMENT_START: u8 = b'#';

/// Largest maxval allowed by the format.
pub(crate) const MAX_MAXVAL: u64 = u16::MAX as u64;

/// Samples for maxvals up to this value take one byte in a raw PPM; larger take two.
pub(crate) const MAX_SINGLE_BYTE_MAXVAL: u16 = u8::MAX as u16;

/// Channels per pixel.
pub(crate) const CHANNELS: usize = 3;
