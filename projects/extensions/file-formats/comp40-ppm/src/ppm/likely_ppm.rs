use super::constants::*;

/// Determines if the given data likely represents a PPM image.
/// This only checks the `P3`/`P6` magic and that whitespace follows it.
/// For header validation, use [`parse_ppm`].
///
/// [`parse_ppm`]: crate::ppm::parse_ppm::parse_ppm
#[inline(always)]
pub fn likely_ppm(data: &[u8]) -> bool {
    data.len() > MAGIC_SIZE
        && (data[..MAGIC_SIZE] == PLAIN_MAGIC || data[..MAGIC_SIZE] == RAW_MAGIC)
        && data[MAGIC_SIZE].is_ascii_whitespace()
}
