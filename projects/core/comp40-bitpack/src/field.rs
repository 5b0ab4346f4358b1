//! Extraction and insertion of bitfields within a 64-bit word.

use crate::error::BitpackError;
use crate::fits::{fits_signed, fits_unsigned};
use crate::shift::{low_mask, sar, shl, shr};
use crate::WORD_BITS;

/// Validates that a field of `width` bits at `lsb` lies within a 64-bit word.
#[inline(always)]
fn check_field(width: u32, lsb: u32) {
    assert!(width <= WORD_BITS, "bit width {width} exceeds {WORD_BITS}");
    assert!(
        lsb <= WORD_BITS - width,
        "field of width {width} at lsb {lsb} does not fit in a {WORD_BITS} bit word"
    );
}

/// Mask selecting bits `[lsb, lsb + width)`.
#[inline(always)]
fn field_mask(width: u32, lsb: u32) -> u64 {
    shl(low_mask(width), lsb)
}

/// Extracts the unsigned field of `width` bits starting at bit `lsb`.
///
/// A field of width 0 always yields 0.
///
/// # Panics
///
/// If `width > 64` or `width + lsb > 64`.
#[inline]
pub fn extract_unsigned(word: u64, width: u32, lsb: u32) -> u64 {
    check_field(width, lsb);
    shr(word, lsb) & low_mask(width)
}

/// Extracts the signed field of `width` bits starting at bit `lsb`.
///
/// The field is sign-extended from its most significant bit (`width - 1`).
/// A field of width 0 always yields 0.
///
/// # Panics
///
/// If `width > 64` or `width + lsb > 64`.
#[inline]
pub fn extract_signed(word: u64, width: u32, lsb: u32) -> i64 {
    check_field(width, lsb);
    if width == 0 {
        return 0;
    }

    // Move the field's top bit into bit 63, then shift back down arithmetically.
    let unused = WORD_BITS - width;
    let raw = extract_unsigned(word, width, lsb);
    sar(shl(raw, unused) as i64, unused)
}

/// Returns a copy of `word` with bits `[lsb, lsb + width)` replaced by `value`.
///
/// # Errors
///
/// [`BitpackError::UnsignedOverflow`] if `value` needs more than `width` bits.
///
/// # Panics
///
/// If `width > 64` or `width + lsb > 64`.
#[inline]
pub fn insert_unsigned(word: u64, width: u32, lsb: u32, value: u64) -> Result<u64, BitpackError> {
    check_field(width, lsb);
    if !fits_unsigned(value, width) {
        return Err(BitpackError::UnsignedOverflow { value, width });
    }

    Ok((word & !field_mask(width, lsb)) | shl(value, lsb))
}

/// Returns a copy of `word` with bits `[lsb, lsb + width)` replaced by the two's
/// complement representation of `value`.
///
/// # Errors
///
/// [`BitpackError::SignedOverflow`] if `value` is outside the signed range of
/// `width` bits.
///
/// # Panics
///
/// If `width > 64` or `width + lsb > 64`.
#[inline]
pub fn insert_signed(word: u64, width: u32, lsb: u32, value: i64) -> Result<u64, BitpackError> {
    check_field(width, lsb);
    if !fits_signed(value, width) {
        return Err(BitpackError::SignedOverflow { value, width });
    }

    // Drop the sign extension above the field before shifting it into place.
    let bits = (value as u64) & low_mask(width);
    Ok((word & !field_mask(width, lsb)) | shl(bits, lsb))
}
