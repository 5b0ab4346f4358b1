//! Width tests: can a value be represented in a field of a given width?

use crate::shift::{low_mask, shl};
use crate::WORD_BITS;

/// Returns `true` if `n` can be represented in `width` unsigned bits.
///
/// A field of width 0 can only represent `0`.
///
/// # Panics
///
/// If `width > 64`.
#[inline]
pub fn fits_unsigned(n: u64, width: u32) -> bool {
    assert!(width <= WORD_BITS, "bit width {width} exceeds {WORD_BITS}");
    n <= low_mask(width)
}

/// Returns `true` if `n` can be represented in `width` two's complement bits.
///
/// A field of width 0 can only represent `0`. Otherwise the representable range
/// is `-2^(width-1) ..= 2^(width-1) - 1`.
///
/// # Panics
///
/// If `width > 64`.
#[inline]
pub fn fits_signed(n: i64, width: u32) -> bool {
    assert!(width <= WORD_BITS, "bit width {width} exceeds {WORD_BITS}");
    if width == 0 {
        return n == 0;
    }

    // 2^(width-1); for width == 64 this is 2^63, which only fits as a u64.
    let half_range = shl(1, width - 1);
    if n < 0 {
        n.unsigned_abs() <= half_range
    } else {
        (n as u64) < half_range
    }
}
