//! Shift helpers that are defined for every shift amount.
//!
//! Rust's `<<` and `>>` panic in debug builds (and wrap in release builds) when the
//! shift amount equals the word size. Field arithmetic regularly needs shifts by
//! exactly 64 (e.g. a 0 bit wide field at `lsb == 64`), so these helpers saturate
//! instead.

use crate::WORD_BITS;

/// Logical left shift; shifting by 64 or more yields 0.
#[inline(always)]
pub(crate) const fn shl(value: u64, shift: u32) -> u64 {
    if shift >= WORD_BITS {
        0
    } else {
        value << shift
    }
}

/// Logical right shift; shifting by 64 or more yields 0.
#[inline(always)]
pub(crate) const fn shr(value: u64, shift: u32) -> u64 {
    if shift >= WORD_BITS {
        0
    } else {
        value >> shift
    }
}

/// Arithmetic right shift; shifting by 64 or more yields the sign fill.
#[inline(always)]
pub(crate) const fn sar(value: i64, shift: u32) -> i64 {
    if shift >= WORD_BITS {
        if value < 0 {
            -1
        } else {
            0
        }
    } else {
        value >> shift
    }
}

/// Mask with the low `width` bits set.
#[inline(always)]
pub(crate) const fn low_mask(width: u32) -> u64 {
    shr(u64::MAX, WORD_BITS - width)
}
