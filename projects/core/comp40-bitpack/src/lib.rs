//! # comp40-bitpack
//!
//! Primitives for storing narrow integer fields inside a 64-bit word.
//!
//! A field is described by its `width` (number of bits, `0..=64`) and its `lsb`
//! (index of its least significant bit within the word). The field occupies bits
//! `[lsb, lsb + width)`, so `width + lsb` may never exceed 64.
//!
//! Unsigned fields hold plain binary values; signed fields hold two's complement
//! values and are sign-extended from bit `width - 1` on extraction.
//!
//! Insertion never truncates. If a value does not fit into the field, the insert
//! functions return [`BitpackError`] and the word is left untouched.
//!
//! Passing `width > 64` or `width + lsb > 64` is a caller bug and panics.
//!
//! ## Usage
//!
//! ```rust
//! use comp40_bitpack::{extract_signed, extract_unsigned, insert_signed, insert_unsigned};
//!
//! let word = insert_unsigned(0, 9, 23, 400)?;
//! let word = insert_signed(word, 5, 18, -7)?;
//!
//! assert_eq!(extract_unsigned(word, 9, 23), 400);
//! assert_eq!(extract_signed(word, 5, 18), -7);
//!
//! // 16 needs 5 bits, so it does not fit in a 4 bit field.
//! assert!(insert_unsigned(word, 4, 0, 16).is_err());
//! # Ok::<(), comp40_bitpack::BitpackError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

pub mod error;
mod field;
mod fits;
pub(crate) mod shift;

pub use error::BitpackError;
pub use field::{extract_signed, extract_unsigned, insert_signed, insert_unsigned};
pub use fits::{fits_signed, fits_unsigned};

/// Number of bits in the words manipulated by this crate.
pub const WORD_BITS: u32 = u64::BITS;

/// Common test prelude for avoiding duplicate imports in test modules
#[cfg(test)]
pub(crate) mod test_prelude;
