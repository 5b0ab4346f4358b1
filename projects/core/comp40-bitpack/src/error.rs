//! Error types for bitfield insertion.

use thiserror::Error;

/// Errors that can occur when inserting a value into a bitfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BitpackError {
    /// The unsigned value needs more than `width` bits.
    #[error("Overflow packing bits: {value} does not fit in a {width} bit unsigned field")]
    UnsignedOverflow {
        /// The value that was being inserted
        value: u64,
        /// The width of the destination field
        width: u32,
    },

    /// The signed value is outside the two's complement range of `width` bits.
    #[error("Overflow packing bits: {value} does not fit in a {width} bit signed field")]
    SignedOverflow {
        /// The value that was being inserted
        value: i64,
        /// The width of the destination field
        width: u32,
    },
}
