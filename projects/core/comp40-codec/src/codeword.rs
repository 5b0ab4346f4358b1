//! Packing of a [`QuantizedBlock`] into a single 32-bit codeword.
//!
//! ```text
//!  31       23 22   18 17   13 12    8 7    4 3    0
//! +-----------+-------+-------+-------+------+------+
//! |  a (u9)   | b(i5) | c(i5) | d(i5) | Pb   | Pr   |
//! +-----------+-------+-------+-------+------+------+
//! ```
//!
//! Signed fields use two's complement. `Pb` and `Pr` are 4-bit chroma table indices.

use crate::quantize::QuantizedBlock;
use comp40_bitpack::{
    extract_signed, extract_unsigned, insert_signed, insert_unsigned, BitpackError,
};
use derive_enum_all_values::AllValues;

/// One of the six fields stored in a [`Codeword`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, AllValues)]
pub enum CodewordField {
    /// Average luma.
    A,
    /// Vertical gradient.
    B,
    /// Horizontal gradient.
    C,
    /// Diagonal gradient.
    D,
    /// Blue chroma index.
    PbIndex,
    /// Red chroma index.
    PrIndex,
}

impl CodewordField {
    /// Number of bits occupied by the field.
    pub const fn width(self) -> u32 {
        match self {
            Self::A => 9,
            Self::B | Self::C | Self::D => 5,
            Self::PbIndex | Self::PrIndex => 4,
        }
    }

    /// Position of the field's least significant bit.
    pub const fn lsb(self) -> u32 {
        match self {
            Self::A => 23,
            Self::B => 18,
            Self::C => 13,
            Self::D => 8,
            Self::PbIndex => 4,
            Self::PrIndex => 0,
        }
    }

    /// Whether the field holds a two's complement value.
    pub const fn is_signed(self) -> bool {
        matches!(self, Self::B | Self::C | Self::D)
    }

    /// Reads this field's value out of `block`.
    fn get(self, block: &QuantizedBlock) -> i64 {
        match self {
            Self::A => block.a as i64,
            Self::B => block.b as i64,
            Self::C => block.c as i64,
            Self::D => block.d as i64,
            Self::PbIndex => block.pb_index as i64,
            Self::PrIndex => block.pr_index as i64,
        }
    }
}

/// A packed 2x2 block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Codeword(pub u32);

impl Codeword {
    /// Packs all six fields of `block` into a codeword.
    ///
    /// # Errors
    ///
    /// Returns a [`BitpackError`] if any field is outside the range of its slot.
    /// Nothing is ever truncated to fit.
    pub fn pack(block: &QuantizedBlock) -> Result<Self, BitpackError> {
        let mut word = 0u64;
        for &field in CodewordField::all_values() {
            let value = field.get(block);
            word = if field.is_signed() {
                insert_signed(word, field.width(), field.lsb(), value)?
            } else {
                // Unsigned fields are sourced from unsigned integers.
                insert_unsigned(word, field.width(), field.lsb(), value as u64)?
            };
        }

        // Every field lies below bit 32.
        Ok(Self(word as u32))
    }

    /// Splits the codeword back into its six fields.
    pub fn unpack(self) -> QuantizedBlock {
        let word = self.0 as u64;
        let unsigned = |field: CodewordField| extract_unsigned(word, field.width(), field.lsb());
        let signed = |field: CodewordField| extract_signed(word, field.width(), field.lsb());

        QuantizedBlock {
            a: unsigned(CodewordField::A) as u16,
            b: signed(CodewordField::B) as i8,
            c: signed(CodewordField::C) as i8,
            d: signed(CodewordField::D) as i8,
            pb_index: unsigned(CodewordField::PbIndex) as u8,
            pr_index: unsigned(CodewordField::PrIndex) as u8,
        }
    }
}

impl From<Codeword> for u32 {
    fn from(codeword: Codeword) -> Self {
        codeword.0
    }
}
