//! Mapping between chroma values and 4-bit chroma indices.
//!
//! Each codeword stores the block's average `Pb` and `Pr` as an index into a table
//! of 16 representative values. Values are spaced more tightly near zero, where
//! most chroma in natural images lies.

/// A table of 16 representative chroma values.
///
/// The quantizer takes the table it should use by reference, so alternative
/// tables can be supplied for experimentation. Both sides of a round trip must use
/// the same table.
pub trait ChromaTable {
    /// Returns the index (`0..=15`) of the table entry nearest to `chroma`.
    fn index_of_chroma(&self, chroma: f32) -> u8;

    /// Returns the representative chroma value stored at `index`.
    ///
    /// # Panics
    ///
    /// If `index > 15`.
    fn chroma_of_index(&self, index: u8) -> f32;
}

/// Number of entries in a chroma table.
pub const CHROMA_TABLE_LEN: usize = 16;

/// Entries of the [`StandardChromaTable`], in ascending order.
pub const STANDARD_CHROMA_CENTRES: [f32; CHROMA_TABLE_LEN] = [
    -0.35, -0.20, -0.15, -0.10, -0.077, -0.055, -0.033, -0.011, 0.011, 0.033, 0.055, 0.077, 0.10,
    0.15, 0.20, 0.35,
];

/// Index returned for a chroma of `NaN`: the entry just below zero.
const NAN_INDEX: u8 = 7;

/// The chroma table used by the COMP40 stream format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardChromaTable;

impl ChromaTable for StandardChromaTable {
    /// Returns the nearest entry; exact midpoints resolve to the lower index.
    ///
    /// Values beyond either end of the table saturate to index 0 or 15.
    fn index_of_chroma(&self, chroma: f32) -> u8 {
        if chroma.is_nan() {
            return NAN_INDEX;
        }

        // Distances stop being comparable once the value swamps the table.
        let last = CHROMA_TABLE_LEN - 1;
        if chroma >= STANDARD_CHROMA_CENTRES[last] {
            return last as u8;
        }
        if chroma <= STANDARD_CHROMA_CENTRES[0] {
            return 0;
        }

        let mut best = 0;
        let mut best_distance = (chroma - STANDARD_CHROMA_CENTRES[0]).abs();
        for (index, centre) in STANDARD_CHROMA_CENTRES.iter().enumerate().skip(1) {
            let distance = (chroma - centre).abs();
            if distance < best_distance {
                best = index;
                best_distance = distance;
            }
        }

        best as u8
    }

    #[inline]
    fn chroma_of_index(&self, index: u8) -> f32 {
        assert!(
            (index as usize) < CHROMA_TABLE_LEN,
            "chroma index {index} is out of range"
        );
        STANDARD_CHROMA_CENTRES[index as usize]
    }
}
