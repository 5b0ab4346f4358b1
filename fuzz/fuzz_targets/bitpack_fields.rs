#![no_main]

// Checks that inserting a value and extracting it again is lossless whenever the
// value fits, and that the rest of the word is left untouched.

use comp40_bitpack::*;
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct FieldInput {
    pub word: u64,
    pub width: u8,
    pub lsb: u8,
    pub value: u64,
}

fuzz_target!(|input: FieldInput| {
    let width = (input.width % 65) as u32;
    let lsb = input.lsb as u32 % (WORD_BITS - width + 1);
    let mask = if width == 64 {
        u64::MAX
    } else {
        ((1u64 << width) - 1) << lsb
    };

    match insert_unsigned(input.word, width, lsb, input.value) {
        Ok(word) => {
            assert!(fits_unsigned(input.value, width));
            assert_eq!(extract_unsigned(word, width, lsb), input.value);
            assert_eq!(word & !mask, input.word & !mask);
        }
        Err(_) => assert!(!fits_unsigned(input.value, width)),
    }

    let signed = input.value as i64;
    match insert_signed(input.word, width, lsb, signed) {
        Ok(word) => {
            assert!(fits_signed(signed, width));
            assert_eq!(extract_signed(word, width, lsb), signed);
            assert_eq!(word & !mask, input.word & !mask);
        }
        Err(_) => assert!(!fits_signed(signed, width)),
    }
});
