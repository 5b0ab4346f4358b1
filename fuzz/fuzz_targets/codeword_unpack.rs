#![no_main]

// Every 32-bit word is a valid codeword, and unpacking then packing must give it back.

use comp40_codec::{Codeword, Quantizer, StandardChromaTable};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|word: u32| {
    let codeword = Codeword(word);
    let fields = codeword.unpack();
    assert_eq!(Codeword::pack(&fields), Ok(codeword));

    // Any unpacked block must be reconstructible.
    let pixels = Quantizer::new(&StandardChromaTable).dequantize(fields);
    assert!(pixels.iter().all(|pixel| pixel.y.is_finite()));
});
