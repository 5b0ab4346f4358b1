#![no_main]

// Arbitrary input must never panic the PPM reader, and anything it accepts must
// survive being written and read back.

use comp40_ppm::{read_ppm, write_ppm};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(image) = read_ppm(data) else {
        return;
    };

    let mut written = Vec::new();
    write_ppm(&image, &mut written).expect("writing to a Vec cannot fail");
    let reread = read_ppm(&written).expect("written PPM is readable");
    assert_eq!(reread.denominator, image.denominator);
    assert_eq!(reread.pixels.as_slice(), image.pixels.as_slice());
});
