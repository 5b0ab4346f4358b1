#![no_main]

// Arbitrary streams must decompress or fail cleanly, and every decompressed image
// must compress again.

use comp40_codec::raster::{Rgb, UArray2};
use comp40_codec::{compress_to_vec, decompress, CompressOptions, StandardChromaTable};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(image) = decompress::<UArray2<Rgb>, _>(data, &StandardChromaTable) else {
        return;
    };

    let stream = compress_to_vec(&image, &StandardChromaTable, CompressOptions::default())
        .expect("decompressed images always compress");
    let again = decompress::<UArray2<Rgb>, _>(&stream, &StandardChromaTable)
        .expect("compressed output always decompresses");
    assert_eq!(again.width(), image.width());
    assert_eq!(again.height(), image.height());
});
