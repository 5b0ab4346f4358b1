use comp40_codec::raster::{Array2, Pixmap, Rgb, UArray2};
use comp40_codec::{compress_to_vec, decompress, CompressOptions, StandardChromaTable};
use core::hint::black_box;
use criterion::{criterion_group, criterion_main, Criterion, Throughput};

fn create_image(width: usize, height: usize) -> Pixmap<UArray2<Rgb>> {
    let mut pixels = UArray2::new(width, height, Rgb::default());
    // Smooth gradients with some high frequency detail mixed in
    pixels.visit_row_major_mut(|col, row, pixel| {
        *pixel = Rgb::new(
            ((col * 255) / width) as u16,
            ((row * 255) / height) as u16,
            ((col ^ row) & 0xFF) as u16,
        );
    });
    Pixmap::new(pixels, 255)
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("COMP40 Pipeline");
    let (width, height) = (2048, 2048); // 4MP
    let image = create_image(width, height);
    let stream = compress_to_vec(&image, &StandardChromaTable, CompressOptions::default()).unwrap();

    group.throughput(Throughput::Elements((width * height) as u64));

    group.bench_function("compress", |b| {
        b.iter(|| {
            compress_to_vec(
                black_box(&image),
                &StandardChromaTable,
                CompressOptions::default(),
            )
            .unwrap()
        })
    });

    #[cfg(feature = "multithreaded")]
    {
        let options = CompressOptions {
            multithreaded: true,
        };
        group.bench_function("compress_multithreaded", |b| {
            b.iter(|| compress_to_vec(black_box(&image), &StandardChromaTable, options).unwrap())
        });
    }

    group.bench_function("decompress", |b| {
        b.iter(|| {
            decompress::<UArray2<Rgb>, _>(black_box(&stream), &StandardChromaTable).unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
