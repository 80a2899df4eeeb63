/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use merle_benches::{sample_buffer, sample_pixels, DIMENSIONS};
use merle_core::options::KernelOptions;
use merle_image::buffer::PixelBuffer;
use merle_image::codec::{decode_interleaved_into, encode_interleaved_into};

fn strategies() -> [(&'static str, KernelOptions); 2] {
    [
        ("scalar", KernelOptions::new_scalar()),
        ("vectorized", KernelOptions::new_fast())
    ]
}

fn bench_deinterleave(c: &mut Criterion) {
    let (width, height) = DIMENSIONS;
    let pixels = sample_pixels();

    let mut group = c.benchmark_group("codec: deinterleave");
    group.throughput(Throughput::Bytes(pixels.len() as u64));

    for (name, options) in strategies() {
        let mut buffer = PixelBuffer::new_with_options(options);

        group.bench_function(name, |b| {
            b.iter(|| {
                decode_interleaved_into(black_box(&pixels), width, height, &mut buffer).unwrap();
                black_box(&buffer);
            })
        });
    }
}

fn bench_interleave(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec: interleave");

    for (name, options) in strategies() {
        let buffer = sample_buffer(options);
        let mut output = vec![0_u8; buffer.len()];

        group.throughput(Throughput::Bytes(buffer.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| {
                encode_interleaved_into(black_box(&buffer), &mut output).unwrap();
                black_box(&output);
            })
        });
    }
}

criterion_group!(benches, bench_deinterleave, bench_interleave);

criterion_main!(benches);
