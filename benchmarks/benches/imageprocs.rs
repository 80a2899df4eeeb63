/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use image::RgbaImage;
use merle_benches::{sample_buffer, sample_pixels, DIMENSIONS};
use merle_core::component::Component;
use merle_core::geometry::Degrees;
use merle_core::options::KernelOptions;
use merle_image::buffer::PixelBuffer;
use merle_image::traits::OperationsTrait;
use merle_procs::box_blur::BoxBlur;
use merle_procs::color_matrix::Sepia;
use merle_procs::exposure::Exposure;
use merle_procs::gaussian_blur::GaussianBlur;
use merle_procs::grayscale::Grayscale;
use merle_procs::histogram::histogram;
use merle_procs::hue::Hue;
use merle_procs::invert::Invert;
use merle_procs::premul_alpha::PremultiplyAlpha;
use merle_procs::saturation::Saturation;
use merle_procs::sobel::Sobel;
use merle_procs::statistics::BufferStatistics;
use merle_procs::transitions::FadeTransition;

fn strategies() -> [(&'static str, KernelOptions); 2] {
    [
        ("scalar", KernelOptions::new_scalar()),
        ("vectorized", KernelOptions::new_fast())
    ]
}

fn image_rs_sample() -> RgbaImage {
    let (width, height) = DIMENSIONS;
    RgbaImage::from_raw(width as u32, height as u32, sample_pixels()).unwrap()
}

/// Run `operation` under both strategies, plus a reference implementation when given
fn bench_inner<T, U>(c: &mut Criterion, name: &str, operation: T, image_rs_fn: Option<U>)
where
    T: Fn(&mut PixelBuffer),
    U: Fn(&mut RgbaImage)
{
    let mut group = c.benchmark_group(name);

    for (strategy, options) in strategies() {
        let mut buffer = sample_buffer(options);
        group.throughput(Throughput::Bytes(buffer.len() as u64));

        group.bench_function(strategy, |b| {
            b.iter(|| {
                operation(&mut buffer);
                black_box(());
            })
        });
    }
    if let Some(image_rs_fn) = image_rs_fn {
        let mut image = image_rs_sample();

        group.bench_function("image-rs", |b| {
            b.iter(|| {
                image_rs_fn(&mut image);
                black_box(());
            })
        });
    }
}

fn run(operation: &dyn OperationsTrait) -> impl Fn(&mut PixelBuffer) + '_ {
    move |buffer| operation.execute(buffer).unwrap()
}

fn bench_invert(c: &mut Criterion) {
    bench_inner(
        c,
        "imageprocs: invert",
        run(&Invert::new()),
        Some(|image: &mut RgbaImage| image::imageops::invert(image))
    );
}

fn bench_grayscale(c: &mut Criterion) {
    bench_inner(
        c,
        "imageprocs: grayscale",
        run(&Grayscale::new()),
        Some(|image: &mut RgbaImage| {
            black_box(image::imageops::grayscale(&*image));
        })
    );
}

fn bench_pointwise(c: &mut Criterion) {
    let none = None::<fn(&mut RgbaImage)>;

    bench_inner(c, "imageprocs: exposure", run(&Exposure::new(0.5)), none);
    bench_inner(c, "imageprocs: premultiply", run(&PremultiplyAlpha::new()), none);
    bench_inner(c, "imageprocs: saturation", run(&Saturation::new(0.4)), none);
    bench_inner(c, "imageprocs: sepia", run(&Sepia::new()), none);
    bench_inner(c, "imageprocs: hue", run(&Hue::new(Degrees(90.0))), none);
}

fn bench_gaussian(c: &mut Criterion) {
    bench_inner(
        c,
        "imageprocs: gaussian blur",
        run(&GaussianBlur::new(3, 1.5)),
        Some(|image: &mut RgbaImage| {
            black_box(image::imageops::blur(&*image, 1.5));
        })
    );
}

fn bench_spatial(c: &mut Criterion) {
    let none = None::<fn(&mut RgbaImage)>;

    bench_inner(c, "imageprocs: box blur", run(&BoxBlur::new(2)), none);
    bench_inner(
        c,
        "imageprocs: sobel",
        run(&Sobel::new(Component::Green, Component::Green)),
        none
    );
}

fn bench_fade(c: &mut Criterion) {
    let from = sample_buffer(KernelOptions::default());
    let to = PixelBuffer::from_dimensions(DIMENSIONS.0, DIMENSIONS.1).unwrap();

    bench_inner(
        c,
        "imageprocs: fade",
        run(&FadeTransition::new(&from, &to, 0.3)),
        None::<fn(&mut RgbaImage)>
    );
}

fn bench_reductions(c: &mut Criterion) {
    let mut group = c.benchmark_group("imageprocs: reductions");

    for (strategy, options) in strategies() {
        let buffer = sample_buffer(options);
        group.throughput(Throughput::Bytes(buffer.len() as u64));

        group.bench_function(format!("statistics {strategy}"), |b| {
            b.iter(|| black_box(BufferStatistics::from_buffer(&buffer)))
        });
        group.bench_function(format!("histogram {strategy}"), |b| {
            b.iter(|| black_box(histogram(&buffer)))
        });
    }
}

criterion_group!(name=benches;
      config={
      let c = Criterion::default();
        c.measurement_time(Duration::from_secs(10))
      };
    targets=bench_invert,bench_grayscale,bench_pointwise,bench_gaussian,bench_spatial,bench_fade,bench_reductions);

criterion_main!(benches);
