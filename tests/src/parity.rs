/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Scalar and vectorized runs of every kernel must agree byte for byte

use merle_core::component::Component;
use merle_core::geometry::{Degrees, Point};
use merle_core::options::KernelOptions;
use merle_image::buffer::PixelBuffer;
use merle_image::codec::decode_interleaved_with_options;
use merle_image::traits::OperationsTrait;
use merle_procs::box_blur::BoxBlur;
use merle_procs::brighten::Brightness;
use merle_procs::color_matrix::{ColorMatrix, Sepia};
use merle_procs::composite::Composite;
use merle_procs::contrast::Contrast;
use merle_procs::convolve::Convolve;
use merle_procs::exposure::Exposure;
use merle_procs::gaussian_blur::GaussianBlur;
use merle_procs::grayscale::Grayscale;
use merle_procs::histogram::histogram;
use merle_procs::hue::Hue;
use merle_procs::invert::Invert;
use merle_procs::levels::RgbaLevels;
use merle_procs::opacity::Opacity;
use merle_procs::premul_alpha::PremultiplyAlpha;
use merle_procs::saturation::{Saturation, Vibrance};
use merle_procs::sobel::Sobel;
use merle_procs::statistics::BufferStatistics;
use merle_procs::threshold::LuminanceThreshold;
use merle_procs::transitions::{FadeTransition, SwipeDirection, SwipeTransition};
use merle_procs::utils::Gravity;
use nanorand::Rng;

use crate::hash;

const SIZES: [(usize, usize); 4] = [(1, 1), (15, 3), (33, 17), (67, 5)];

fn random_bytes(width: usize, height: usize, seed: u64) -> Vec<u8> {
    let mut bytes = vec![0_u8; width * height * 4];
    nanorand::WyRand::new_seed(seed).fill(&mut bytes);
    bytes
}

fn buffer_pair(width: usize, height: usize, seed: u64) -> (PixelBuffer, PixelBuffer) {
    let bytes = random_bytes(width, height, seed);

    let scalar =
        decode_interleaved_with_options(&bytes, width, height, KernelOptions::new_scalar()).unwrap();
    let fast =
        decode_interleaved_with_options(&bytes, width, height, KernelOptions::new_fast()).unwrap();

    (scalar, fast)
}

fn assert_parity(name: &str, operation: &dyn OperationsTrait) {
    for (width, height) in SIZES {
        assert_parity_sized(width, height, name, operation);
    }
}

#[test]
fn pointwise_parity() {
    assert_parity("invert", &Invert::new());
    assert_parity("grayscale", &Grayscale::new());
    assert_parity("premultiply", &PremultiplyAlpha::new());
    assert_parity("exposure", &Exposure::new(0.7));
    assert_parity("brightness", &Brightness::new(1.3));
    assert_parity("contrast", &Contrast::new(1.8));
    assert_parity("opacity", &Opacity::new(0.35));
    assert_parity("levels", &RgbaLevels::new(0.2, 1.5, 0.9, 0.5));
    assert_parity("saturation", &Saturation::new(0.6));
    assert_parity("desaturation", &Saturation::new(-0.4));
    assert_parity("vibrance", &Vibrance::new(0.3));
    assert_parity("threshold", &LuminanceThreshold::new(0.45));
    assert_parity("sepia", &Sepia::new());
    assert_parity("hue", &Hue::new(Degrees(123.0)));
    assert_parity(
        "matrix",
        &ColorMatrix::new([
            [0.5, 0.2, 0.1, 0.0],
            [-0.3, 1.2, 0.0, 0.1],
            [0.0, 0.0, 1.1, -0.2],
            [0.1, 0.1, 0.1, 0.7]
        ])
    );
}

#[test]
fn spatial_parity() {
    assert_parity("box blur", &BoxBlur::new(2));
    assert_parity("gaussian blur", &GaussianBlur::new(3, 1.4));
    assert_parity(
        "sharpen",
        &Convolve::new(vec![0.0, -1.0, 0.0, -1.0, 5.0, -1.0, 0.0, -1.0, 0.0], 3)
    );
    assert_parity("sobel", &Sobel::new(Component::Green, Component::Alpha));
}

#[test]
fn sourced_parity() {
    for (width, height) in SIZES {
        let from = PixelBuffer::from_dimensions(width, height).unwrap();
        let (to, _) = buffer_pair(width, height, 99);

        assert_parity_sized(width, height, "fade", &FadeTransition::new(&from, &to, 0.37));
        assert_parity_sized(
            width,
            height,
            "swipe",
            &SwipeTransition::new(&from, &to, 0.61, SwipeDirection::Vertical)
        );
        assert_parity_sized(width, height, "sourced blur", &BoxBlur::with_source(&to, 1));
        assert_parity_sized(
            width,
            height,
            "sourced sobel",
            &Sobel::with_source(&to, Component::Red, Component::Blue)
        );
        assert_parity_sized(width, height, "composite", &Composite::new(&to, Point::new(-2, 1)));
        assert_parity_sized(
            width,
            height,
            "composite gravity",
            &Composite::with_gravity(&to, Gravity::BottomRight)
        );
    }
}

fn assert_parity_sized(width: usize, height: usize, name: &str, operation: &dyn OperationsTrait) {
    let (mut scalar, mut fast) = buffer_pair(width, height, 7);

    operation.execute(&mut scalar).unwrap();
    operation.execute(&mut fast).unwrap();

    assert_eq!(
        hash(scalar.as_bytes()),
        hash(fast.as_bytes()),
        "{name} differs between strategies on a {width}x{height} buffer"
    );
}

#[test]
fn reduction_parity() {
    for (seed, (width, height)) in SIZES.into_iter().enumerate() {
        let (scalar, fast) = buffer_pair(width, height, seed as u64 + 20);

        assert_eq!(
            BufferStatistics::from_buffer(&scalar),
            BufferStatistics::from_buffer(&fast)
        );
        assert_eq!(histogram(&scalar), histogram(&fast));
    }
}
