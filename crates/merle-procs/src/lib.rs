/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image processing routines for `merle-image`
//!
//! This implements the kernels that run over a [`PixelBuffer`](merle_image::buffer::PixelBuffer),
//! pointwise color adjustments, convolutions, compositing and transitions,
//! and whole buffer statistics.
//!
//! Every kernel has a scalar and an SSE4.1 path producing identical bytes, the
//! buffer's [`KernelOptions`](merle_core::options::KernelOptions) pick one.
//!
//! Mutating kernels implement the `OperationsTrait` defined by merle-image.
//!
//! # Example
//! - Increase exposure of image by one stop
//! ```
//! use merle_core::color::PackedColor;
//! use merle_image::buffer::PixelBuffer;
//! use merle_image::traits::OperationsTrait;
//! use merle_procs::exposure::Exposure;
//! let mut buffer = PixelBuffer::from_color(100, 100, PackedColor::gray(100)).unwrap();
//! let exposure = Exposure::new(1.0);
//! // execute the filter
//! exposure.execute(&mut buffer).unwrap();
//! assert_eq!(buffer.get_pixel(0, 0), Some(PackedColor::gray(200)));
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::inline_always,
    clippy::similar_names,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::wildcard_imports
)]

pub mod box_blur;
pub mod brighten;
pub mod clear;
pub mod color_matrix;
pub mod composite;
pub mod contrast;
pub mod convolve;
pub mod duplicate_channel;
pub mod exposure;
pub mod gaussian_blur;
pub mod grayscale;
pub mod histogram;
pub mod hue;
pub mod invert;
pub mod levels;
pub mod linear;
pub mod mathops;
pub mod opacity;
mod pad;
pub mod premul_alpha;
pub mod saturation;
pub mod sobel;
pub mod statistics;
pub mod swizzle;
pub mod threshold;
pub mod transitions;
pub mod utils;
