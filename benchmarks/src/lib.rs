/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use merle_core::options::KernelOptions;
use merle_image::buffer::PixelBuffer;
use merle_image::codec::decode_interleaved_with_options;
use nanorand::Rng;

/// Width and height of every benchmark image, a full hd frame
pub const DIMENSIONS: (usize, usize) = (1920, 1080);

/// Deterministic interleaved rgba noise
pub fn sample_pixels() -> Vec<u8> {
    let (width, height) = DIMENSIONS;
    let mut pixels = vec![0_u8; width * height * 4];
    nanorand::WyRand::new_seed(0x6d65_726c_65).fill(&mut pixels);
    pixels
}

/// The sample pixels as a buffer running with `options`
pub fn sample_buffer(options: KernelOptions) -> PixelBuffer {
    let (width, height) = DIMENSIONS;

    match decode_interleaved_with_options(&sample_pixels(), width, height, options) {
        Ok(buffer) => buffer,
        Err(e) => panic!("Could not create sample buffer: {e:?}")
    }
}
