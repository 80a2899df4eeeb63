/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */


#![cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#![cfg(feature = "sse41")]
//! Four output pixels per step, each window tap broadcast into a vector
//! and accumulated in the same order as the scalar code.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::convolve::convolve_pixel;
use crate::mathops::sse41::{byte_from_ps, load_u8x4_epi32, store_epi32_u8x4};

#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn convolve_padded_sse41(
    padded: &[u8], (width, height): (usize, usize), weights: &[f32], side: usize, out: &mut [u8]
) {
    const CHUNK_SIZE: usize = 4;

    let padded_width = width + side - 1;

    for (y, out_row) in out.chunks_exact_mut(width).take(height).enumerate() {
        let vector_end = width - width % CHUNK_SIZE;

        for (chunk_index, out_chunk) in out_row.chunks_exact_mut(CHUNK_SIZE).enumerate() {
            let x = chunk_index * CHUNK_SIZE;
            let mut sum = _mm_setzero_ps();

            for (window_y, weight_row) in weights.chunks_exact(side).enumerate() {
                let start = (y + window_y) * padded_width + x;

                for (window_x, weight) in weight_row.iter().enumerate() {
                    let pixels = _mm_cvtepi32_ps(load_u8x4_epi32(&padded[start + window_x..]));
                    sum = _mm_add_ps(sum, _mm_mul_ps(pixels, _mm_set1_ps(*weight)));
                }
            }
            store_epi32_u8x4(out_chunk, byte_from_ps(sum));
        }
        for (x, out_pixel) in out_row.iter_mut().enumerate().skip(vector_end) {
            *out_pixel = convolve_pixel(padded, padded_width, x, y, weights, side);
        }
    }
}
