/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */


#![cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#![cfg(feature = "sse41")]

#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::mathops::sse41::{byte_from_ps, load_u8x4_epi32, store_epi32_u8x4};
use crate::sobel::sobel_pixel;

/// `a + 2*b + c`
#[inline]
#[target_feature(enable = "sse4.1")]
unsafe fn weighted_sum(a: __m128i, b: __m128i, c: __m128i) -> __m128i {
    _mm_add_epi32(_mm_add_epi32(a, _mm_slli_epi32::<1>(b)), c)
}

#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn sobel_padded_sse41(
    padded: &[u8], (width, height): (usize, usize), out: &mut [u8]
) {
    const CHUNK_SIZE: usize = 4;

    let padded_width = width + 2;
    let vector_end = width - width % CHUNK_SIZE;

    for (y, out_row) in out.chunks_exact_mut(width).take(height).enumerate() {
        for (chunk_index, out_chunk) in out_row.chunks_exact_mut(CHUNK_SIZE).enumerate() {
            let x = chunk_index * CHUNK_SIZE;

            let mut c = [_mm_setzero_si128(); 9];

            for (window_y, row) in c.chunks_exact_mut(3).enumerate() {
                let start = (y + window_y) * padded_width + x;

                for (window_x, value) in row.iter_mut().enumerate() {
                    *value = load_u8x4_epi32(&padded[start + window_x..]);
                }
            }
            let gx = _mm_sub_epi32(
                weighted_sum(c[2], c[5], c[8]),
                weighted_sum(c[0], c[3], c[6])
            );
            let gy = _mm_sub_epi32(
                weighted_sum(c[6], c[7], c[8]),
                weighted_sum(c[0], c[1], c[2])
            );
            let magnitude = _mm_add_epi32(_mm_mullo_epi32(gx, gx), _mm_mullo_epi32(gy, gy));
            let magnitude = _mm_sqrt_ps(_mm_cvtepi32_ps(magnitude));

            store_epi32_u8x4(out_chunk, byte_from_ps(magnitude));
        }
        for (x, out_pixel) in out_row.iter_mut().enumerate().skip(vector_end) {
            *out_pixel = sobel_pixel(padded, padded_width, x, y);
        }
    }
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;

    use crate::pad::{allocate_padded, replicate_into};
    use crate::sobel::sobel_padded_scalar;
    use crate::sobel::sse41::sobel_padded_sse41;

    #[test]
    fn sobel_sse_scalar() {
        if !is_x86_feature_detected!("sse4.1") {
            return;
        }
        let mut rand = nanorand::WyRand::new_seed(37);

        for (width, height) in [(1, 1), (4, 4), (13, 7), (33, 2)] {
            let mut pixels = vec![0_u8; width * height];
            rand.fill(&mut pixels);

            let mut padded = allocate_padded(width, height, 1).unwrap();
            replicate_into(&pixels, width, height, 1, &mut padded);

            let mut scalar_out = vec![0_u8; width * height];
            let mut sse_out = vec![0_u8; width * height];

            sobel_padded_scalar(&padded, (width, height), &mut scalar_out);
            unsafe { sobel_padded_sse41(&padded, (width, height), &mut sse_out) };

            assert_eq!(scalar_out, sse_out, "{width}x{height}");
        }
    }
}
