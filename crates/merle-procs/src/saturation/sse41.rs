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

use crate::mathops::sse41::{
    byte_from_unit_ps, load_u8x16, luma_unit_ps, narrow_epi32_u8x16, store_u8x16,
    unit_from_byte_ps, widen_u8x16_epi32
};
use crate::saturation::saturate_scalar;

#[inline]
#[target_feature(enable = "sse4.1")]
unsafe fn saturate_channel_ps(value: __m128i, luma: __m128, factor: __m128) -> __m128i {
    let unit = unit_from_byte_ps(_mm_cvtepi32_ps(value));
    let moved = _mm_mul_ps(_mm_sub_ps(unit, luma), factor);

    byte_from_unit_ps(_mm_add_ps(luma, moved))
}

#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn saturate_sse41((r, g, b): (&mut [u8], &mut [u8], &mut [u8]), saturation: f32) {
    const CHUNK_SIZE: usize = 16;

    let factor = _mm_set1_ps(1.0 + saturation);

    for ((r_chunk, g_chunk), b_chunk) in r
        .chunks_exact_mut(CHUNK_SIZE)
        .zip(g.chunks_exact_mut(CHUNK_SIZE))
        .zip(b.chunks_exact_mut(CHUNK_SIZE))
    {
        let r_in = widen_u8x16_epi32(load_u8x16(r_chunk));
        let g_in = widen_u8x16_epi32(load_u8x16(g_chunk));
        let b_in = widen_u8x16_epi32(load_u8x16(b_chunk));

        let mut r_out = [_mm_setzero_si128(); 4];
        let mut g_out = [_mm_setzero_si128(); 4];
        let mut b_out = [_mm_setzero_si128(); 4];

        for i in 0..4 {
            let luma = luma_unit_ps(r_in[i], g_in[i], b_in[i]);

            r_out[i] = saturate_channel_ps(r_in[i], luma, factor);
            g_out[i] = saturate_channel_ps(g_in[i], luma, factor);
            b_out[i] = saturate_channel_ps(b_in[i], luma, factor);
        }
        store_u8x16(r_chunk, narrow_epi32_u8x16(r_out));
        store_u8x16(g_chunk, narrow_epi32_u8x16(g_out));
        store_u8x16(b_chunk, narrow_epi32_u8x16(b_out));
    }
    saturate_scalar(
        (
            r.chunks_exact_mut(CHUNK_SIZE).into_remainder(),
            g.chunks_exact_mut(CHUNK_SIZE).into_remainder(),
            b.chunks_exact_mut(CHUNK_SIZE).into_remainder()
        ),
        saturation
    );
}
