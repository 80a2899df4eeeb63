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
    load_u8x16, luma_unit_ps, narrow_epi32_u8x16, store_u8x16, widen_u8x16_epi32
};
use crate::threshold::threshold_scalar;

#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn threshold_sse41((r, g, b): (&mut [u8], &mut [u8], &mut [u8]), threshold: f32) {
    const CHUNK_SIZE: usize = 16;

    let limit = _mm_set1_ps(threshold);
    let white = _mm_set1_epi32(255);

    for ((r_chunk, g_chunk), b_chunk) in r
        .chunks_exact_mut(CHUNK_SIZE)
        .zip(g.chunks_exact_mut(CHUNK_SIZE))
        .zip(b.chunks_exact_mut(CHUNK_SIZE))
    {
        let r_in = widen_u8x16_epi32(load_u8x16(r_chunk));
        let g_in = widen_u8x16_epi32(load_u8x16(g_chunk));
        let b_in = widen_u8x16_epi32(load_u8x16(b_chunk));

        let mut out = [_mm_setzero_si128(); 4];

        for (i, result) in out.iter_mut().enumerate() {
            let luma = luma_unit_ps(r_in[i], g_in[i], b_in[i]);
            // all ones where luma >= threshold, false for NaN like the scalar compare
            let mask = _mm_castps_si128(_mm_cmpge_ps(luma, limit));

            *result = _mm_and_si128(mask, white);
        }
        let value = narrow_epi32_u8x16(out);

        store_u8x16(r_chunk, value);
        store_u8x16(g_chunk, value);
        store_u8x16(b_chunk, value);
    }
    threshold_scalar(
        (
            r.chunks_exact_mut(CHUNK_SIZE).into_remainder(),
            g.chunks_exact_mut(CHUNK_SIZE).into_remainder(),
            b.chunks_exact_mut(CHUNK_SIZE).into_remainder()
        ),
        threshold
    );
}
