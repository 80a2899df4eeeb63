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

use crate::mathops::sse41::{load_u8x16, widen_u8x16_epi16};
use crate::mathops::{LUMA_BLUE, LUMA_GREEN, LUMA_RED};
use crate::statistics::{is_opaque_scalar, luma_sum_scalar, plane_sum_scalar};

const CHUNK_SIZE: usize = 16;

#[inline]
#[target_feature(enable = "sse4.1")]
unsafe fn horizontal_sum_epi64(value: __m128i) -> u64 {
    let mut lanes = [0_u64; 2];
    _mm_storeu_si128(lanes.as_mut_ptr().cast(), value);

    lanes[0].wrapping_add(lanes[1])
}

#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn plane_sum_sse41(plane: &[u8]) -> u64 {
    let zero = _mm_setzero_si128();
    let mut sum = _mm_setzero_si128();

    for chunk in plane.chunks_exact(CHUNK_SIZE) {
        // two partial sums of eight bytes, one per 64 bit lane
        sum = _mm_add_epi64(sum, _mm_sad_epu8(load_u8x16(chunk), zero));
    }
    horizontal_sum_epi64(sum) + plane_sum_scalar(plane.chunks_exact(CHUNK_SIZE).remainder())
}

/// Fixed point luma of 8 pixels in u16 lanes, at most 65280 so no lane wraps
#[inline]
#[target_feature(enable = "sse4.1")]
#[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
unsafe fn luma_fixed_epi16(r: __m128i, g: __m128i, b: __m128i) -> __m128i {
    let r = _mm_mullo_epi16(r, _mm_set1_epi16(LUMA_RED as i16));
    let g = _mm_mullo_epi16(g, _mm_set1_epi16(LUMA_GREEN as i16));
    let b = _mm_mullo_epi16(b, _mm_set1_epi16(LUMA_BLUE as i16));

    _mm_add_epi16(_mm_add_epi16(r, g), b)
}

#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn luma_sum_sse41(r: &[u8], g: &[u8], b: &[u8]) -> u64 {
    let mut sum = _mm_setzero_si128();

    for ((r_chunk, g_chunk), b_chunk) in r
        .chunks_exact(CHUNK_SIZE)
        .zip(g.chunks_exact(CHUNK_SIZE))
        .zip(b.chunks_exact(CHUNK_SIZE))
    {
        let [r_lo, r_hi] = widen_u8x16_epi16(load_u8x16(r_chunk));
        let [g_lo, g_hi] = widen_u8x16_epi16(load_u8x16(g_chunk));
        let [b_lo, b_hi] = widen_u8x16_epi16(load_u8x16(b_chunk));

        let luma_lo = luma_fixed_epi16(r_lo, g_lo, b_lo);
        let luma_hi = luma_fixed_epi16(r_hi, g_hi, b_hi);

        let zero = _mm_setzero_si128();
        // four u32 lanes each holding four lumas, at most 261120
        let partial = _mm_add_epi32(
            _mm_add_epi32(_mm_cvtepu16_epi32(luma_lo), _mm_unpackhi_epi16(luma_lo, zero)),
            _mm_add_epi32(_mm_cvtepu16_epi32(luma_hi), _mm_unpackhi_epi16(luma_hi, zero))
        );
        sum = _mm_add_epi64(sum, _mm_cvtepu32_epi64(partial));
        sum = _mm_add_epi64(sum, _mm_cvtepu32_epi64(_mm_srli_si128::<8>(partial)));
    }
    horizontal_sum_epi64(sum)
        + luma_sum_scalar(
            r.chunks_exact(CHUNK_SIZE).remainder(),
            g.chunks_exact(CHUNK_SIZE).remainder(),
            b.chunks_exact(CHUNK_SIZE).remainder()
        )
}

#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn is_opaque_sse41(alpha: &[u8]) -> bool {
    let opaque = _mm_set1_epi8(-1);

    for chunk in alpha.chunks_exact(CHUNK_SIZE) {
        let equal = _mm_cmpeq_epi8(load_u8x16(chunk), opaque);

        if _mm_movemask_epi8(equal) != 0xFFFF {
            return false;
        }
    }
    is_opaque_scalar(alpha.chunks_exact(CHUNK_SIZE).remainder())
}
