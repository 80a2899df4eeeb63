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

use crate::mathops::sse41::{load_u8x16, narrow_epi16_u8x16, store_u8x16, widen_u8x16_epi16};
use crate::premul_alpha::premultiply_u8_scalar;

#[inline]
#[target_feature(enable = "sse4.1")]
unsafe fn multiply_div_255_epi16(color: __m128i, alpha: __m128i) -> __m128i {
    // a*c + 128 is at most 65153, everything stays in u16
    let temp = _mm_add_epi16(_mm_mullo_epi16(color, alpha), _mm_set1_epi16(128));
    _mm_srli_epi16::<8>(_mm_add_epi16(temp, _mm_srli_epi16::<8>(temp)))
}

#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn premultiply_u8_sse41(input: &mut [u8], alpha: &[u8]) {
    const CHUNK_SIZE: usize = 16;

    for (color_chunk, alpha_chunk) in input
        .chunks_exact_mut(CHUNK_SIZE)
        .zip(alpha.chunks_exact(CHUNK_SIZE))
    {
        let [c_lo, c_hi] = widen_u8x16_epi16(load_u8x16(color_chunk));
        let [a_lo, a_hi] = widen_u8x16_epi16(load_u8x16(alpha_chunk));

        let result = narrow_epi16_u8x16([
            multiply_div_255_epi16(c_lo, a_lo),
            multiply_div_255_epi16(c_hi, a_hi)
        ]);
        store_u8x16(color_chunk, result);
    }
    premultiply_u8_scalar(
        input.chunks_exact_mut(CHUNK_SIZE).into_remainder(),
        alpha.chunks_exact(CHUNK_SIZE).remainder()
    );
}
