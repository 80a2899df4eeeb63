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
    byte_from_unit_ps, load_u8x16, narrow_epi32_u8x16, store_u8x16, unit_from_byte_ps,
    widen_u8x16_ps
};
use crate::transitions::fade_scalar;

#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn fade_sse41(from: &[u8], to: &[u8], t: f32, out: &mut [u8]) {
    const CHUNK_SIZE: usize = 16;

    let t_ps = _mm_set1_ps(t);
    let inverse_t = _mm_set1_ps(1.0 - t);

    for ((from_chunk, to_chunk), out_chunk) in from
        .chunks_exact(CHUNK_SIZE)
        .zip(to.chunks_exact(CHUNK_SIZE))
        .zip(out.chunks_exact_mut(CHUNK_SIZE))
    {
        let from_ps = widen_u8x16_ps(load_u8x16(from_chunk));
        let to_ps = widen_u8x16_ps(load_u8x16(to_chunk));

        let mut result = [_mm_setzero_si128(); 4];

        for ((from_ps, to_ps), result) in from_ps.iter().zip(&to_ps).zip(result.iter_mut()) {
            let from_part = _mm_mul_ps(unit_from_byte_ps(*from_ps), inverse_t);
            let to_part = _mm_mul_ps(unit_from_byte_ps(*to_ps), t_ps);

            *result = byte_from_unit_ps(_mm_add_ps(from_part, to_part));
        }
        store_u8x16(out_chunk, narrow_epi32_u8x16(result));
    }
    fade_scalar(
        from.chunks_exact(CHUNK_SIZE).remainder(),
        to.chunks_exact(CHUNK_SIZE).remainder(),
        t,
        out.chunks_exact_mut(CHUNK_SIZE).into_remainder()
    );
}
