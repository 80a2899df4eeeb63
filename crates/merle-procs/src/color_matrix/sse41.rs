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

use crate::color_matrix::{color_matrix_scalar, Matrix};
use crate::mathops::sse41::{
    byte_from_unit_ps, load_u8x16, narrow_epi32_u8x16, store_u8x16, unit_from_byte_ps,
    widen_u8x16_ps
};

#[inline]
#[target_feature(enable = "sse4.1")]
unsafe fn apply_row_ps(row: &[__m128; 4], r: __m128, g: __m128, b: __m128, a: __m128) -> __m128i {
    let sum = _mm_add_ps(_mm_mul_ps(row[0], r), _mm_mul_ps(row[1], g));
    let sum = _mm_add_ps(sum, _mm_mul_ps(row[2], b));
    let sum = _mm_add_ps(sum, _mm_mul_ps(row[3], a));

    byte_from_unit_ps(sum)
}

#[target_feature(enable = "sse4.1")]
unsafe fn load_unit_ps(chunk: &[u8]) -> [__m128; 4] {
    let mut values = widen_u8x16_ps(load_u8x16(chunk));
    for value in &mut values {
        *value = unit_from_byte_ps(*value);
    }
    values
}

#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn color_matrix_sse41([r, g, b, a]: [&mut [u8]; 4], matrix: &Matrix) {
    const CHUNK_SIZE: usize = 16;

    let mut rows = [[_mm_setzero_ps(); 4]; 4];

    for (row, values) in rows.iter_mut().zip(matrix) {
        for (lane, value) in row.iter_mut().zip(values) {
            *lane = _mm_set1_ps(*value);
        }
    }

    for (((r_chunk, g_chunk), b_chunk), a_chunk) in r
        .chunks_exact_mut(CHUNK_SIZE)
        .zip(g.chunks_exact_mut(CHUNK_SIZE))
        .zip(b.chunks_exact_mut(CHUNK_SIZE))
        .zip(a.chunks_exact_mut(CHUNK_SIZE))
    {
        let r_in = load_unit_ps(r_chunk);
        let g_in = load_unit_ps(g_chunk);
        let b_in = load_unit_ps(b_chunk);
        let a_in = load_unit_ps(a_chunk);

        let mut out = [[_mm_setzero_si128(); 4]; 4];

        for (channel, row) in out.iter_mut().zip(&rows) {
            for (quarter, result) in channel.iter_mut().enumerate() {
                *result = apply_row_ps(
                    row,
                    r_in[quarter],
                    g_in[quarter],
                    b_in[quarter],
                    a_in[quarter]
                );
            }
        }
        store_u8x16(r_chunk, narrow_epi32_u8x16(out[0]));
        store_u8x16(g_chunk, narrow_epi32_u8x16(out[1]));
        store_u8x16(b_chunk, narrow_epi32_u8x16(out[2]));
        store_u8x16(a_chunk, narrow_epi32_u8x16(out[3]));
    }
    color_matrix_scalar(
        [
            r.chunks_exact_mut(CHUNK_SIZE).into_remainder(),
            g.chunks_exact_mut(CHUNK_SIZE).into_remainder(),
            b.chunks_exact_mut(CHUNK_SIZE).into_remainder(),
            a.chunks_exact_mut(CHUNK_SIZE).into_remainder()
        ],
        matrix
    );
}
