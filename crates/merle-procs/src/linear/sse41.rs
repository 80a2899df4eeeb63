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

use crate::linear::{linear_map_scalar, LinearMap};
use crate::mathops::sse41::{byte_from_ps, load_u8x16, narrow_epi32_u8x16, store_u8x16, widen_u8x16_ps};

#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn linear_map_sse41(plane: &mut [u8], map: LinearMap) {
    const CHUNK_SIZE: usize = 16;

    let pivot = _mm_set1_ps(map.pivot);
    let scale = _mm_set1_ps(map.scale);
    let offset = _mm_set1_ps(map.offset);

    for chunk in plane.chunks_exact_mut(CHUNK_SIZE) {
        let values = widen_u8x16_ps(load_u8x16(chunk));

        let mut out = [_mm_setzero_si128(); 4];

        for (value, result) in values.iter().zip(out.iter_mut()) {
            let mapped = _mm_add_ps(_mm_mul_ps(_mm_sub_ps(*value, pivot), scale), offset);
            *result = byte_from_ps(mapped);
        }
        store_u8x16(chunk, narrow_epi32_u8x16(out));
    }
    linear_map_scalar(plane.chunks_exact_mut(CHUNK_SIZE).into_remainder(), map);
}
