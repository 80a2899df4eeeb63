/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! SSE4.1 versions of the byte/float helpers
//!
//! Each routine performs exactly the operations of its scalar twin so
//! results stay bit identical.
#![cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#![cfg(feature = "sse41")]

#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::mathops::{INV_255, INV_LUMA_FIXED_MAX, LUMA_BLUE, LUMA_GREEN, LUMA_RED};

/// Load 16 bytes
#[inline]
#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn load_u8x16(data: &[u8]) -> __m128i {
    assert!(data.len() >= 16);
    _mm_loadu_si128(data.as_ptr().cast())
}

/// Store 16 bytes
#[inline]
#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn store_u8x16(data: &mut [u8], value: __m128i) {
    assert!(data.len() >= 16);
    _mm_storeu_si128(data.as_mut_ptr().cast(), value);
}

/// Load 4 bytes, zero extended into i32 lanes
#[inline]
#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn load_u8x4_epi32(data: &[u8]) -> __m128i {
    let value = i32::from_le_bytes([data[0], data[1], data[2], data[3]]);
    _mm_cvtepu8_epi32(_mm_cvtsi32_si128(value))
}

/// Store the low byte of each i32 lane, the lanes must already be in `0..=255`
#[inline]
#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn store_epi32_u8x4(data: &mut [u8], value: __m128i) {
    let packed = _mm_packus_epi16(_mm_packus_epi32(value, value), _mm_setzero_si128());
    let bytes = _mm_cvtsi128_si32(packed).to_le_bytes();
    data[..4].copy_from_slice(&bytes);
}

/// Zero extend 16 bytes into two vectors of u16 lanes
#[inline]
#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn widen_u8x16_epi16(value: __m128i) -> [__m128i; 2] {
    [
        _mm_cvtepu8_epi16(value),
        _mm_unpackhi_epi8(value, _mm_setzero_si128())
    ]
}

/// Pack two vectors of u16 lanes in `0..=255` into 16 bytes
#[inline]
#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn narrow_epi16_u8x16(value: [__m128i; 2]) -> __m128i {
    _mm_packus_epi16(value[0], value[1])
}

/// Zero extend 16 bytes into four vectors of i32 lanes
#[inline]
#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn widen_u8x16_epi32(value: __m128i) -> [__m128i; 4] {
    [
        _mm_cvtepu8_epi32(value),
        _mm_cvtepu8_epi32(_mm_srli_si128::<4>(value)),
        _mm_cvtepu8_epi32(_mm_srli_si128::<8>(value)),
        _mm_cvtepu8_epi32(_mm_srli_si128::<12>(value))
    ]
}

/// Zero extend 16 bytes into four vectors of f32 lanes
#[inline]
#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn widen_u8x16_ps(value: __m128i) -> [__m128; 4] {
    let [a, b, c, d] = widen_u8x16_epi32(value);
    [
        _mm_cvtepi32_ps(a),
        _mm_cvtepi32_ps(b),
        _mm_cvtepi32_ps(c),
        _mm_cvtepi32_ps(d)
    ]
}

/// Vector [`unit_from_byte`](merle_core::utils::unit_from_byte) over f32 lanes holding bytes
#[inline]
#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn unit_from_byte_ps(value: __m128) -> __m128 {
    _mm_mul_ps(value, _mm_set1_ps(INV_255))
}

/// Vector [`byte_from_f32`](merle_core::utils::byte_from_f32), results in i32 lanes
#[inline]
#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn byte_from_ps(value: __m128) -> __m128i {
    // max returns the second operand for NaN, same as the scalar comparison
    let clamped = _mm_max_ps(value, _mm_setzero_ps());
    let clamped = _mm_min_ps(clamped, _mm_set1_ps(255.0));

    _mm_cvttps_epi32(_mm_add_ps(clamped, _mm_set1_ps(0.5)))
}

/// Vector [`byte_from_unit`](merle_core::utils::byte_from_unit), results in i32 lanes
#[inline]
#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn byte_from_unit_ps(value: __m128) -> __m128i {
    byte_from_ps(_mm_mul_ps(value, _mm_set1_ps(255.0)))
}

/// Pack four vectors of i32 lanes in `0..=255` into 16 bytes
#[inline]
#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn narrow_epi32_u8x16(value: [__m128i; 4]) -> __m128i {
    let lo = _mm_packus_epi32(value[0], value[1]);
    let hi = _mm_packus_epi32(value[2], value[3]);
    _mm_packus_epi16(lo, hi)
}

/// Fixed point luma of 4 pixels whose channels are in i32 lanes
#[inline]
#[target_feature(enable = "sse4.1")]
#[allow(clippy::cast_possible_wrap)]
pub(crate) unsafe fn luma_fixed_epi32(r: __m128i, g: __m128i, b: __m128i) -> __m128i {
    let r = _mm_mullo_epi32(r, _mm_set1_epi32(LUMA_RED as i32));
    let g = _mm_mullo_epi32(g, _mm_set1_epi32(LUMA_GREEN as i32));
    let b = _mm_mullo_epi32(b, _mm_set1_epi32(LUMA_BLUE as i32));

    _mm_add_epi32(_mm_add_epi32(r, g), b)
}

/// Vector [`luma_unit`](merle_core::utils::luma_unit)
#[inline]
#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn luma_unit_ps(r: __m128i, g: __m128i, b: __m128i) -> __m128 {
    let luma = _mm_cvtepi32_ps(luma_fixed_epi32(r, g, b));
    _mm_mul_ps(luma, _mm_set1_ps(INV_LUMA_FIXED_MAX))
}

#[cfg(test)]
mod tests {
    #[cfg(target_arch = "x86")]
    use std::arch::x86::*;
    #[cfg(target_arch = "x86_64")]
    use std::arch::x86_64::*;

    use crate::mathops::sse41::{byte_from_ps, store_epi32_u8x4};
    use crate::mathops::byte_from_f32;

    #[test]
    fn byte_from_ps_matches_scalar() {
        if !is_x86_feature_detected!("sse4.1") {
            return;
        }
        let values = [
            -1.0,
            f32::NAN,
            0.49,
            0.5,
            127.5,
            254.6,
            255.0,
            300.0,
            f32::INFINITY,
            f32::NEG_INFINITY,
            -0.0,
            77.777
        ];
        for chunk in values.chunks_exact(4) {
            let mut out = [0_u8; 4];
            unsafe {
                let v = _mm_loadu_ps(chunk.as_ptr());
                store_epi32_u8x4(&mut out, byte_from_ps(v));
            }
            for (a, b) in chunk.iter().zip(out) {
                assert_eq!(byte_from_f32(*a), b, "{a}");
            }
        }
    }
}
