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

use crate::invert::invert_scalar;
use crate::mathops::sse41::{load_u8x16, store_u8x16};

#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn invert_sse41(plane: &mut [u8]) {
    const CHUNK_SIZE: usize = 16;

    // 255 - c == c ^ 255 for bytes
    let all_ones = _mm_set1_epi8(-1);

    for chunk in plane.chunks_exact_mut(CHUNK_SIZE) {
        let value = load_u8x16(chunk);
        store_u8x16(chunk, _mm_xor_si128(value, all_ones));
    }
    invert_scalar(plane.chunks_exact_mut(CHUNK_SIZE).into_remainder());
}

#[cfg(test)]
mod tests {
    use crate::invert::invert_scalar;
    use crate::invert::sse41::invert_sse41;

    #[test]
    fn invert_sse_scalar() {
        if !is_x86_feature_detected!("sse4.1") {
            return;
        }
        let mut in_array: Vec<u8> = (0..=255).chain(0..=30).collect();
        let mut in_copy = in_array.clone();

        invert_scalar(&mut in_array);
        unsafe { invert_sse41(&mut in_copy) };

        assert_eq!(in_array, in_copy);
    }
}
