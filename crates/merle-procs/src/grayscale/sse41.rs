/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */


#![cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#![cfg(feature = "sse41")]
//! SSE4.1 grayscale
//!
//! Division by three is done as a multiply high by `ceil(2^17/3)` followed by
//! a shift, exact for every sum of three bytes.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::grayscale::scalar::grayscale_scalar;
use crate::mathops::sse41::{load_u8x16, narrow_epi16_u8x16, store_u8x16, widen_u8x16_epi16};

const RECIPROCAL_OF_THREE: i16 = 43691_u16 as i16;

#[inline]
#[target_feature(enable = "sse4.1")]
unsafe fn divide_by_three(sum: __m128i) -> __m128i {
    _mm_srli_epi16::<1>(_mm_mulhi_epu16(sum, _mm_set1_epi16(RECIPROCAL_OF_THREE)))
}

#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn grayscale_sse41((r, g, b): (&mut [u8], &mut [u8], &mut [u8])) {
    const CHUNK_SIZE: usize = 16;

    for ((r_chunk, g_chunk), b_chunk) in r
        .chunks_exact_mut(CHUNK_SIZE)
        .zip(g.chunks_exact_mut(CHUNK_SIZE))
        .zip(b.chunks_exact_mut(CHUNK_SIZE))
    {
        let [r_lo, r_hi] = widen_u8x16_epi16(load_u8x16(r_chunk));
        let [g_lo, g_hi] = widen_u8x16_epi16(load_u8x16(g_chunk));
        let [b_lo, b_hi] = widen_u8x16_epi16(load_u8x16(b_chunk));

        let lo = divide_by_three(_mm_add_epi16(_mm_add_epi16(r_lo, g_lo), b_lo));
        let hi = divide_by_three(_mm_add_epi16(_mm_add_epi16(r_hi, g_hi), b_hi));

        let gray = narrow_epi16_u8x16([lo, hi]);

        store_u8x16(r_chunk, gray);
        store_u8x16(g_chunk, gray);
        store_u8x16(b_chunk, gray);
    }
    grayscale_scalar((
        r.chunks_exact_mut(CHUNK_SIZE).into_remainder(),
        g.chunks_exact_mut(CHUNK_SIZE).into_remainder(),
        b.chunks_exact_mut(CHUNK_SIZE).into_remainder()
    ));
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;

    use crate::grayscale::scalar::grayscale_scalar;
    use crate::grayscale::sse41::grayscale_sse41;

    #[test]
    fn grayscale_sse_scalar() {
        if !is_x86_feature_detected!("sse4.1") {
            return;
        }
        let mut rand = nanorand::WyRand::new_seed(11);

        let mut planes = vec![vec![0_u8; 211]; 3];
        planes.iter_mut().for_each(|x| rand.fill(x));
        // the largest sum must survive too
        planes.iter_mut().for_each(|x| x[0] = 255);

        let mut copy = planes.clone();

        let (r, rest) = planes.split_at_mut(1);
        let (g, b) = rest.split_at_mut(1);
        grayscale_scalar((&mut r[0][..], &mut g[0][..], &mut b[0][..]));

        let (r, rest) = copy.split_at_mut(1);
        let (g, b) = rest.split_at_mut(1);
        unsafe { grayscale_sse41((&mut r[0][..], &mut g[0][..], &mut b[0][..])) };

        assert_eq!(planes, copy);
    }
}
