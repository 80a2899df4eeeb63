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

use crate::codec::scalar::{deinterleave_four_channels_scalar, interleave_four_channels_scalar};

#[allow(clippy::zero_prefixed_literal)]
#[target_feature(enable = "sse4.1")]
#[rustfmt::skip]
pub(crate) unsafe fn deinterleave_four_channels_sse41(
    source: &[u8], c1: &mut [u8], c2: &mut [u8], c3: &mut [u8], c4: &mut [u8]
) {
    const CHUNK_SIZE: usize = 64;
    const OUT_CHUNK_SIZE: usize = CHUNK_SIZE / 4;

    let shuffle_mask = _mm_set_epi8(15, 11, 7, 3,
                                    14, 10, 6, 2,
                                    13, 09, 5, 1,
                                    12, 08, 4, 0);

    for ((((source_chunk, rr), gg), bb), aa) in source
        .chunks_exact(CHUNK_SIZE)
        .zip(c1.chunks_exact_mut(OUT_CHUNK_SIZE))
        .zip(c2.chunks_exact_mut(OUT_CHUNK_SIZE))
        .zip(c3.chunks_exact_mut(OUT_CHUNK_SIZE))
        .zip(c4.chunks_exact_mut(OUT_CHUNK_SIZE))
    {
        // four pixels per register
        let t1 = _mm_loadu_si128(source_chunk[00..].as_ptr().cast());
        let t2 = _mm_loadu_si128(source_chunk[16..].as_ptr().cast());
        let t3 = _mm_loadu_si128(source_chunk[32..].as_ptr().cast());
        let t4 = _mm_loadu_si128(source_chunk[48..].as_ptr().cast());

        // rrrr,gggg,bbbb,aaaa within each register
        let x1 = _mm_shuffle_epi8(t1, shuffle_mask);
        let x2 = _mm_shuffle_epi8(t2, shuffle_mask);
        let x3 = _mm_shuffle_epi8(t3, shuffle_mask);
        let x4 = _mm_shuffle_epi8(t4, shuffle_mask);

        // rrrr(1) rrrr(2) gggg(1) gggg(2)
        let p1 = _mm_unpacklo_epi32(x1, x2);
        let p2 = _mm_unpacklo_epi32(x3, x4);
        // bbbb(1) bbbb(2) aaaa(1) aaaa(2)
        let p3 = _mm_unpackhi_epi32(x1, x2);
        let p4 = _mm_unpackhi_epi32(x3, x4);

        let rrrr = _mm_unpacklo_epi64(p1, p2);
        let gggg = _mm_unpackhi_epi64(p1, p2);
        let bbbb = _mm_unpacklo_epi64(p3, p4);
        let aaaa = _mm_unpackhi_epi64(p3, p4);

        _mm_storeu_si128(rr.as_mut_ptr().cast(), rrrr);
        _mm_storeu_si128(gg.as_mut_ptr().cast(), gggg);
        _mm_storeu_si128(bb.as_mut_ptr().cast(), bbbb);
        _mm_storeu_si128(aa.as_mut_ptr().cast(), aaaa);
    }
    if source.len() % CHUNK_SIZE != 0 {
        // do the remainder
        let rem = source.len() % CHUNK_SIZE;
        let start = source.len() - rem;
        let c_start = c1.len() - (rem / 4);

        deinterleave_four_channels_scalar(
            &source[start..],
            &mut c1[c_start..],
            &mut c2[c_start..],
            &mut c3[c_start..],
            &mut c4[c_start..]
        );
    }
}

#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn interleave_four_channels_sse41(
    c1: &[u8], c2: &[u8], c3: &[u8], c4: &[u8], dest: &mut [u8]
) {
    const CHUNK_SIZE: usize = 16;
    const OUT_CHUNK_SIZE: usize = CHUNK_SIZE * 4;

    for ((((rr, gg), bb), aa), out) in c1
        .chunks_exact(CHUNK_SIZE)
        .zip(c2.chunks_exact(CHUNK_SIZE))
        .zip(c3.chunks_exact(CHUNK_SIZE))
        .zip(c4.chunks_exact(CHUNK_SIZE))
        .zip(dest.chunks_exact_mut(OUT_CHUNK_SIZE))
    {
        let r = _mm_loadu_si128(rr.as_ptr().cast());
        let g = _mm_loadu_si128(gg.as_ptr().cast());
        let b = _mm_loadu_si128(bb.as_ptr().cast());
        let a = _mm_loadu_si128(aa.as_ptr().cast());

        // rg rg rg..., ba ba ba...
        let rg_lo = _mm_unpacklo_epi8(r, g);
        let rg_hi = _mm_unpackhi_epi8(r, g);
        let ba_lo = _mm_unpacklo_epi8(b, a);
        let ba_hi = _mm_unpackhi_epi8(b, a);

        let rgba0 = _mm_unpacklo_epi16(rg_lo, ba_lo);
        let rgba1 = _mm_unpackhi_epi16(rg_lo, ba_lo);
        let rgba2 = _mm_unpacklo_epi16(rg_hi, ba_hi);
        let rgba3 = _mm_unpackhi_epi16(rg_hi, ba_hi);

        _mm_storeu_si128(out.as_mut_ptr().cast(), rgba0);
        _mm_storeu_si128(out[16..].as_mut_ptr().cast(), rgba1);
        _mm_storeu_si128(out[32..].as_mut_ptr().cast(), rgba2);
        _mm_storeu_si128(out[48..].as_mut_ptr().cast(), rgba3);
    }
    if c1.len() % CHUNK_SIZE != 0 {
        let rem = c1.len() % CHUNK_SIZE;
        let start = c1.len() - rem;

        interleave_four_channels_scalar(
            &c1[start..],
            &c2[start..],
            &c3[start..],
            &c4[start..],
            &mut dest[start * 4..]
        );
    }
}
