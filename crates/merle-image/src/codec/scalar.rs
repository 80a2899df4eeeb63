/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Portable conversions between packed pixels and planes

/// Split packed `rgba` pixels into four planes
///
/// `source` must hold exactly four bytes per plane element.
pub(crate) fn deinterleave_four_channels_scalar(
    source: &[u8], c1: &mut [u8], c2: &mut [u8], c3: &mut [u8], c4: &mut [u8]
) {
    let pixels: &[[u8; 4]] = bytemuck::cast_slice(source);

    for ((((pixel, r), g), b), a) in pixels
        .iter()
        .zip(c1.iter_mut())
        .zip(c2.iter_mut())
        .zip(c3.iter_mut())
        .zip(c4.iter_mut())
    {
        *r = pixel[0];
        *g = pixel[1];
        *b = pixel[2];
        *a = pixel[3];
    }
}

/// Merge four planes into packed `rgba` pixels
pub(crate) fn interleave_four_channels_scalar(
    c1: &[u8], c2: &[u8], c3: &[u8], c4: &[u8], dest: &mut [u8]
) {
    let pixels: &mut [[u8; 4]] = bytemuck::cast_slice_mut(dest);

    for ((((pixel, r), g), b), a) in pixels.iter_mut().zip(c1).zip(c2).zip(c3).zip(c4) {
        *pixel = [*r, *g, *b, *a];
    }
}
