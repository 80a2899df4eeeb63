/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */


//! Border replication for spatial filters
//!
//! Spatial kernels never read the plane they write. The source plane is
//! first copied into a larger staging plane whose border repeats the
//! nearest edge pixel, then every output pixel reads a full window from it.
//!
//! ```text
//!  a,b,c
//!  d,e,f
//! ```
//! padded by one becomes
//! ```text
//! a a,b,c c
//! a a,b,c c
//! d d,e,f f
//! d d,e,f f
//! ```
use crate::utils::try_zeroed_vec;
use merle_image::errors::ImageOperationsErrors;

/// Dimensions of a plane padded by `pad` on every side
pub(crate) fn padded_dimensions(
    width: usize, height: usize, pad: usize
) -> Result<(usize, usize), ImageOperationsErrors> {
    let padded = |dimension: usize| {
        pad.checked_mul(2)
            .and_then(|x| x.checked_add(dimension))
            .ok_or(ImageOperationsErrors::GenericStr("Padded dimensions overflow"))
    };
    Ok((padded(width)?, padded(height)?))
}

/// Allocate a staging plane large enough for a `width x height` plane padded by `pad`
pub(crate) fn allocate_padded(
    width: usize, height: usize, pad: usize
) -> Result<Vec<u8>, ImageOperationsErrors> {
    let (padded_width, padded_height) = padded_dimensions(width, height, pad)?;

    let length = padded_width
        .checked_mul(padded_height)
        .ok_or(ImageOperationsErrors::GenericStr("Padded dimensions overflow"))?;

    try_zeroed_vec(length)
}

/// Copy `pixels` into `out`, replicating edge pixels `pad` times on every side
///
/// `out` must be exactly `(width + 2*pad) * (height + 2*pad)` long and `pixels`
/// must hold at least one pixel.
pub(crate) fn replicate_into(pixels: &[u8], width: usize, height: usize, pad: usize, out: &mut [u8]) {
    let padded_width = width + pad * 2;

    debug_assert_eq!(out.len(), padded_width * (height + pad * 2));
    debug_assert!(width > 0 && height > 0);

    let start = pad;
    let end = padded_width - pad;

    let fill_row = |out: &mut [u8], row: &[u8]| {
        out[..start].fill(row[0]);
        out[start..end].copy_from_slice(row);
        out[end..].fill(row[width - 1]);
    };

    let first_row = &pixels[..width];
    let last_row = &pixels[(height - 1) * width..height * width];

    // top border
    for out_row in out.chunks_exact_mut(padded_width).take(pad) {
        fill_row(out_row, first_row);
    }
    // middle
    for (out_row, in_row) in out
        .chunks_exact_mut(padded_width)
        .skip(pad)
        .take(height)
        .zip(pixels.chunks_exact(width))
    {
        fill_row(out_row, in_row);
    }
    // bottom border
    for out_row in out.rchunks_exact_mut(padded_width).take(pad) {
        fill_row(out_row, last_row);
    }
}
