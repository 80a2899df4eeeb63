/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Conversion between packed pixels and planes
//!
//! Decoders and displays speak interleaved `R`,`G`,`B`,`A`,`R`,`G`,`B`,`A`...
//! while the engine stores `RRRR`,`GGGG`,`BBBB`,`AAAA`.
//!
//! Both directions are lossless byte placement, no color conversion happens,
//! and both check lengths before writing anything.

use merle_core::log::trace;
use merle_core::options::KernelOptions;

use crate::buffer::PixelBuffer;
use crate::errors::ImageErrors;

mod scalar;
mod sse41;

/// Expected byte length of interleaved data for the given dimensions
fn interleaved_length(width: usize, height: usize) -> Result<usize, ImageErrors> {
    width
        .checked_mul(height)
        .and_then(|area| area.checked_mul(4))
        .ok_or(ImageErrors::AllocationFailed(width, height))
}

#[allow(unused_variables)]
fn deinterleave(
    options: KernelOptions, source: &[u8], c1: &mut [u8], c2: &mut [u8], c3: &mut [u8],
    c4: &mut [u8]
) {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        #[cfg(feature = "sse41")]
        {
            use crate::codec::sse41::deinterleave_four_channels_sse41;

            if options.use_sse41() {
                unsafe {
                    return deinterleave_four_channels_sse41(source, c1, c2, c3, c4);
                }
            }
        }
    }
    scalar::deinterleave_four_channels_scalar(source, c1, c2, c3, c4);
}

#[allow(unused_variables)]
fn interleave(
    options: KernelOptions, c1: &[u8], c2: &[u8], c3: &[u8], c4: &[u8], dest: &mut [u8]
) {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        #[cfg(feature = "sse41")]
        {
            use crate::codec::sse41::interleave_four_channels_sse41;

            if options.use_sse41() {
                unsafe {
                    return interleave_four_channels_sse41(c1, c2, c3, c4, dest);
                }
            }
        }
    }
    scalar::interleave_four_channels_scalar(c1, c2, c3, c4, dest);
}

/// Split interleaved rgba bytes into `buffer`, resizing it to `width x height`
///
/// # Errors
/// - [`ImageErrors::InterleavedLengthMisMatch`] if `bytes` is not `4*width*height` long
/// - [`ImageErrors::AllocationFailed`] if the buffer cannot be resized
///
/// In both cases `buffer` is not modified.
pub fn decode_interleaved_into(
    bytes: &[u8], width: usize, height: usize, buffer: &mut PixelBuffer
) -> Result<(), ImageErrors> {
    let expected = interleaved_length(width, height)?;

    if bytes.len() != expected {
        return Err(ImageErrors::InterleavedLengthMisMatch(expected, bytes.len()));
    }
    buffer.resize(width, height)?;

    trace!("Splitting {width}x{height} interleaved pixels into planes");

    let options = buffer.options();
    let [r, g, b, a] = buffer.planes_mut();
    deinterleave(options, bytes, r, g, b, a);

    Ok(())
}

/// Create a new buffer from interleaved rgba bytes
///
/// # Errors
/// See [`decode_interleaved_into`]
pub fn decode_interleaved(
    bytes: &[u8], width: usize, height: usize
) -> Result<PixelBuffer, ImageErrors> {
    decode_interleaved_with_options(bytes, width, height, KernelOptions::default())
}

/// Create a new buffer from interleaved rgba bytes, whose kernels
/// will run with `options`
///
/// # Errors
/// See [`decode_interleaved_into`]
pub fn decode_interleaved_with_options(
    bytes: &[u8], width: usize, height: usize, options: KernelOptions
) -> Result<PixelBuffer, ImageErrors> {
    let mut buffer = PixelBuffer::new_with_options(options);
    decode_interleaved_into(bytes, width, height, &mut buffer)?;

    Ok(buffer)
}

/// Write the planes of `buffer` as interleaved rgba bytes into `dest`
///
/// # Errors
/// [`ImageErrors::InterleavedLengthMisMatch`] if `dest` is not exactly
/// `4*width*height` bytes long, nothing is written in that case.
pub fn encode_interleaved_into(buffer: &PixelBuffer, dest: &mut [u8]) -> Result<(), ImageErrors> {
    if dest.len() != buffer.len() {
        return Err(ImageErrors::InterleavedLengthMisMatch(buffer.len(), dest.len()));
    }
    trace!(
        "Merging {}x{} planes into interleaved pixels",
        buffer.width(),
        buffer.height()
    );
    let [r, g, b, a] = buffer.planes();
    interleave(buffer.options(), r, g, b, a, dest);

    Ok(())
}

/// Return the planes of `buffer` as interleaved rgba bytes
///
/// # Errors
/// [`ImageErrors::AllocationFailed`] if the output cannot be allocated
pub fn encode_interleaved(buffer: &PixelBuffer) -> Result<Vec<u8>, ImageErrors> {
    let mut output = Vec::new();
    output
        .try_reserve_exact(buffer.len())
        .map_err(|_| ImageErrors::AllocationFailed(buffer.width(), buffer.height()))?;
    output.resize(buffer.len(), 0);

    encode_interleaved_into(buffer, &mut output)?;

    Ok(output)
}
