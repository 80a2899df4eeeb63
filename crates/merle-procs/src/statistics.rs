/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */


//! Whole buffer statistics
//!
//! These never modify the buffer, they read it with the buffer's own
//! [`KernelOptions`] and return plain values.
//!
//! Sums are exact integers in both strategies, the only floating point
//! step is the final division, which is shared.
use merle_core::color::PackedColor;
use merle_core::component::Component;
use merle_core::options::KernelOptions;
use merle_image::buffer::PixelBuffer;

use crate::mathops::{luma_fixed, LUMA_FIXED_MAX};

mod sse41;

/// Every statistic at once
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BufferStatistics {
    pub average_color:     PackedColor,
    pub average_luminance: f32,
    pub is_opaque:         bool
}

impl BufferStatistics {
    #[must_use]
    pub fn from_buffer(buffer: &PixelBuffer) -> BufferStatistics {
        BufferStatistics {
            average_color:     average_color(buffer),
            average_luminance: average_luminance(buffer),
            is_opaque:         is_opaque(buffer)
        }
    }
}

pub(crate) fn plane_sum_scalar(plane: &[u8]) -> u64 {
    plane.iter().map(|x| u64::from(*x)).sum()
}

pub(crate) fn luma_sum_scalar(r: &[u8], g: &[u8], b: &[u8]) -> u64 {
    r.iter()
        .zip(g)
        .zip(b)
        .map(|((r, g), b)| u64::from(luma_fixed(*r, *g, *b)))
        .sum()
}

pub(crate) fn is_opaque_scalar(alpha: &[u8]) -> bool {
    alpha.iter().all(|x| *x == 255)
}

/// Sum of all bytes in a plane
#[allow(unused_variables)]
pub fn plane_sum(options: KernelOptions, plane: &[u8]) -> u64 {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        #[cfg(feature = "sse41")]
        {
            use crate::statistics::sse41::plane_sum_sse41;

            if options.use_sse41() {
                unsafe {
                    return plane_sum_sse41(plane);
                }
            }
        }
    }
    plane_sum_scalar(plane)
}

/// Sum of the fixed point luma of every pixel
#[allow(unused_variables)]
pub fn luma_sum(options: KernelOptions, r: &[u8], g: &[u8], b: &[u8]) -> u64 {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        #[cfg(feature = "sse41")]
        {
            use crate::statistics::sse41::luma_sum_sse41;

            if options.use_sse41() {
                unsafe {
                    return luma_sum_sse41(r, g, b);
                }
            }
        }
    }
    luma_sum_scalar(r, g, b)
}

/// Rounded per channel mean of every pixel
///
/// An empty buffer averages to transparent black.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn average_color(buffer: &PixelBuffer) -> PackedColor {
    let count = buffer.area() as u64;

    if count == 0 {
        return PackedColor::TRANSPARENT_BLACK;
    }
    let mut color = PackedColor::TRANSPARENT_BLACK;

    for component in Component::ALL {
        let sum = plane_sum(buffer.options(), buffer.plane(component));
        // mean of bytes is at most 255
        color.set_component(component, ((sum + count / 2) / count) as u8);
    }
    color
}

/// Mean Rec.601 luma of every pixel, in `[0,1]`
///
/// This is the same luma [`LuminanceThreshold`](crate::threshold::LuminanceThreshold)
/// compares against. An empty buffer has a luminance of zero.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn average_luminance(buffer: &PixelBuffer) -> f32 {
    if buffer.is_empty() {
        return 0.0;
    }
    let [r, g, b, _] = buffer.planes();
    let sum = luma_sum(buffer.options(), r, g, b);

    let maximum = buffer.area() as f64 * f64::from(LUMA_FIXED_MAX);

    (sum as f64 / maximum) as f32
}

/// Return true if every alpha byte is 255, an empty buffer is opaque
#[must_use]
#[allow(unused_variables)]
pub fn is_opaque(buffer: &PixelBuffer) -> bool {
    let alpha = buffer.plane(Component::Alpha);
    let options = buffer.options();

    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        #[cfg(feature = "sse41")]
        {
            use crate::statistics::sse41::is_opaque_sse41;

            if options.use_sse41() {
                unsafe {
                    return is_opaque_sse41(alpha);
                }
            }
        }
    }
    is_opaque_scalar(alpha)
}
