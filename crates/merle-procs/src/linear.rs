/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Per channel affine maps
//!
//! Exposure, brightness, levels, contrast and opacity are all of the form
//! `c' = clamp((c - pivot) * scale + offset)` in byte units, they share this
//! kernel and only differ in how they pick the three constants.

use merle_core::options::KernelOptions;

use crate::mathops::byte_from_f32;

mod sse41;

/// Constants of an affine byte map
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LinearMap {
    pub pivot:  f32,
    pub scale:  f32,
    pub offset: f32
}

impl LinearMap {
    /// `c * scale`
    pub const fn scale(scale: f32) -> LinearMap {
        LinearMap {
            pivot: 0.0,
            scale,
            offset: 0.0
        }
    }

    /// `c + offset`
    pub const fn offset(offset: f32) -> LinearMap {
        LinearMap {
            pivot: 0.0,
            scale: 1.0,
            offset
        }
    }

    /// `(c - pivot) * scale + pivot`
    pub const fn around(pivot: f32, scale: f32) -> LinearMap {
        LinearMap {
            pivot,
            scale,
            offset: pivot
        }
    }

    #[inline(always)]
    pub fn apply(&self, value: u8) -> u8 {
        byte_from_f32((f32::from(value) - self.pivot) * self.scale + self.offset)
    }
}

pub(crate) fn linear_map_scalar(plane: &mut [u8], map: LinearMap) {
    for pix in plane.iter_mut() {
        *pix = map.apply(*pix);
    }
}

/// Apply `map` to every byte of `plane`
#[allow(unused_variables)]
pub fn linear_map(options: KernelOptions, plane: &mut [u8], map: LinearMap) {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        #[cfg(feature = "sse41")]
        {
            use crate::linear::sse41::linear_map_sse41;

            if options.use_sse41() {
                unsafe {
                    return linear_map_sse41(plane, map);
                }
            }
        }
    }
    linear_map_scalar(plane, map);
}
