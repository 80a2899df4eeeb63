/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Byte and unit float conversions
//!
//! Every kernel that leaves the integer domain comes back through
//! [`byte_from_f32`], vectorized kernels replicate exactly the same
//! sequence of operations so both paths round identically.

/// `1/255`, multiplied instead of dividing
pub const INV_255: f32 = 1.0 / 255.0;

/// Fixed point Rec.601 luma weights, they sum to 256
pub const LUMA_RED: u32 = 77;
pub const LUMA_GREEN: u32 = 150;
pub const LUMA_BLUE: u32 = 29;

/// Largest value [`luma_fixed`] can return
pub const LUMA_FIXED_MAX: u32 = 255 * 256;

/// `1 / LUMA_FIXED_MAX`
pub const INV_LUMA_FIXED_MAX: f32 = 1.0 / LUMA_FIXED_MAX as f32;

/// Map a byte into `[0,1]`
#[inline(always)]
pub fn unit_from_byte(value: u8) -> f32 {
    f32::from(value) * INV_255
}

/// Saturate a float in byte units to `[0,255]` and round half up.
///
/// NaN maps to zero.
#[inline(always)]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn byte_from_f32(value: f32) -> u8 {
    // max/min in this order so NaN collapses to zero, matching _mm_max_ps(v, 0)
    let clamped = if value > 0.0 { value } else { 0.0 };
    let clamped = if clamped < 255.0 { clamped } else { 255.0 };

    (clamped + 0.5) as u8
}

/// Scale a unit float back to a byte
#[inline(always)]
pub fn byte_from_unit(value: f32) -> u8 {
    byte_from_f32(value * 255.0)
}

/// Fixed point luma of a pixel, in `0..=LUMA_FIXED_MAX`
#[inline(always)]
pub fn luma_fixed(r: u8, g: u8, b: u8) -> u32 {
    LUMA_RED * u32::from(r) + LUMA_GREEN * u32::from(g) + LUMA_BLUE * u32::from(b)
}

/// Luma of a pixel in `[0,1]`
#[inline(always)]
#[allow(clippy::cast_precision_loss)]
pub fn luma_unit(r: u8, g: u8, b: u8) -> f32 {
    luma_fixed(r, g, b) as f32 * INV_LUMA_FIXED_MAX
}
