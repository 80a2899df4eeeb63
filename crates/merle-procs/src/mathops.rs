/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Mathematical operations shared amongst kernels
//!
//! The scalar helpers live in `merle_core::utils`, the vector
//! counterparts in this module's `sse41` child mirror them one to one.

pub use merle_core::utils::{
    byte_from_f32, byte_from_unit, luma_fixed, luma_unit, unit_from_byte, INV_255,
    INV_LUMA_FIXED_MAX, LUMA_BLUE, LUMA_FIXED_MAX, LUMA_GREEN, LUMA_RED
};

pub(crate) mod sse41;

/// Integer average of three bytes, truncating
#[inline(always)]
#[allow(clippy::cast_possible_truncation)]
pub fn average_of_three(a: u8, b: u8, c: u8) -> u8 {
    ((u16::from(a) + u16::from(b) + u16::from(c)) / 3) as u8
}

/// Rounded `value * alpha / 255` without a division
#[inline(always)]
#[allow(clippy::cast_possible_truncation)]
pub fn multiply_div_255(value: u8, alpha: u8) -> u8 {
    let temp = u16::from(value) * u16::from(alpha) + 128;
    ((temp + (temp >> 8)) >> 8) as u8
}

#[test]
fn test_multiply_div_255() {
    for value in 0..=255_u8 {
        for alpha in 0..=255_u8 {
            let expected = (f64::from(value) * f64::from(alpha) / 255.0).round();
            assert_eq!(f64::from(multiply_div_255(value, alpha)), expected);
        }
    }
}

#[test]
fn test_average_of_three() {
    assert_eq!(average_of_three(0, 255, 255), 170);
    assert_eq!(average_of_three(255, 255, 255), 255);
    assert_eq!(average_of_three(1, 1, 0), 0);
}
