/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */


//! Saturation and vibrance
//!
//! Both move each color channel along the line through the pixel's luma,
//! `c' = luma + (c - luma) * (1 + s)`, computed in unit floats.
//! Vibrance uses the same formula as saturation.
use merle_core::options::KernelOptions;
use merle_image::buffer::PixelBuffer;
use merle_image::errors::ImageOperationsErrors;
use merle_image::traits::OperationsTrait;

use crate::mathops::{byte_from_unit, luma_unit, unit_from_byte};

mod sse41;

/// Adjust the saturation of the image
///
/// Negative values desaturate, `-1.0` gives a gray image.
/// Positive values push channels away from gray.
#[derive(Copy, Clone, Debug)]
pub struct Saturation {
    saturation: f32
}

impl Saturation {
    #[must_use]
    pub fn new(saturation: f32) -> Saturation {
        Saturation { saturation }
    }
}

impl OperationsTrait for Saturation {
    fn name(&self) -> &'static str {
        "Saturation"
    }

    fn execute_impl(&self, buffer: &mut PixelBuffer) -> Result<(), ImageOperationsErrors> {
        let options = buffer.options();
        let [r, g, b, _] = buffer.planes_mut();

        saturate(options, (r, g, b), self.saturation);
        Ok(())
    }
}

/// Adjust the vibrance of the image, nominally in `[-2,2]`
///
/// Currently shares the saturation curve.
#[derive(Copy, Clone, Debug)]
pub struct Vibrance {
    vibrance: f32
}

impl Vibrance {
    #[must_use]
    pub fn new(vibrance: f32) -> Vibrance {
        Vibrance { vibrance }
    }
}

impl OperationsTrait for Vibrance {
    fn name(&self) -> &'static str {
        "Vibrance"
    }

    fn execute_impl(&self, buffer: &mut PixelBuffer) -> Result<(), ImageOperationsErrors> {
        Saturation::new(self.vibrance).execute_impl(buffer)
    }
}

#[inline(always)]
fn saturate_channel(value: u8, luma: f32, factor: f32) -> u8 {
    byte_from_unit(luma + (unit_from_byte(value) - luma) * factor)
}

pub(crate) fn saturate_scalar((r, g, b): (&mut [u8], &mut [u8], &mut [u8]), saturation: f32) {
    let factor = 1.0 + saturation;

    for ((r, g), b) in r.iter_mut().zip(g.iter_mut()).zip(b.iter_mut()) {
        let luma = luma_unit(*r, *g, *b);

        *r = saturate_channel(*r, luma, factor);
        *g = saturate_channel(*g, luma, factor);
        *b = saturate_channel(*b, luma, factor);
    }
}

#[allow(unused_variables)]
pub fn saturate(
    options: KernelOptions, (r, g, b): (&mut [u8], &mut [u8], &mut [u8]), saturation: f32
) {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        #[cfg(feature = "sse41")]
        {
            use crate::saturation::sse41::saturate_sse41;

            if options.use_sse41() {
                unsafe {
                    return saturate_sse41((r, g, b), saturation);
                }
            }
        }
    }
    saturate_scalar((r, g, b), saturation);
}

#[cfg(test)]
mod tests {
    use merle_core::color::PackedColor;
    use merle_image::buffer::PixelBuffer;
    use merle_image::traits::OperationsTrait;

    use crate::saturation::{Saturation, Vibrance};

    #[test]
    fn zero_is_identity() {
        let color = PackedColor::new(210, 30, 99, 4);
        let mut buffer = PixelBuffer::from_color(7, 7, color).unwrap();

        Saturation::new(0.0).execute(&mut buffer).unwrap();
        assert_eq!(buffer.get_pixel(6, 6), Some(color));
    }

    #[test]
    fn minus_one_is_gray() {
        let mut buffer = PixelBuffer::from_color(2, 2, PackedColor::ORANGE).unwrap();
        Saturation::new(-1.0).execute(&mut buffer).unwrap();

        let pixel = buffer.get_pixel(1, 0).unwrap();
        assert_eq!(pixel.r, pixel.g);
        assert_eq!(pixel.g, pixel.b);
        assert_eq!(pixel.a, 255);
    }

    #[test]
    fn vibrance_matches_saturation() {
        let mut a = PixelBuffer::from_color(5, 3, PackedColor::ROYAL_BLUE).unwrap();
        let mut b = a.try_clone().unwrap();

        Saturation::new(0.6).execute(&mut a).unwrap();
        Vibrance::new(0.6).execute(&mut b).unwrap();

        assert_eq!(a, b);
        assert_ne!(a.get_pixel(0, 0), Some(PackedColor::ROYAL_BLUE));
    }
}
