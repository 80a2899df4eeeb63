/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */


//! Alpha pre-multiplication
//!
//! Each color channel is scaled by its pixel's alpha, `c' = c * a / 255`
//! rounded to nearest. The division is replaced by the usual
//! `(t + (t >> 8)) >> 8` trick which is exact for all byte pairs.
use merle_core::options::KernelOptions;
use merle_image::buffer::PixelBuffer;
use merle_image::errors::ImageOperationsErrors;
use merle_image::traits::OperationsTrait;

use crate::mathops::multiply_div_255;

mod sse41;

/// Multiply red, green and blue by alpha
#[derive(Default, Copy, Clone)]
pub struct PremultiplyAlpha;

impl PremultiplyAlpha {
    #[must_use]
    pub fn new() -> PremultiplyAlpha {
        PremultiplyAlpha
    }
}

impl OperationsTrait for PremultiplyAlpha {
    fn name(&self) -> &'static str {
        "Premultiply alpha"
    }

    fn execute_impl(&self, buffer: &mut PixelBuffer) -> Result<(), ImageOperationsErrors> {
        let options = buffer.options();
        let [r, g, b, alpha] = buffer.planes_mut();

        for plane in [r, g, b] {
            premultiply_u8(options, plane, alpha);
        }
        Ok(())
    }
}

pub(crate) fn premultiply_u8_scalar(input: &mut [u8], alpha: &[u8]) {
    input
        .iter_mut()
        .zip(alpha)
        .for_each(|(color, alpha)| *color = multiply_div_255(*color, *alpha));
}

/// Premultiply one color plane by the alpha plane
#[allow(unused_variables)]
pub fn premultiply_u8(options: KernelOptions, input: &mut [u8], alpha: &[u8]) {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        #[cfg(feature = "sse41")]
        {
            use crate::premul_alpha::sse41::premultiply_u8_sse41;

            if options.use_sse41() {
                unsafe {
                    return premultiply_u8_sse41(input, alpha);
                }
            }
        }
    }
    premultiply_u8_scalar(input, alpha);
}
