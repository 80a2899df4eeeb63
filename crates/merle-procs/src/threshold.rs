/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */


//! Binarize an image on its luma
use merle_core::options::KernelOptions;
use merle_image::buffer::PixelBuffer;
use merle_image::errors::ImageOperationsErrors;
use merle_image::traits::OperationsTrait;

use crate::mathops::luma_unit;

mod sse41;

/// Set red, green and blue to white where luma is at least `threshold`, black elsewhere
///
/// Luma is the same Rec.601 luma [`AverageLuminance`](crate::statistics::average_luminance)
/// reports, in `[0,1]`. Alpha is untouched.
#[derive(Copy, Clone, Debug)]
pub struct LuminanceThreshold {
    threshold: f32
}

impl LuminanceThreshold {
    #[must_use]
    pub fn new(threshold: f32) -> LuminanceThreshold {
        LuminanceThreshold { threshold }
    }
}

impl OperationsTrait for LuminanceThreshold {
    fn name(&self) -> &'static str {
        "Luminance threshold"
    }

    fn execute_impl(&self, buffer: &mut PixelBuffer) -> Result<(), ImageOperationsErrors> {
        let options = buffer.options();
        let [r, g, b, _] = buffer.planes_mut();

        threshold(options, (r, g, b), self.threshold);
        Ok(())
    }
}

pub(crate) fn threshold_scalar((r, g, b): (&mut [u8], &mut [u8], &mut [u8]), threshold: f32) {
    for ((r, g), b) in r.iter_mut().zip(g.iter_mut()).zip(b.iter_mut()) {
        let value = if luma_unit(*r, *g, *b) >= threshold { 255 } else { 0 };

        *r = value;
        *g = value;
        *b = value;
    }
}

#[allow(unused_variables)]
pub fn threshold(
    options: KernelOptions, (r, g, b): (&mut [u8], &mut [u8], &mut [u8]), threshold: f32
) {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        #[cfg(feature = "sse41")]
        {
            use crate::threshold::sse41::threshold_sse41;

            if options.use_sse41() {
                unsafe {
                    return threshold_sse41((r, g, b), threshold);
                }
            }
        }
    }
    threshold_scalar((r, g, b), threshold);
}
