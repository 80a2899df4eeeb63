/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */


//! Convert the color channels to gray
//!
//! Gray here is the truncating integer average of red, green and blue,
//! written back into all three color planes. Alpha is left alone.
use merle_core::options::KernelOptions;
use merle_image::buffer::PixelBuffer;
use merle_image::errors::ImageOperationsErrors;
use merle_image::traits::OperationsTrait;

use crate::grayscale::scalar::grayscale_scalar;

mod scalar;
mod sse41;

/// Replace red, green and blue with their average
#[derive(Default, Copy, Clone)]
pub struct Grayscale;

impl Grayscale {
    #[must_use]
    pub fn new() -> Grayscale {
        Grayscale
    }
}

impl OperationsTrait for Grayscale {
    fn name(&self) -> &'static str {
        "Grayscale"
    }

    fn execute_impl(&self, buffer: &mut PixelBuffer) -> Result<(), ImageOperationsErrors> {
        let options = buffer.options();
        let [r, g, b, _] = buffer.planes_mut();

        grayscale(options, (r, g, b));
        Ok(())
    }
}

#[allow(unused_variables)]
pub fn grayscale(options: KernelOptions, (r, g, b): (&mut [u8], &mut [u8], &mut [u8])) {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        #[cfg(feature = "sse41")]
        {
            use crate::grayscale::sse41::grayscale_sse41;

            if options.use_sse41() {
                unsafe {
                    return grayscale_sse41((r, g, b));
                }
            }
        }
    }
    grayscale_scalar((r, g, b));
}
