/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */


//! Invert the color channels of an image
use merle_core::component::Component;
use merle_core::options::KernelOptions;
use merle_image::buffer::PixelBuffer;
use merle_image::errors::ImageOperationsErrors;
use merle_image::traits::OperationsTrait;

mod sse41;

/// Invert red, green and blue, `c' = 255 - c`
///
/// Alpha is not touched, applying it twice gives back the original
#[derive(Default, Copy, Clone)]
pub struct Invert;

impl Invert {
    #[must_use]
    pub fn new() -> Invert {
        Invert
    }
}

impl OperationsTrait for Invert {
    fn name(&self) -> &'static str {
        "Invert"
    }

    fn execute_impl(&self, buffer: &mut PixelBuffer) -> Result<(), ImageOperationsErrors> {
        let options = buffer.options();

        for component in Component::COLOR {
            invert(options, buffer.plane_mut(component));
        }
        Ok(())
    }
}

pub(crate) fn invert_scalar(plane: &mut [u8]) {
    for pix in plane.iter_mut() {
        *pix = 255 - *pix;
    }
}

#[allow(unused_variables)]
pub fn invert(options: KernelOptions, plane: &mut [u8]) {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        #[cfg(feature = "sse41")]
        {
            use crate::invert::sse41::invert_sse41;

            if options.use_sse41() {
                unsafe {
                    return invert_sse41(plane);
                }
            }
        }
    }
    invert_scalar(plane);
}

#[cfg(test)]
mod tests {
    use merle_core::color::PackedColor;
    use merle_image::buffer::PixelBuffer;
    use merle_image::traits::OperationsTrait;

    use crate::invert::Invert;

    #[test]
    fn invert_is_an_involution() {
        let color = PackedColor::new(3, 128, 250, 100);
        let mut buffer = PixelBuffer::from_color(19, 3, color).unwrap();

        Invert.execute(&mut buffer).unwrap();
        assert_eq!(buffer.get_pixel(18, 2), Some(PackedColor::new(252, 127, 5, 100)));

        Invert.execute(&mut buffer).unwrap();
        assert_eq!(buffer.get_pixel(18, 2), Some(color));
    }
}
