/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use merle_core::component::Component;
use merle_image::buffer::PixelBuffer;
use merle_image::errors::ImageOperationsErrors;
use merle_image::traits::OperationsTrait;

use crate::linear::{linear_map, LinearMap};

/// Scale the distance of each color channel from mid gray
///
/// `c' = (c - 128) * contrast + 128`, alpha untouched
pub struct Contrast {
    contrast: f32
}

impl Contrast {
    /// Create a new contrast filter
    ///
    /// # Arguments
    /// - contrast: `1.0` keeps the image, smaller values flatten it towards gray,
    ///   larger ones stretch it, negative values invert around gray.
    #[must_use]
    pub fn new(contrast: f32) -> Contrast {
        Contrast { contrast }
    }
}

impl OperationsTrait for Contrast {
    fn name(&self) -> &'static str {
        "Contrast"
    }

    fn execute_impl(&self, buffer: &mut PixelBuffer) -> Result<(), ImageOperationsErrors> {
        let map = LinearMap::around(128.0, self.contrast);
        let options = buffer.options();

        for component in Component::COLOR {
            linear_map(options, buffer.plane_mut(component), map);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use merle_core::color::PackedColor;
    use merle_image::buffer::PixelBuffer;
    use merle_image::traits::OperationsTrait;

    use crate::contrast::Contrast;

    #[test]
    fn contrast_stretches_around_gray() {
        let mut buffer = PixelBuffer::from_color(1, 1, PackedColor::new(100, 128, 200, 0)).unwrap();
        Contrast::new(2.0).execute(&mut buffer).unwrap();

        assert_eq!(buffer.get_pixel(0, 0), Some(PackedColor::new(72, 128, 255, 0)));
    }

    #[test]
    fn zero_contrast_is_flat_gray() {
        let mut buffer = PixelBuffer::from_color(4, 4, PackedColor::ORANGE).unwrap();
        Contrast::new(0.0).execute(&mut buffer).unwrap();
        assert_eq!(buffer.get_pixel(3, 0), Some(PackedColor::gray(128)));
    }
}
