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

/// Adjust exposure of the color channels
///
/// Each of red, green and blue is multiplied by `2^exposure`,
/// alpha is untouched.
pub struct Exposure {
    exposure: f32
}

impl Exposure {
    /// Create a new exposure filter
    ///
    /// # Arguments
    ///  - exposure: Exposure correction in stops, zero leaves the image as is
    #[must_use]
    pub fn new(exposure: f32) -> Exposure {
        Exposure { exposure }
    }
}

impl OperationsTrait for Exposure {
    fn name(&self) -> &'static str {
        "Exposure"
    }

    fn execute_impl(&self, buffer: &mut PixelBuffer) -> Result<(), ImageOperationsErrors> {
        let map = LinearMap::scale(self.exposure.exp2());
        let options = buffer.options();

        for component in Component::COLOR {
            linear_map(options, buffer.plane_mut(component), map);
        }
        Ok(())
    }
}
