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

/// Multiply the alpha channel by a factor in `[0,1]`
///
/// Factors outside the range are accepted, results saturate.
pub struct Opacity {
    opacity: f32
}

impl Opacity {
    #[must_use]
    pub fn new(opacity: f32) -> Opacity {
        Opacity { opacity }
    }
}

impl OperationsTrait for Opacity {
    fn name(&self) -> &'static str {
        "Opacity"
    }

    fn execute_impl(&self, buffer: &mut PixelBuffer) -> Result<(), ImageOperationsErrors> {
        let options = buffer.options();
        linear_map(
            options,
            buffer.plane_mut(Component::Alpha),
            LinearMap::scale(self.opacity)
        );
        Ok(())
    }
}
