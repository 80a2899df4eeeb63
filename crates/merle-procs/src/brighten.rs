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

/// Brighten or darken the color channels
///
/// A brightness of `1.0` leaves the image unchanged, `2.0` adds a full
/// 255 to every color channel and `0.0` removes it.
pub struct Brightness {
    brightness: f32
}

impl Brightness {
    #[must_use]
    pub fn new(brightness: f32) -> Brightness {
        Brightness { brightness }
    }
}

impl OperationsTrait for Brightness {
    fn name(&self) -> &'static str {
        "Brightness"
    }

    fn execute_impl(&self, buffer: &mut PixelBuffer) -> Result<(), ImageOperationsErrors> {
        let map = LinearMap::offset(255.0 * (self.brightness - 1.0));
        let options = buffer.options();

        for component in Component::COLOR {
            linear_map(options, buffer.plane_mut(component), map);
        }
        Ok(())
    }
}
