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

/// Scale each channel, alpha included, by its own level
///
/// Levels are nominally in `[0,1]`, a level of one leaves its channel as is.
pub struct RgbaLevels {
    levels: [f32; 4]
}

impl RgbaLevels {
    #[must_use]
    pub fn new(red: f32, green: f32, blue: f32, alpha: f32) -> RgbaLevels {
        RgbaLevels {
            levels: [red, green, blue, alpha]
        }
    }
}

impl OperationsTrait for RgbaLevels {
    fn name(&self) -> &'static str {
        "RGBA levels"
    }

    fn execute_impl(&self, buffer: &mut PixelBuffer) -> Result<(), ImageOperationsErrors> {
        let options = buffer.options();

        for component in Component::ALL {
            let level = self.levels[component.index()];
            linear_map(options, buffer.plane_mut(component), LinearMap::scale(level));
        }
        Ok(())
    }
}
