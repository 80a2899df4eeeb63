/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */


use merle_core::color::PackedColor;
use merle_core::component::{ChannelMask, Component};
use merle_image::buffer::PixelBuffer;
use merle_image::errors::ImageOperationsErrors;
use merle_image::traits::OperationsTrait;

/// Fill the selected channels with the matching component of a color
///
/// Channels not in the mask keep their values.
#[derive(Copy, Clone, Debug)]
pub struct Clear {
    color: PackedColor,
    mask:  ChannelMask
}

impl Clear {
    /// Clear all four channels to `color`
    #[must_use]
    pub fn new(color: PackedColor) -> Clear {
        Clear {
            color,
            mask: ChannelMask::all()
        }
    }

    /// Clear only the channels in `mask`
    #[must_use]
    pub fn with_mask(color: PackedColor, mask: ChannelMask) -> Clear {
        Clear { color, mask }
    }
}

impl OperationsTrait for Clear {
    fn name(&self) -> &'static str {
        "Clear"
    }

    fn execute_impl(&self, buffer: &mut PixelBuffer) -> Result<(), ImageOperationsErrors> {
        for component in Component::ALL {
            if self.mask.contains(component) {
                buffer
                    .plane_mut(component)
                    .fill(self.color.component(component));
            }
        }
        Ok(())
    }
}
