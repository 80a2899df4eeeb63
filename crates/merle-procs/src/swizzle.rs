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

use crate::utils::try_zeroed_vec;

/// Rearrange channels
///
/// Output channel `i` takes the input channel named at position `i`,
/// the same input channel may feed several outputs.
///
/// # Example
/// Swap red and blue
/// ```
/// use merle_core::color::PackedColor;
/// use merle_core::component::Component;
/// use merle_image::buffer::PixelBuffer;
/// use merle_image::traits::OperationsTrait;
/// use merle_procs::swizzle::Swizzle;
///
/// let mut buffer = PixelBuffer::from_color(2, 2, PackedColor::new(1, 2, 3, 4)).unwrap();
/// Swizzle::new([Component::Blue, Component::Green, Component::Red, Component::Alpha])
///     .execute(&mut buffer)
///     .unwrap();
/// assert_eq!(buffer.get_pixel(0, 0), Some(PackedColor::new(3, 2, 1, 4)));
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Swizzle {
    sources: [Component; 4]
}

impl Swizzle {
    /// Create a new swizzle, `sources` lists the input channel for red, green, blue and alpha
    #[must_use]
    pub fn new(sources: [Component; 4]) -> Swizzle {
        Swizzle { sources }
    }

    fn is_identity(&self) -> bool {
        self.sources == Component::ALL
    }
}

impl OperationsTrait for Swizzle {
    fn name(&self) -> &'static str {
        "Swizzle"
    }

    fn execute_impl(&self, buffer: &mut PixelBuffer) -> Result<(), ImageOperationsErrors> {
        if self.is_identity() || buffer.is_empty() {
            return Ok(());
        }
        // inputs are staged since outputs overwrite channels still to be read
        let mut staged = try_zeroed_vec(buffer.len())?;
        staged.copy_from_slice(buffer.as_bytes());

        let area = buffer.area();

        for (output, source) in Component::ALL.into_iter().zip(self.sources) {
            let start = source.index() * area;

            buffer
                .plane_mut(output)
                .copy_from_slice(&staged[start..start + area]);
        }
        Ok(())
    }
}
