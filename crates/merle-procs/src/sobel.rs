/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */


//! Sobel edge detection
use merle_core::component::Component;
use merle_core::options::KernelOptions;
use merle_image::buffer::PixelBuffer;
use merle_image::errors::ImageOperationsErrors;
use merle_image::traits::OperationsTrait;

use crate::mathops::byte_from_f32;
use crate::pad::{allocate_padded, replicate_into};
use crate::utils::check_dimensions;

mod sse41;

/// Gradient magnitude of one channel, written into one channel
///
/// The gradient operators are
///
/// Gx matrix
/// ```text
///   -1, 0, 1,
///   -2, 0, 2,
///   -1, 0, 1
/// ```
/// Gy matrix
/// ```text
/// -1,-2,-1,
///  0, 0, 0,
///  1, 2, 1
/// ```
///
/// and the output is `sqrt(gx² + gy²)` saturated to a byte.
/// Gradients are exact integers, edges are clamped.
#[derive(Copy, Clone, Debug)]
pub struct Sobel<'a> {
    source:                Option<&'a PixelBuffer>,
    source_component:      Component,
    destination_component: Component
}

impl<'a> Sobel<'a> {
    /// Detect edges in `source_component` of the buffer the operation runs on,
    /// writing them into `destination_component` of the same buffer
    #[must_use]
    pub fn new(source_component: Component, destination_component: Component) -> Sobel<'a> {
        Sobel {
            source: None,
            source_component,
            destination_component
        }
    }

    /// Detect edges in `source_component` of `source`
    #[must_use]
    pub fn with_source(
        source: &'a PixelBuffer, source_component: Component, destination_component: Component
    ) -> Sobel<'a> {
        Sobel {
            source: Some(source),
            source_component,
            destination_component
        }
    }
}

impl<'a> OperationsTrait for Sobel<'a> {
    fn name(&self) -> &'static str {
        "Sobel"
    }

    fn execute_impl(&self, buffer: &mut PixelBuffer) -> Result<(), ImageOperationsErrors> {
        if let Some(source) = self.source {
            check_dimensions(buffer, source)?;
        }
        if buffer.is_empty() {
            return Ok(());
        }
        let (width, height) = buffer.dimensions();
        let options = buffer.options();

        let mut padded = allocate_padded(width, height, 1)?;

        let plane = match self.source {
            Some(source) => source.plane(self.source_component),
            None => buffer.plane(self.source_component)
        };
        replicate_into(plane, width, height, 1, &mut padded);

        sobel_padded(
            options,
            &padded,
            (width, height),
            buffer.plane_mut(self.destination_component)
        );
        Ok(())
    }
}

/// Window of a padded plane around output `(x,y)`, row major
#[inline(always)]
fn window(padded: &[u8], padded_width: usize, x: usize, y: usize) -> [i32; 9] {
    let mut out = [0; 9];

    for (window_y, out_row) in out.chunks_exact_mut(3).enumerate() {
        let start = (y + window_y) * padded_width + x;

        for (value, pixel) in out_row.iter_mut().zip(&padded[start..start + 3]) {
            *value = i32::from(*pixel);
        }
    }
    out
}

#[inline(always)]
#[allow(clippy::cast_precision_loss)]
pub(crate) fn sobel_pixel(padded: &[u8], padded_width: usize, x: usize, y: usize) -> u8 {
    let c = window(padded, padded_width, x, y);

    let gx = (c[2] + 2 * c[5] + c[8]) - (c[0] + 2 * c[3] + c[6]);
    let gy = (c[6] + 2 * c[7] + c[8]) - (c[0] + 2 * c[1] + c[2]);

    byte_from_f32(((gx * gx + gy * gy) as f32).sqrt())
}

pub(crate) fn sobel_padded_scalar(padded: &[u8], (width, height): (usize, usize), out: &mut [u8]) {
    let padded_width = width + 2;

    for (y, out_row) in out.chunks_exact_mut(width).take(height).enumerate() {
        for (x, out_pixel) in out_row.iter_mut().enumerate() {
            *out_pixel = sobel_pixel(padded, padded_width, x, y);
        }
    }
}

#[allow(unused_variables)]
pub(crate) fn sobel_padded(
    options: KernelOptions, padded: &[u8], dimensions: (usize, usize), out: &mut [u8]
) {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        #[cfg(feature = "sse41")]
        {
            use crate::sobel::sse41::sobel_padded_sse41;

            if options.use_sse41() {
                unsafe {
                    return sobel_padded_sse41(padded, dimensions, out);
                }
            }
        }
    }
    sobel_padded_scalar(padded, dimensions, out);
}

#[cfg(test)]
mod tests {
    use merle_core::color::PackedColor;
    use merle_core::component::Component;
    use merle_image::buffer::PixelBuffer;
    use merle_image::traits::OperationsTrait;

    use crate::sobel::Sobel;

    #[test]
    fn flat_has_no_edges() {
        let mut buffer = PixelBuffer::from_color(5, 5, PackedColor::GRAY).unwrap();
        Sobel::new(Component::Red, Component::Green)
            .execute(&mut buffer)
            .unwrap();

        assert!(buffer.plane(Component::Green).iter().all(|x| *x == 0));
        // only the destination channel changes
        assert!(buffer.plane(Component::Red).iter().all(|x| *x == 128));
    }

    #[test]
    fn vertical_edge() {
        let mut buffer = PixelBuffer::from_dimensions(4, 3).unwrap();
        for row in buffer.plane_mut(Component::Blue).chunks_exact_mut(4) {
            row.copy_from_slice(&[0, 0, 10, 10]);
        }
        Sobel::new(Component::Blue, Component::Blue)
            .execute(&mut buffer)
            .unwrap();

        // gx = 4 * 10 across the step, clamped borders keep the outer columns flat
        for row in buffer.plane(Component::Blue).chunks_exact(4) {
            assert_eq!(row, &[0, 40, 40, 0]);
        }
    }

    #[test]
    fn strong_edges_saturate() {
        let mut source = PixelBuffer::from_dimensions(3, 3).unwrap();
        source.plane_mut(Component::Alpha)[0] = 255;

        let mut buffer = PixelBuffer::from_dimensions(3, 3).unwrap();
        Sobel::with_source(&source, Component::Alpha, Component::Red)
            .execute(&mut buffer)
            .unwrap();

        // corner of the padded window sees the spike four times
        assert_eq!(buffer.plane(Component::Red)[0], 255);
        assert!(buffer.plane(Component::Alpha).iter().all(|x| *x == 0));
    }

    #[test]
    fn source_must_match_destination() {
        let source = PixelBuffer::from_color(4, 3, PackedColor::WHITE).unwrap();
        let mut buffer = PixelBuffer::from_color(3, 3, PackedColor::GRAY).unwrap();

        assert!(Sobel::with_source(&source, Component::Red, Component::Green)
            .execute(&mut buffer)
            .is_err());
        assert_eq!(buffer, PixelBuffer::from_color(3, 3, PackedColor::GRAY).unwrap());

        let mut wide = PixelBuffer::from_color(3, 4, PackedColor::GRAY).unwrap();
        assert!(Sobel::with_source(&source, Component::Red, Component::Red)
            .execute(&mut wide)
            .is_err());
        assert_eq!(wide, PixelBuffer::from_color(3, 4, PackedColor::GRAY).unwrap());
    }
}
