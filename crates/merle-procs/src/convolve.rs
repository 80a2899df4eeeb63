/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */


//! 2D convolution on planes
//!
//! Kernels are square with an odd side, weights are in row major order and
//! are applied as given (no flipping), so a kernel is read as a correlation
//! window centered on the output pixel.
//!
//! Intermediate sums are carried in `f32` byte units, starting from zero and
//! adding `pixel * weight` in row major window order. Borders are clamped to
//! the nearest edge pixel.
//!
//! All four channels, alpha included, are filtered.
use merle_core::component::Component;
use merle_core::log::trace;
use merle_core::options::KernelOptions;
use merle_image::buffer::PixelBuffer;
use merle_image::errors::ImageOperationsErrors;
use merle_image::traits::OperationsTrait;

use crate::mathops::byte_from_f32;
use crate::pad::{allocate_padded, replicate_into};
use crate::utils::check_dimensions;

mod sse41;

/// Convolve a buffer with a square kernel
///
/// # Example
/// Sharpen a buffer in place
/// ```
/// use merle_core::color::PackedColor;
/// use merle_image::buffer::PixelBuffer;
/// use merle_image::traits::OperationsTrait;
/// use merle_procs::convolve::Convolve;
///
/// let mut buffer = PixelBuffer::from_color(10, 10, PackedColor::GRAY).unwrap();
///
/// let weights = vec![0.0, -1.0, 0.0,
///                   -1.0,  5.0, -1.0,
///                    0.0, -1.0, 0.0];
///
/// Convolve::new(weights, 3).execute(&mut buffer).unwrap();
/// // a flat image stays flat
/// assert_eq!(buffer.get_pixel(0, 0), Some(PackedColor::GRAY));
/// ```
#[derive(Clone, Debug)]
pub struct Convolve<'a> {
    weights: Vec<f32>,
    side:    usize,
    source:  Option<&'a PixelBuffer>
}

impl<'a> Convolve<'a> {
    /// Create a convolution that filters the buffer it is executed on
    ///
    /// # Arguments
    /// - weights: `side*side` weights, row major
    /// - side: Side of the kernel, must be odd
    #[must_use]
    pub fn new(weights: Vec<f32>, side: usize) -> Convolve<'a> {
        Convolve {
            weights,
            side,
            source: None
        }
    }

    /// Create a convolution that reads `source` and writes into the
    /// buffer it is executed on.
    ///
    /// Both buffers must have the same dimensions
    #[must_use]
    pub fn with_source(source: &'a PixelBuffer, weights: Vec<f32>, side: usize) -> Convolve<'a> {
        Convolve {
            weights,
            side,
            source: Some(source)
        }
    }

    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    pub const fn side(&self) -> usize {
        self.side
    }
}

/// Ensure a kernel is square with an odd side
pub(crate) fn validate_kernel(weights: &[f32], side: usize) -> Result<(), ImageOperationsErrors> {
    if side % 2 == 0 {
        return Err(ImageOperationsErrors::InvalidKernel(format!(
            "Kernel side must be odd, found {side}"
        )));
    }
    if side.checked_mul(side) != Some(weights.len()) {
        return Err(ImageOperationsErrors::InvalidKernel(format!(
            "A kernel of side {side} needs {} weights, found {}",
            side.saturating_mul(side),
            weights.len()
        )));
    }
    Ok(())
}

impl<'a> OperationsTrait for Convolve<'a> {
    fn name(&self) -> &'static str {
        "2D convolution"
    }

    fn execute_impl(&self, buffer: &mut PixelBuffer) -> Result<(), ImageOperationsErrors> {
        validate_kernel(&self.weights, self.side)?;

        if let Some(source) = self.source {
            check_dimensions(buffer, source)?;
        }
        if buffer.is_empty() {
            return Ok(());
        }
        let (width, height) = buffer.dimensions();
        let radius = self.side / 2;
        let options = buffer.options();

        // one staging plane, reused for every channel
        let mut padded = allocate_padded(width, height, radius)?;

        trace!("Convolving with a {0}x{0} kernel", self.side);

        for component in Component::ALL {
            let plane = match self.source {
                Some(source) => source.plane(component),
                None => buffer.plane(component)
            };
            replicate_into(plane, width, height, radius, &mut padded);

            convolve_padded(
                options,
                &padded,
                (width, height),
                &self.weights,
                self.side,
                buffer.plane_mut(component)
            );
        }
        Ok(())
    }
}

#[inline(always)]
pub(crate) fn convolve_pixel(
    padded: &[u8], padded_width: usize, x: usize, y: usize, weights: &[f32], side: usize
) -> u8 {
    let mut sum = 0.0_f32;

    for (window_y, weight_row) in weights.chunks_exact(side).enumerate() {
        let start = (y + window_y) * padded_width + x;
        let window_row = &padded[start..start + side];

        for (pixel, weight) in window_row.iter().zip(weight_row) {
            sum += f32::from(*pixel) * weight;
        }
    }
    byte_from_f32(sum)
}

pub(crate) fn convolve_padded_scalar(
    padded: &[u8], (width, height): (usize, usize), weights: &[f32], side: usize, out: &mut [u8]
) {
    let padded_width = width + side - 1;

    for (y, out_row) in out.chunks_exact_mut(width).take(height).enumerate() {
        for (x, out_pixel) in out_row.iter_mut().enumerate() {
            *out_pixel = convolve_pixel(padded, padded_width, x, y, weights, side);
        }
    }
}

/// Convolve a staged, border replicated plane into `out`
///
/// `padded` is `out` grown by `side/2` on every side
#[allow(unused_variables)]
pub(crate) fn convolve_padded(
    options: KernelOptions, padded: &[u8], dimensions: (usize, usize), weights: &[f32],
    side: usize, out: &mut [u8]
) {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        #[cfg(feature = "sse41")]
        {
            use crate::convolve::sse41::convolve_padded_sse41;

            if options.use_sse41() {
                unsafe {
                    return convolve_padded_sse41(padded, dimensions, weights, side, out);
                }
            }
        }
    }
    convolve_padded_scalar(padded, dimensions, weights, side, out);
}

#[cfg(test)]
mod tests {
    use merle_core::color::PackedColor;
    use merle_core::component::Component;
    use merle_image::buffer::PixelBuffer;
    use merle_image::errors::{ImageErrors, ImageOperationsErrors};
    use merle_image::traits::OperationsTrait;

    use crate::convolve::Convolve;

    #[test]
    fn one_by_one_identity() {
        let mut source = PixelBuffer::from_color(5, 4, PackedColor::CORNFLOWER_BLUE).unwrap();
        source.set_pixel(2, 3, PackedColor::new(1, 2, 3, 4)).unwrap();

        let mut buffer = PixelBuffer::from_dimensions(5, 4).unwrap();
        Convolve::with_source(&source, vec![1.0], 1)
            .execute(&mut buffer)
            .unwrap();

        assert_eq!(buffer, source);
    }

    #[test]
    fn borders_clamp_to_edge() {
        let mut buffer = PixelBuffer::from_dimensions(3, 1).unwrap();
        buffer
            .plane_mut(Component::Red)
            .copy_from_slice(&[10, 20, 30]);

        // every output takes its left neighbour
        #[rustfmt::skip]
        let weights = vec![
            0.0, 0.0, 0.0,
            1.0, 0.0, 0.0,
            0.0, 0.0, 0.0
        ];
        Convolve::new(weights, 3).execute(&mut buffer).unwrap();

        assert_eq!(buffer.plane(Component::Red), &[10, 10, 20]);
    }

    #[test]
    fn bad_kernels_are_rejected() {
        let color = PackedColor::new(1, 2, 3, 4);
        let mut buffer = PixelBuffer::from_color(4, 4, color).unwrap();

        let even = Convolve::new(vec![0.25; 4], 2).execute(&mut buffer);
        let short = Convolve::new(vec![1.0; 8], 3).execute(&mut buffer);

        for result in [even, short] {
            assert!(matches!(
                result,
                Err(ImageErrors::OperationsError(
                    ImageOperationsErrors::InvalidKernel(_)
                ))
            ));
        }
        assert_eq!(buffer.get_pixel(3, 3), Some(color));
    }

    #[test]
    fn mismatched_source_is_rejected() {
        let source = PixelBuffer::from_color(4, 5, PackedColor::WHITE).unwrap();
        let mut buffer = PixelBuffer::from_color(5, 4, PackedColor::BLACK).unwrap();

        let result = Convolve::with_source(&source, vec![1.0], 1).execute(&mut buffer);

        assert!(result.is_err());
        assert_eq!(buffer.get_pixel(0, 0), Some(PackedColor::BLACK));
    }
}
