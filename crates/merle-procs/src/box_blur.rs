/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */


//! Box blur, the mean of a square window
use merle_image::buffer::PixelBuffer;
use merle_image::errors::ImageOperationsErrors;
use merle_image::traits::OperationsTrait;

use crate::convolve::Convolve;

/// Blur with uniform weights over a `(2*radius+1)` square window
#[derive(Copy, Clone, Debug)]
pub struct BoxBlur<'a> {
    radius: usize,
    source: Option<&'a PixelBuffer>
}

impl<'a> BoxBlur<'a> {
    /// Blur the buffer the operation is executed on
    #[must_use]
    pub fn new(radius: usize) -> BoxBlur<'a> {
        BoxBlur {
            radius,
            source: None
        }
    }

    /// Blur `source` into the buffer the operation is executed on
    #[must_use]
    pub fn with_source(source: &'a PixelBuffer, radius: usize) -> BoxBlur<'a> {
        BoxBlur {
            radius,
            source: Some(source)
        }
    }
}

/// Weights of a box kernel of the given radius
///
/// # Errors
/// If the kernel side overflows or the weights cannot be allocated
#[allow(clippy::cast_precision_loss)]
pub fn box_kernel(radius: usize) -> Result<(Vec<f32>, usize), ImageOperationsErrors> {
    let side = radius
        .checked_mul(2)
        .and_then(|x| x.checked_add(1))
        .ok_or(ImageOperationsErrors::GenericStr("Box blur radius too large"))?;
    let area = side
        .checked_mul(side)
        .ok_or(ImageOperationsErrors::GenericStr("Box blur radius too large"))?;

    let mut weights = Vec::new();
    weights
        .try_reserve_exact(area)
        .map_err(|_| ImageOperationsErrors::AllocationFailed(area.saturating_mul(4)))?;
    weights.resize(area, 1.0 / area as f32);

    Ok((weights, side))
}

impl<'a> OperationsTrait for BoxBlur<'a> {
    fn name(&self) -> &'static str {
        "Box blur"
    }

    fn execute_impl(&self, buffer: &mut PixelBuffer) -> Result<(), ImageOperationsErrors> {
        let (weights, side) = box_kernel(self.radius)?;

        let convolve = match self.source {
            Some(source) => Convolve::with_source(source, weights, side),
            None => Convolve::new(weights, side)
        };
        convolve.execute_impl(buffer)
    }
}
