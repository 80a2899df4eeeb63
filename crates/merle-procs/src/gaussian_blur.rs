/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */


//! Gaussian blur
use merle_image::buffer::PixelBuffer;
use merle_image::errors::ImageOperationsErrors;
use merle_image::traits::OperationsTrait;

use crate::convolve::Convolve;

/// Blur with weights proportional to `exp(-(x²+y²)/(2σ²))` over a
/// `(2*radius+1)` square window, normalized to sum to one.
///
/// A sigma that is not a positive finite number gives a kernel with all
/// weight on the center, which leaves the image unchanged.
#[derive(Copy, Clone, Debug)]
pub struct GaussianBlur<'a> {
    radius: usize,
    sigma:  f32,
    source: Option<&'a PixelBuffer>
}

impl<'a> GaussianBlur<'a> {
    #[must_use]
    pub fn new(radius: usize, sigma: f32) -> GaussianBlur<'a> {
        GaussianBlur {
            radius,
            sigma,
            source: None
        }
    }

    /// Blur `source` into the buffer the operation is executed on
    #[must_use]
    pub fn with_source(source: &'a PixelBuffer, radius: usize, sigma: f32) -> GaussianBlur<'a> {
        GaussianBlur {
            radius,
            sigma,
            source: Some(source)
        }
    }
}

/// Create a normalized 2D gaussian kernel, returning the weights and the side
///
/// # Errors
/// If the kernel side overflows
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn gaussian_kernel(radius: usize, sigma: f32) -> Result<(Vec<f32>, usize), ImageOperationsErrors> {
    let side = radius
        .checked_mul(2)
        .and_then(|x| x.checked_add(1))
        .ok_or(ImageOperationsErrors::GenericStr("Gaussian blur radius too large"))?;
    let area = side
        .checked_mul(side)
        .ok_or(ImageOperationsErrors::GenericStr("Gaussian blur radius too large"))?;

    let mut weights = Vec::new();
    weights
        .try_reserve_exact(area)
        .map_err(|_| ImageOperationsErrors::AllocationFailed(area.saturating_mul(4)))?;

    if !(sigma.is_finite() && sigma > 0.0) {
        weights.resize(area, 0.0);
        weights[area / 2] = 1.0;
        return Ok((weights, side));
    }
    let two_sigma_squared = 2.0 * f64::from(sigma) * f64::from(sigma);
    let radius = radius as f64;

    let mut raw = Vec::new();
    raw.try_reserve_exact(area)
        .map_err(|_| ImageOperationsErrors::AllocationFailed(area.saturating_mul(8)))?;
    let mut sum = 0.0;

    for y in 0..side {
        let dy = y as f64 - radius;
        for x in 0..side {
            let dx = x as f64 - radius;
            let weight = (-(dx * dx + dy * dy) / two_sigma_squared).exp();

            sum += weight;
            raw.push(weight);
        }
    }
    weights.extend(raw.iter().map(|x| (x / sum) as f32));

    Ok((weights, side))
}

impl<'a> OperationsTrait for GaussianBlur<'a> {
    fn name(&self) -> &'static str {
        "Gaussian blur"
    }

    fn execute_impl(&self, buffer: &mut PixelBuffer) -> Result<(), ImageOperationsErrors> {
        let (weights, side) = gaussian_kernel(self.radius, self.sigma)?;

        let convolve = match self.source {
            Some(source) => Convolve::with_source(source, weights, side),
            None => Convolve::new(weights, side)
        };
        convolve.execute_impl(buffer)
    }
}

#[cfg(test)]
mod tests {
    use merle_core::color::PackedColor;
    use merle_image::buffer::PixelBuffer;
    use merle_image::traits::OperationsTrait;

    use crate::gaussian_blur::{gaussian_kernel, GaussianBlur};

    #[test]
    fn kernel_is_normalized_and_symmetric() {
        let (weights, side) = gaussian_kernel(3, 1.4).unwrap();
        assert_eq!(side, 7);

        let sum: f32 = weights.iter().sum();
        assert!((sum - 1.0).abs() < 1e-5);

        // center is the largest, corners are equal
        let center = weights[24];
        assert!(weights.iter().all(|x| *x <= center));
        assert_eq!(weights[0], weights[48]);
        assert_eq!(weights[6], weights[42]);
    }

    #[test]
    fn zero_sigma_is_identity() {
        let mut source = PixelBuffer::from_color(4, 4, PackedColor::ORANGE).unwrap();
        source.set_pixel(1, 2, PackedColor::ROYAL_BLUE).unwrap();

        let mut buffer = PixelBuffer::from_dimensions(4, 4).unwrap();
        GaussianBlur::with_source(&source, 2, 0.0)
            .execute(&mut buffer)
            .unwrap();

        assert_eq!(buffer, source);
    }
}
