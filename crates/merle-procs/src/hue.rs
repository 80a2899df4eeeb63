/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */


use merle_core::geometry::Radians;
use merle_image::buffer::PixelBuffer;
use merle_image::errors::ImageOperationsErrors;
use merle_image::traits::OperationsTrait;

use crate::color_matrix::{color_matrix, Matrix};

/// Rotate the hue of the image while keeping luminance
///
/// This is the `hueRotate` matrix of the W3C filter effects,
/// alpha passes through unchanged.
#[derive(Copy, Clone, Debug)]
pub struct Hue {
    angle: Radians
}

impl Hue {
    /// Create a new hue rotation
    ///
    /// # Arguments
    /// - angle: Rotation, either [`Radians`] or [`Degrees`](merle_core::geometry::Degrees)
    #[must_use]
    pub fn new(angle: impl Into<Radians>) -> Hue {
        Hue {
            angle: angle.into()
        }
    }
}

/// Build the rotation matrix for `angle`
pub fn hue_matrix(angle: Radians) -> Matrix {
    let (sin, cos) = angle.0.sin_cos();

    [
        [
            0.213 + cos * 0.787 - sin * 0.213,
            0.715 - cos * 0.715 - sin * 0.715,
            0.072 - cos * 0.072 + sin * 0.928,
            0.0
        ],
        [
            0.213 - cos * 0.213 + sin * 0.143,
            0.715 + cos * 0.285 + sin * 0.140,
            0.072 - cos * 0.072 - sin * 0.283,
            0.0
        ],
        [
            0.213 - cos * 0.213 - sin * 0.787,
            0.715 - cos * 0.715 + sin * 0.715,
            0.072 + cos * 0.928 + sin * 0.072,
            0.0
        ],
        [0.0, 0.0, 0.0, 1.0]
    ]
}

impl OperationsTrait for Hue {
    fn name(&self) -> &'static str {
        "Hue"
    }

    fn execute_impl(&self, buffer: &mut PixelBuffer) -> Result<(), ImageOperationsErrors> {
        let matrix = hue_matrix(self.angle);
        let options = buffer.options();

        color_matrix(options, buffer.planes_mut(), &matrix);
        Ok(())
    }
}
