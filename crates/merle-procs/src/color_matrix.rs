/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */


//! Apply a 4x4 matrix to every pixel
//!
//! `[r',g',b',a'] = M * [r,g,b,a]` with every channel first mapped to `[0,1]`,
//! results are saturated back to bytes.
//!
//! Each output row is evaluated as `((m0*r + m1*g) + m2*b) + m3*a`,
//! vector code keeps that order.
use merle_core::options::KernelOptions;
use merle_image::buffer::PixelBuffer;
use merle_image::errors::ImageOperationsErrors;
use merle_image::traits::OperationsTrait;

use crate::mathops::{byte_from_unit, unit_from_byte};

mod sse41;

/// A row major color matrix, row `i` produces channel `i`
pub type Matrix = [[f32; 4]; 4];

pub const IDENTITY_MATRIX: Matrix = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0]
];

pub const SEPIA_MATRIX: Matrix = [
    [0.393, 0.769, 0.189, 0.0],
    [0.349, 0.686, 0.168, 0.0],
    [0.272, 0.534, 0.131, 0.0],
    [0.0, 0.0, 0.0, 1.0]
];

/// Transform every pixel by a color matrix
#[derive(Copy, Clone, Debug)]
pub struct ColorMatrix {
    matrix: Matrix
}

impl ColorMatrix {
    #[must_use]
    pub fn new(matrix: Matrix) -> ColorMatrix {
        ColorMatrix { matrix }
    }

    pub const fn matrix(&self) -> &Matrix {
        &self.matrix
    }
}

impl OperationsTrait for ColorMatrix {
    fn name(&self) -> &'static str {
        "Color matrix"
    }

    fn execute_impl(&self, buffer: &mut PixelBuffer) -> Result<(), ImageOperationsErrors> {
        let options = buffer.options();
        color_matrix(options, buffer.planes_mut(), &self.matrix);
        Ok(())
    }
}

/// Give the image a warm brown tone
#[derive(Default, Copy, Clone)]
pub struct Sepia;

impl Sepia {
    #[must_use]
    pub fn new() -> Sepia {
        Sepia
    }
}

impl OperationsTrait for Sepia {
    fn name(&self) -> &'static str {
        "Sepia"
    }

    fn execute_impl(&self, buffer: &mut PixelBuffer) -> Result<(), ImageOperationsErrors> {
        let options = buffer.options();
        color_matrix(options, buffer.planes_mut(), &SEPIA_MATRIX);
        Ok(())
    }
}

#[inline(always)]
fn apply_row(row: &[f32; 4], r: f32, g: f32, b: f32, a: f32) -> u8 {
    byte_from_unit(((row[0] * r + row[1] * g) + row[2] * b) + row[3] * a)
}

pub(crate) fn color_matrix_scalar([r, g, b, a]: [&mut [u8]; 4], matrix: &Matrix) {
    for (((r, g), b), a) in r
        .iter_mut()
        .zip(g.iter_mut())
        .zip(b.iter_mut())
        .zip(a.iter_mut())
    {
        let (ur, ug, ub, ua) = (
            unit_from_byte(*r),
            unit_from_byte(*g),
            unit_from_byte(*b),
            unit_from_byte(*a)
        );
        *r = apply_row(&matrix[0], ur, ug, ub, ua);
        *g = apply_row(&matrix[1], ur, ug, ub, ua);
        *b = apply_row(&matrix[2], ur, ug, ub, ua);
        *a = apply_row(&matrix[3], ur, ug, ub, ua);
    }
}

/// Apply `matrix` to four equally sized planes, in red, green, blue, alpha order
#[allow(unused_variables)]
pub fn color_matrix(options: KernelOptions, planes: [&mut [u8]; 4], matrix: &Matrix) {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        #[cfg(feature = "sse41")]
        {
            use crate::color_matrix::sse41::color_matrix_sse41;

            if options.use_sse41() {
                unsafe {
                    return color_matrix_sse41(planes, matrix);
                }
            }
        }
    }
    color_matrix_scalar(planes, matrix);
}
