/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */


//! Time parameterized transitions between two buffers
//!
//! Both transitions read two equally sized buffers and write into the buffer
//! they are executed on, which must have the same dimensions.
use merle_core::component::Component;
use merle_core::options::KernelOptions;
use merle_image::buffer::PixelBuffer;
use merle_image::errors::ImageOperationsErrors;
use merle_image::traits::OperationsTrait;

use crate::mathops::{byte_from_unit, unit_from_byte};
use crate::utils::check_dimensions;

mod sse41;

/// Cross fade, `out = from * (1 - t) + to * t` on all four channels
///
/// `t` outside `[0,1]` extrapolates, results saturate.
#[derive(Copy, Clone, Debug)]
pub struct FadeTransition<'a> {
    from: &'a PixelBuffer,
    to:   &'a PixelBuffer,
    t:    f32
}

impl<'a> FadeTransition<'a> {
    #[must_use]
    pub fn new(from: &'a PixelBuffer, to: &'a PixelBuffer, t: f32) -> FadeTransition<'a> {
        FadeTransition { from, to, t }
    }
}

impl<'a> OperationsTrait for FadeTransition<'a> {
    fn name(&self) -> &'static str {
        "Fade transition"
    }

    fn execute_impl(&self, buffer: &mut PixelBuffer) -> Result<(), ImageOperationsErrors> {
        check_dimensions(self.from, self.to)?;
        check_dimensions(self.from, buffer)?;

        let options = buffer.options();

        for component in Component::ALL {
            fade(
                options,
                self.from.plane(component),
                self.to.plane(component),
                self.t,
                buffer.plane_mut(component)
            );
        }
        Ok(())
    }
}

pub(crate) fn fade_scalar(from: &[u8], to: &[u8], t: f32, out: &mut [u8]) {
    let inverse_t = 1.0 - t;

    for ((from, to), out) in from.iter().zip(to).zip(out.iter_mut()) {
        *out = byte_from_unit(unit_from_byte(*from) * inverse_t + unit_from_byte(*to) * t);
    }
}

/// Blend two planes into `out`
#[allow(unused_variables)]
pub fn fade(options: KernelOptions, from: &[u8], to: &[u8], t: f32, out: &mut [u8]) {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        #[cfg(feature = "sse41")]
        {
            use crate::transitions::sse41::fade_sse41;

            if options.use_sse41() {
                unsafe {
                    return fade_sse41(from, to, t, out);
                }
            }
        }
    }
    fade_scalar(from, to, t, out);
}

/// Axis a swipe travels along
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum SwipeDirection {
    /// Columns left of the edge show the target
    #[default]
    Horizontal,
    /// Rows above the edge show the target
    Vertical
}

/// Hard edged wipe from one buffer to another
///
/// For [`SwipeDirection::Horizontal`] columns `x < t * width` take `to` and the
/// rest take `from`, rows and height for [`SwipeDirection::Vertical`].
#[derive(Copy, Clone, Debug)]
pub struct SwipeTransition<'a> {
    from:      &'a PixelBuffer,
    to:        &'a PixelBuffer,
    t:         f32,
    direction: SwipeDirection
}

impl<'a> SwipeTransition<'a> {
    #[must_use]
    pub fn new(
        from: &'a PixelBuffer, to: &'a PixelBuffer, t: f32, direction: SwipeDirection
    ) -> SwipeTransition<'a> {
        SwipeTransition {
            from,
            to,
            t,
            direction
        }
    }
}

/// Number of leading columns or rows taking the target, `ceil(t * extent)`
/// clamped to `[0, extent]`
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn swipe_split(t: f32, extent: usize) -> usize {
    let split = (f64::from(t) * extent as f64).ceil();

    if split > 0.0 {
        (split as usize).min(extent)
    } else {
        // negative and NaN
        0
    }
}

impl<'a> OperationsTrait for SwipeTransition<'a> {
    fn name(&self) -> &'static str {
        "Swipe transition"
    }

    fn execute_impl(&self, buffer: &mut PixelBuffer) -> Result<(), ImageOperationsErrors> {
        check_dimensions(self.from, self.to)?;
        check_dimensions(self.from, buffer)?;

        if buffer.is_empty() {
            return Ok(());
        }
        let (width, height) = buffer.dimensions();
        let split = match self.direction {
            SwipeDirection::Horizontal => swipe_split(self.t, width),
            SwipeDirection::Vertical => swipe_split(self.t, height) * width
        };

        for component in Component::ALL {
            let from = self.from.plane(component);
            let to = self.to.plane(component);
            let out = buffer.plane_mut(component);

            match self.direction {
                SwipeDirection::Horizontal => {
                    for ((out, from), to) in out
                        .chunks_exact_mut(width)
                        .zip(from.chunks_exact(width))
                        .zip(to.chunks_exact(width))
                    {
                        out[..split].copy_from_slice(&to[..split]);
                        out[split..].copy_from_slice(&from[split..]);
                    }
                }
                SwipeDirection::Vertical => {
                    // rows are contiguous, the split is a single offset
                    out[..split].copy_from_slice(&to[..split]);
                    out[split..].copy_from_slice(&from[split..]);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use merle_core::color::PackedColor;
    use merle_image::buffer::PixelBuffer;
    use merle_image::traits::OperationsTrait;

    use crate::transitions::{swipe_split, FadeTransition, SwipeDirection, SwipeTransition};

    #[test]
    fn fade_endpoints_are_exact() {
        let from = PixelBuffer::from_color(7, 3, PackedColor::new(1, 99, 200, 255)).unwrap();
        let to = PixelBuffer::from_color(7, 3, PackedColor::new(254, 3, 77, 0)).unwrap();
        let mut buffer = PixelBuffer::from_dimensions(7, 3).unwrap();

        FadeTransition::new(&from, &to, 0.0)
            .execute(&mut buffer)
            .unwrap();
        assert_eq!(buffer, from);

        FadeTransition::new(&from, &to, 1.0)
            .execute(&mut buffer)
            .unwrap();
        assert_eq!(buffer, to);
    }

    #[test]
    fn fade_midpoint() {
        let from = PixelBuffer::from_color(2, 2, PackedColor::BLACK).unwrap();
        let to = PixelBuffer::from_color(2, 2, PackedColor::WHITE).unwrap();
        let mut buffer = PixelBuffer::from_dimensions(2, 2).unwrap();

        FadeTransition::new(&from, &to, 0.5)
            .execute(&mut buffer)
            .unwrap();
        assert_eq!(buffer.get_pixel(0, 0), Some(PackedColor::gray(128)));
    }

    #[test]
    fn fade_rejects_mismatched_sizes() {
        let from = PixelBuffer::from_color(2, 2, PackedColor::BLACK).unwrap();
        let to = PixelBuffer::from_color(2, 3, PackedColor::WHITE).unwrap();
        let mut buffer = PixelBuffer::from_color(2, 2, PackedColor::RED).unwrap();

        assert!(FadeTransition::new(&from, &to, 0.5)
            .execute(&mut buffer)
            .is_err());
        assert!(FadeTransition::new(&from, &from, 0.5)
            .execute(&mut PixelBuffer::from_dimensions(1, 1).unwrap())
            .is_err());
        assert_eq!(buffer.get_pixel(1, 1), Some(PackedColor::RED));
    }

    #[test]
    fn split_rounds_up_and_clamps() {
        assert_eq!(swipe_split(0.0, 10), 0);
        assert_eq!(swipe_split(0.01, 10), 1);
        assert_eq!(swipe_split(0.5, 10), 5);
        assert_eq!(swipe_split(1.0, 10), 10);
        assert_eq!(swipe_split(3.0, 10), 10);
        assert_eq!(swipe_split(-1.0, 10), 0);
        assert_eq!(swipe_split(f32::NAN, 10), 0);
    }

    #[test]
    fn swipe_endpoints() {
        let from = PixelBuffer::from_color(5, 4, PackedColor::RED).unwrap();
        let to = PixelBuffer::from_color(5, 4, PackedColor::GREEN).unwrap();

        for direction in [SwipeDirection::Horizontal, SwipeDirection::Vertical] {
            let mut buffer = PixelBuffer::from_dimensions(5, 4).unwrap();

            SwipeTransition::new(&from, &to, 0.0, direction)
                .execute(&mut buffer)
                .unwrap();
            assert_eq!(buffer, from);

            SwipeTransition::new(&from, &to, 1.0, direction)
                .execute(&mut buffer)
                .unwrap();
            assert_eq!(buffer, to);
        }
    }

    #[test]
    fn swipe_halfway() {
        let from = PixelBuffer::from_color(4, 2, PackedColor::RED).unwrap();
        let to = PixelBuffer::from_color(4, 2, PackedColor::GREEN).unwrap();
        let mut buffer = PixelBuffer::from_dimensions(4, 2).unwrap();

        SwipeTransition::new(&from, &to, 0.5, SwipeDirection::Horizontal)
            .execute(&mut buffer)
            .unwrap();
        assert_eq!(buffer.get_pixel(1, 1), Some(PackedColor::GREEN));
        assert_eq!(buffer.get_pixel(2, 1), Some(PackedColor::RED));

        SwipeTransition::new(&from, &to, 0.5, SwipeDirection::Vertical)
            .execute(&mut buffer)
            .unwrap();
        assert_eq!(buffer.get_pixel(3, 0), Some(PackedColor::GREEN));
        assert_eq!(buffer.get_pixel(3, 1), Some(PackedColor::RED));
    }

    #[test]
    fn swipe_rejects_mismatched_sizes() {
        let from = PixelBuffer::from_color(3, 2, PackedColor::RED).unwrap();
        let to = PixelBuffer::from_color(2, 3, PackedColor::GREEN).unwrap();
        let mut buffer = PixelBuffer::from_color(3, 2, PackedColor::BLUE).unwrap();

        for direction in [SwipeDirection::Horizontal, SwipeDirection::Vertical] {
            assert!(SwipeTransition::new(&from, &to, 0.5, direction)
                .execute(&mut buffer)
                .is_err());
            assert!(SwipeTransition::new(&to, &from, 0.5, direction)
                .execute(&mut buffer)
                .is_err());

            // matching pair, wrong destination
            let mut small = PixelBuffer::from_color(2, 2, PackedColor::BLUE).unwrap();
            assert!(SwipeTransition::new(&from, &from, 1.0, direction)
                .execute(&mut small)
                .is_err());
            assert_eq!(small, PixelBuffer::from_color(2, 2, PackedColor::BLUE).unwrap());
        }
        assert_eq!(buffer, PixelBuffer::from_color(3, 2, PackedColor::BLUE).unwrap());
    }
}
