/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */


//! Copy one buffer onto another
//!
//! The source is placed on the destination either at an explicit, possibly
//! negative, offset or at a [`Gravity`] position. Pixels falling outside the
//! destination are clipped, a source that does not overlap the destination
//! at all leaves it untouched.
//!
//! Pixels are replaced, no blending happens.
use merle_core::component::Component;
use merle_core::geometry::{Point, Rect};
use merle_core::log::trace;
use merle_image::buffer::PixelBuffer;
use merle_image::errors::ImageOperationsErrors;
use merle_image::traits::OperationsTrait;

use crate::utils::{calculate_gravity, Gravity};

/// Where the source lands on the destination
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Placement {
    /// Top left corner of the source at this destination pixel
    Offset(Point),
    /// Position relative to the destination edges
    Gravity(Gravity)
}

/// Replace a region of the destination with a source buffer
#[derive(Copy, Clone, Debug)]
pub struct Composite<'a> {
    source:    &'a PixelBuffer,
    placement: Placement
}

impl<'a> Composite<'a> {
    /// Place the top left of `source` at `offset`
    #[must_use]
    pub fn new(source: &'a PixelBuffer, offset: Point) -> Composite<'a> {
        Composite {
            source,
            placement: Placement::Offset(offset)
        }
    }

    /// Place `source` according to `gravity`
    #[must_use]
    pub fn with_gravity(source: &'a PixelBuffer, gravity: Gravity) -> Composite<'a> {
        Composite {
            source,
            placement: Placement::Gravity(gravity)
        }
    }

    fn offset(&self, destination: &PixelBuffer) -> Point {
        match self.placement {
            Placement::Offset(offset) => offset,
            Placement::Gravity(gravity) => {
                let (x, y) =
                    calculate_gravity(self.source.dimensions(), destination.dimensions(), gravity);
                Point::new(x, y)
            }
        }
    }
}

impl<'a> OperationsTrait for Composite<'a> {
    fn name(&self) -> &'static str {
        "Composite"
    }

    #[allow(clippy::cast_sign_loss)]
    fn execute_impl(&self, buffer: &mut PixelBuffer) -> Result<(), ImageOperationsErrors> {
        let offset = self.offset(buffer);

        let destination_rect = Rect::from_size(buffer.width(), buffer.height());
        let source_rect = Rect::new(offset, self.source.width(), self.source.height());

        let Some(overlap) = destination_rect.intersection(&source_rect) else {
            trace!("Composite source does not overlap the destination, nothing to do");
            return Ok(());
        };
        // overlap lies inside both rectangles, all of these are non negative
        let dst_x = overlap.origin.x as usize;
        let dst_y = overlap.origin.y as usize;
        let src_x = (overlap.origin.x - offset.x) as usize;
        let src_y = (overlap.origin.y - offset.y) as usize;

        let (dst_stride, src_stride) = (buffer.stride(), self.source.stride());

        for component in Component::ALL {
            let src_plane = self.source.plane(component);
            let dst_plane = buffer.plane_mut(component);

            for row in 0..overlap.height {
                let src_start = (src_y + row) * src_stride + src_x;
                let dst_start = (dst_y + row) * dst_stride + dst_x;

                dst_plane[dst_start..dst_start + overlap.width]
                    .copy_from_slice(&src_plane[src_start..src_start + overlap.width]);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use merle_core::color::PackedColor;
    use merle_core::geometry::Point;
    use merle_image::buffer::PixelBuffer;
    use merle_image::traits::OperationsTrait;

    use crate::composite::Composite;
    use crate::utils::Gravity;

    #[test]
    fn partial_overlap_is_clipped() {
        let source = PixelBuffer::from_color(3, 3, PackedColor::RED).unwrap();
        let mut buffer = PixelBuffer::from_color(4, 4, PackedColor::BLUE).unwrap();

        Composite::new(&source, Point::new(-1, 2))
            .execute(&mut buffer)
            .unwrap();

        for y in 0..4 {
            for x in 0..4 {
                let expected = if x < 2 && y >= 2 {
                    PackedColor::RED
                } else {
                    PackedColor::BLUE
                };
                assert_eq!(buffer.get_pixel(x, y), Some(expected), "({x},{y})");
            }
        }
    }

    #[test]
    fn source_position_is_respected() {
        let mut source = PixelBuffer::from_color(2, 2, PackedColor::BLACK).unwrap();
        source.set_pixel(1, 1, PackedColor::WHITE).unwrap();
        let mut buffer = PixelBuffer::from_color(3, 3, PackedColor::GRAY).unwrap();

        Composite::new(&source, Point::new(-1, -1))
            .execute(&mut buffer)
            .unwrap();

        assert_eq!(buffer.get_pixel(0, 0), Some(PackedColor::WHITE));
        assert_eq!(buffer.get_pixel(1, 0), Some(PackedColor::GRAY));
    }

    #[test]
    fn disjoint_is_noop() {
        let source = PixelBuffer::from_color(3, 3, PackedColor::RED).unwrap();
        let mut buffer = PixelBuffer::from_color(4, 4, PackedColor::BLUE).unwrap();
        let copy = buffer.try_clone().unwrap();

        Composite::new(&source, Point::new(4, 0))
            .execute(&mut buffer)
            .unwrap();
        Composite::new(&source, Point::new(-3, -3))
            .execute(&mut buffer)
            .unwrap();

        assert_eq!(buffer, copy);
    }

    #[test]
    fn gravity_centers() {
        let source = PixelBuffer::from_color(2, 2, PackedColor::YELLOW).unwrap();
        let mut buffer = PixelBuffer::from_color(4, 4, PackedColor::BLACK).unwrap();

        Composite::with_gravity(&source, Gravity::Center)
            .execute(&mut buffer)
            .unwrap();

        assert_eq!(buffer.get_pixel(1, 1), Some(PackedColor::YELLOW));
        assert_eq!(buffer.get_pixel(2, 2), Some(PackedColor::YELLOW));
        assert_eq!(buffer.get_pixel(3, 3), Some(PackedColor::BLACK));
        assert_eq!(buffer.get_pixel(0, 0), Some(PackedColor::BLACK));
    }
}
