/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Integer geometry and angle wrappers

use core::f32::consts::PI;

/// A signed pixel position, may lie outside of a buffer
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Point {
    pub x: isize,
    pub y: isize
}

impl Point {
    pub const fn new(x: isize, y: isize) -> Point {
        Point { x, y }
    }
}

/// An axis aligned rectangle with a signed origin
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Rect {
    pub origin: Point,
    pub width:  usize,
    pub height: usize
}

impl Rect {
    pub const fn new(origin: Point, width: usize, height: usize) -> Rect {
        Rect {
            origin,
            width,
            height
        }
    }

    /// A rectangle at the origin
    pub const fn from_size(width: usize, height: usize) -> Rect {
        Rect::new(Point::new(0, 0), width, height)
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[allow(clippy::cast_possible_wrap)]
    fn right(&self) -> isize {
        self.origin.x.saturating_add(self.width as isize)
    }

    #[allow(clippy::cast_possible_wrap)]
    fn bottom(&self) -> isize {
        self.origin.y.saturating_add(self.height as isize)
    }

    /// The overlapping region of two rectangles, or `None` if they
    /// do not overlap.
    #[allow(clippy::cast_sign_loss)]
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.origin.x.max(other.origin.x);
        let top = self.origin.y.max(other.origin.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right <= left || bottom <= top {
            return None;
        }
        Some(Rect::new(
            Point::new(left, top),
            (right - left) as usize,
            (bottom - top) as usize
        ))
    }
}

/// An angle in radians
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Radians(pub f32);

/// An angle in degrees
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Degrees(pub f32);

impl From<Degrees> for Radians {
    /// Degrees are first reduced into `(-360, 360)`
    fn from(value: Degrees) -> Self {
        Radians((value.0 % 360.0) * PI / 180.0)
    }
}

impl From<Radians> for Degrees {
    fn from(value: Radians) -> Self {
        Degrees(value.0 * 180.0 / PI)
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry::{Degrees, Point, Radians, Rect};

    #[test]
    fn intersection_clips() {
        let buffer = Rect::from_size(10, 10);
        let placed = Rect::new(Point::new(-3, 8), 5, 5);

        let overlap = buffer.intersection(&placed).unwrap();
        assert_eq!(overlap, Rect::new(Point::new(0, 8), 2, 2));
    }

    #[test]
    fn disjoint_rects_do_not_intersect() {
        let a = Rect::from_size(4, 4);
        let b = Rect::new(Point::new(4, 0), 4, 4);

        assert!(a.intersection(&b).is_none());
        assert!(a.intersection(&Rect::from_size(0, 3)).is_none());
    }

    #[test]
    fn degrees_wrap() {
        let a = Radians::from(Degrees(450.0));
        let b = Radians::from(Degrees(90.0));
        assert!((a.0 - b.0).abs() < 1e-6);
    }
}
