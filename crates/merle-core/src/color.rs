/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Packed pixel colors
//!
//! This is the interleaved representation used at the edges of the engine,
//! for single pixel access and as the result of reductions.

use crate::component::Component;
use crate::utils::byte_from_unit;

/// A single RGBA pixel, one byte per channel, in memory order red, green, blue, alpha
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct PackedColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8
}

impl PackedColor {
    pub const WHITE: PackedColor = PackedColor::new(255, 255, 255, 255);
    pub const BLACK: PackedColor = PackedColor::new(0, 0, 0, 255);
    pub const TRANSPARENT_BLACK: PackedColor = PackedColor::new(0, 0, 0, 0);
    pub const RED: PackedColor = PackedColor::new(255, 0, 0, 255);
    pub const GREEN: PackedColor = PackedColor::new(0, 255, 0, 255);
    pub const BLUE: PackedColor = PackedColor::new(0, 0, 255, 255);
    pub const YELLOW: PackedColor = PackedColor::new(255, 255, 0, 255);
    pub const CYAN: PackedColor = PackedColor::new(0, 255, 255, 255);
    pub const FUCHSIA: PackedColor = PackedColor::new(255, 0, 255, 255);
    pub const GRAY: PackedColor = PackedColor::new(128, 128, 128, 255);
    pub const ORANGE: PackedColor = PackedColor::new(255, 165, 0, 255);
    pub const PURPLE: PackedColor = PackedColor::new(128, 0, 128, 255);
    pub const ROYAL_BLUE: PackedColor = PackedColor::new(65, 105, 225, 255);
    pub const CORNFLOWER_BLUE: PackedColor = PackedColor::new(100, 149, 237, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> PackedColor {
        PackedColor { r, g, b, a }
    }

    /// Build a color from unit floats, each scaled by 255 and saturated
    pub fn from_unit(r: f32, g: f32, b: f32, a: f32) -> PackedColor {
        PackedColor::new(
            byte_from_unit(r),
            byte_from_unit(g),
            byte_from_unit(b),
            byte_from_unit(a)
        )
    }

    /// An opaque gray with all color channels set to `value`
    pub const fn gray(value: u8) -> PackedColor {
        PackedColor::new(value, value, value, 255)
    }

    pub const fn component(&self, component: Component) -> u8 {
        match component {
            Component::Red => self.r,
            Component::Green => self.g,
            Component::Blue => self.b,
            Component::Alpha => self.a
        }
    }

    pub fn set_component(&mut self, component: Component, value: u8) {
        match component {
            Component::Red => self.r = value,
            Component::Green => self.g = value,
            Component::Blue => self.b = value,
            Component::Alpha => self.a = value
        }
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: u8) -> PackedColor {
        PackedColor::new(self.r, self.g, self.b, alpha)
    }

    pub const fn is_opaque(&self) -> bool {
        self.a == 255
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub const fn from_array(value: [u8; 4]) -> PackedColor {
        PackedColor::new(value[0], value[1], value[2], value[3])
    }

    /// The color as a `u32` whose bytes, in memory order, are red, green, blue, alpha
    pub const fn to_u32(self) -> u32 {
        u32::from_le_bytes(self.to_array())
    }

    pub const fn from_u32(value: u32) -> PackedColor {
        PackedColor::from_array(value.to_le_bytes())
    }
}

impl From<[u8; 4]> for PackedColor {
    fn from(value: [u8; 4]) -> Self {
        PackedColor::from_array(value)
    }
}

impl From<PackedColor> for [u8; 4] {
    fn from(value: PackedColor) -> Self {
        value.to_array()
    }
}

#[cfg(test)]
mod tests {
    use crate::color::PackedColor;
    use crate::component::Component;

    #[test]
    fn u32_keeps_memory_order() {
        let color = PackedColor::ROYAL_BLUE;
        let bytes = color.to_u32().to_le_bytes();

        assert_eq!(bytes, [65, 105, 225, 255]);
        assert_eq!(PackedColor::from_u32(color.to_u32()), color);
    }

    #[test]
    fn from_unit_saturates() {
        let color = PackedColor::from_unit(2.0, -1.0, 0.5, 1.0);
        assert_eq!(color, PackedColor::new(255, 0, 128, 255));
    }

    #[test]
    fn component_access() {
        let mut color = PackedColor::FUCHSIA;
        color.set_component(Component::Green, 7);

        assert_eq!(color.component(Component::Green), 7);
        assert_eq!(color.component(Component::Alpha), 255);
    }
}
