/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Channel addressing
//!
//! A pixel buffer stores its four channels as separate planes, the order
//! of the planes is fixed to red, green, blue then alpha.

/// A single color channel of a pixel
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Component {
    Red,
    Green,
    Blue,
    Alpha
}

impl Component {
    /// All components, in plane order
    pub const ALL: [Component; 4] = [
        Component::Red,
        Component::Green,
        Component::Blue,
        Component::Alpha
    ];

    /// The color components, i.e everything but alpha
    pub const COLOR: [Component; 3] = [Component::Red, Component::Green, Component::Blue];

    /// Position of this component's plane inside a pixel buffer
    /// and position of the byte inside a packed pixel.
    pub const fn index(self) -> usize {
        match self {
            Component::Red => 0,
            Component::Green => 1,
            Component::Blue => 2,
            Component::Alpha => 3
        }
    }

    /// Inverse of [`index`](Self::index)
    ///
    /// Returns `None` for anything outside `0..4`
    pub const fn from_index(index: usize) -> Option<Component> {
        match index {
            0 => Some(Component::Red),
            1 => Some(Component::Green),
            2 => Some(Component::Blue),
            3 => Some(Component::Alpha),
            _ => None
        }
    }

    pub const fn is_alpha(self) -> bool {
        matches!(self, Component::Alpha)
    }
}

/// Selects which channels an operation touches
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ChannelMask {
    red:   bool,
    green: bool,
    blue:  bool,
    alpha: bool
}

impl ChannelMask {
    /// Every channel
    pub const fn all() -> ChannelMask {
        ChannelMask::new(true, true, true, true)
    }
    /// Red, green and blue but not alpha
    pub const fn color() -> ChannelMask {
        ChannelMask::new(true, true, true, false)
    }
    pub const fn new(red: bool, green: bool, blue: bool, alpha: bool) -> ChannelMask {
        ChannelMask {
            red,
            green,
            blue,
            alpha
        }
    }
    /// A mask containing only `component`
    pub const fn only(component: Component) -> ChannelMask {
        ChannelMask::none().with(component, true)
    }
    pub const fn none() -> ChannelMask {
        ChannelMask::new(false, false, false, false)
    }

    #[must_use]
    pub const fn with(mut self, component: Component, enabled: bool) -> ChannelMask {
        match component {
            Component::Red => self.red = enabled,
            Component::Green => self.green = enabled,
            Component::Blue => self.blue = enabled,
            Component::Alpha => self.alpha = enabled
        }
        self
    }

    pub const fn contains(&self, component: Component) -> bool {
        match component {
            Component::Red => self.red,
            Component::Green => self.green,
            Component::Blue => self.blue,
            Component::Alpha => self.alpha
        }
    }
}

impl Default for ChannelMask {
    fn default() -> Self {
        ChannelMask::all()
    }
}
