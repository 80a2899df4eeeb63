/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */


use merle_core::component::Component;
use merle_image::buffer::PixelBuffer;
use merle_image::errors::ImageOperationsErrors;
use merle_image::traits::OperationsTrait;

/// Copy one channel plane over another of the same buffer
///
/// Copying a channel onto itself does nothing.
#[derive(Copy, Clone, Debug)]
pub struct DuplicateChannel {
    source:      Component,
    destination: Component
}

impl DuplicateChannel {
    #[must_use]
    pub fn new(source: Component, destination: Component) -> DuplicateChannel {
        DuplicateChannel {
            source,
            destination
        }
    }
}

impl OperationsTrait for DuplicateChannel {
    fn name(&self) -> &'static str {
        "Duplicate channel"
    }

    fn execute_impl(&self, buffer: &mut PixelBuffer) -> Result<(), ImageOperationsErrors> {
        if self.source == self.destination {
            return Ok(());
        }
        let source = buffer.plane_range(self.source);
        let destination = buffer.plane_range(self.destination);

        buffer
            .as_bytes_mut()
            .copy_within(source, destination.start);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use merle_core::color::PackedColor;
    use merle_core::component::Component;
    use merle_image::buffer::PixelBuffer;
    use merle_image::traits::OperationsTrait;

    use crate::duplicate_channel::DuplicateChannel;

    #[test]
    fn copies_plane() {
        let mut buffer = PixelBuffer::from_color(3, 2, PackedColor::new(1, 2, 3, 4)).unwrap();
        buffer.set_pixel(0, 1, PackedColor::new(50, 60, 70, 80)).unwrap();

        DuplicateChannel::new(Component::Alpha, Component::Red)
            .execute(&mut buffer)
            .unwrap();

        assert_eq!(buffer.plane(Component::Red), buffer.plane(Component::Alpha));
        assert_eq!(buffer.get_pixel(0, 1), Some(PackedColor::new(80, 60, 70, 80)));
    }

    #[test]
    fn same_channel_is_noop() {
        let mut buffer = PixelBuffer::from_color(3, 2, PackedColor::CYAN).unwrap();
        let copy = buffer.try_clone().unwrap();

        DuplicateChannel::new(Component::Blue, Component::Blue)
            .execute(&mut buffer)
            .unwrap();
        assert_eq!(buffer, copy);
    }
}
