/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Traits implemented by every buffer operation

use merle_core::log::trace;

use crate::buffer::PixelBuffer;
use crate::errors::{ImageErrors, ImageOperationsErrors};

/// An operation that mutates a pixel buffer in place
///
/// Operations that need other buffers (transitions, composites, filters with
/// an explicit source) borrow them at construction and write into the buffer
/// passed to [`execute`](Self::execute).
pub trait OperationsTrait {
    /// Get the name of this operation
    fn name(&self) -> &'static str;

    /// Execute the operation on the buffer
    ///
    /// Implementers validate everything they need before writing, so an error
    /// leaves `buffer` untouched.
    ///
    /// # Errors
    /// Any operations error will be propagated to the caller
    fn execute_impl(&self, buffer: &mut PixelBuffer) -> Result<(), ImageOperationsErrors>;

    /// Execute a simple operation on the buffer
    ///
    /// # Arguments
    /// - buffer: A mutable reference to a buffer which
    ///   this operation will manipulate
    ///
    /// # Errors
    /// Any operations error will be propagated to the caller
    ///
    /// # Example
    /// ```
    /// use merle_core::color::PackedColor;
    /// use merle_image::buffer::PixelBuffer;
    /// use merle_image::traits::OperationsTrait;
    /// # use merle_image::errors::ImageOperationsErrors;
    /// # struct Zero;
    /// # impl OperationsTrait for Zero {
    /// #    fn name(&self) -> &'static str { "zero" }
    /// #    fn execute_impl(&self, buffer: &mut PixelBuffer) -> Result<(), ImageOperationsErrors> {
    /// #        buffer.as_bytes_mut().fill(0);
    /// #        Ok(())
    /// #    }
    /// # }
    ///
    /// let mut buffer = PixelBuffer::from_color(4, 4, PackedColor::RED).unwrap();
    /// Zero.execute(&mut buffer).unwrap();
    /// assert_eq!(buffer.get_pixel(0, 0), Some(PackedColor::TRANSPARENT_BLACK));
    /// ```
    fn execute(&self, buffer: &mut PixelBuffer) -> Result<(), ImageErrors> {
        trace!(
            "Running {} on a {}x{} buffer, strategy {:?}",
            self.name(),
            buffer.width(),
            buffer.height(),
            buffer.options().get_strategy()
        );
        self.execute_impl(buffer)
            .map_err(<ImageOperationsErrors as Into<ImageErrors>>::into)
    }

    /// Run the operation on a copy of `buffer`, returning the copy
    ///
    /// # Errors
    /// Allocation of the copy or the operation itself failing
    fn clone_and_execute(&self, buffer: &PixelBuffer) -> Result<PixelBuffer, ImageErrors> {
        let mut copy = buffer.try_clone()?;
        self.execute(&mut copy)?;
        Ok(copy)
    }
}
