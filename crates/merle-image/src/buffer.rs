/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The planar pixel buffer
//!
//! A [`PixelBuffer`] owns exactly one allocation of `4*width*height` bytes,
//! split into four equal contiguous planes in the order red, green, blue, alpha.
//! Plane `c` starts at byte offset `c*width*height` and pixel `(x,y)` sits at
//! `y*width + x` inside its plane.
//!
//! Keeping each channel contiguous means every per-channel routine walks
//! a flat slice, which is what makes the kernels vectorizable.
//!
//! The allocation is done by hand (like a `Vec<u8>` with a larger alignment)
//! so that allocation failure can be reported instead of aborting.
use std::alloc::{alloc_zeroed, dealloc, Layout};
use std::fmt::{Debug, Formatter};
use std::ops::Range;
use std::ptr::NonNull;

use merle_core::color::PackedColor;
use merle_core::component::Component;
use merle_core::log::trace;
use merle_core::options::KernelOptions;

use crate::errors::ImageErrors;

/// Minimum alignment of a buffer's allocation
///
/// 64 covers the widest vector register we know of, and since every plane
/// length is a multiple of the pixel count the planes themselves are
/// only guaranteed byte alignment. Vector code therefore always uses unaligned
/// loads and stores.
pub const MIN_ALIGNMENT: usize = 64;

/// A four channel, planar 8-bit image
///
/// Buffers are created empty and sized with [`resize`](Self::resize).
/// They are movable but deliberately not `Clone`, copies are explicit through
/// [`try_clone`](Self::try_clone).
pub struct PixelBuffer {
    ptr:     NonNull<u8>,
    layout:  Option<Layout>,
    width:   usize,
    height:  usize,
    options: KernelOptions
}

// safety: The buffer exclusively owns its allocation and only hands out
// references tied to its own borrow, the same contract as a Vec<u8>
unsafe impl Send for PixelBuffer {}

unsafe impl Sync for PixelBuffer {}

impl Default for PixelBuffer {
    fn default() -> Self {
        PixelBuffer::new()
    }
}

impl Debug for PixelBuffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("options", &self.options)
            .finish()
    }
}

impl PartialEq for PixelBuffer {
    /// Buffers are equal when they have the same dimensions and the same bytes,
    /// options are not compared
    fn eq(&self, other: &Self) -> bool {
        self.dimensions() == other.dimensions() && self.as_bytes() == other.as_bytes()
    }
}

impl Eq for PixelBuffer {}

impl Drop for PixelBuffer {
    fn drop(&mut self) {
        if let Some(layout) = self.layout.take() {
            // Safety: ptr was returned by alloc_zeroed with this exact layout
            unsafe { dealloc(self.ptr.as_ptr(), layout) };
        }
    }
}

/// Number of bytes needed for a buffer, or `None` on overflow
fn byte_length(width: usize, height: usize) -> Option<usize> {
    width.checked_mul(height)?.checked_mul(4)
}

/// Allocate `size` zeroed bytes aligned to [`MIN_ALIGNMENT`]
///
/// Returns a dangling pointer and no layout for zero sized requests
fn allocate(size: usize) -> Option<(NonNull<u8>, Option<Layout>)> {
    if size == 0 {
        return Some((NonNull::dangling(), None));
    }
    let layout = Layout::from_size_align(size, MIN_ALIGNMENT).ok()?;
    // Safety: layout has a non-zero size
    let ptr = NonNull::new(unsafe { alloc_zeroed(layout) })?;

    Some((ptr, Some(layout)))
}

impl PixelBuffer {
    /// Create an empty, zero sized buffer with default options
    pub fn new() -> PixelBuffer {
        PixelBuffer::new_with_options(KernelOptions::default())
    }

    /// Create an empty buffer whose kernels run with `options`
    pub fn new_with_options(options: KernelOptions) -> PixelBuffer {
        PixelBuffer {
            ptr: NonNull::dangling(),
            layout: None,
            width: 0,
            height: 0,
            options
        }
    }

    /// Create a buffer of the given dimensions
    ///
    /// # Errors
    /// [`ImageErrors::AllocationFailed`] if the storage cannot be allocated
    pub fn from_dimensions(width: usize, height: usize) -> Result<PixelBuffer, ImageErrors> {
        let mut buffer = PixelBuffer::new();
        buffer.resize(width, height)?;
        Ok(buffer)
    }

    /// Create a buffer of the given dimensions with every pixel set to `color`
    ///
    /// # Errors
    /// [`ImageErrors::AllocationFailed`] if the storage cannot be allocated
    pub fn from_color(
        width: usize, height: usize, color: PackedColor
    ) -> Result<PixelBuffer, ImageErrors> {
        let mut buffer = PixelBuffer::from_dimensions(width, height)?;

        for component in Component::ALL {
            buffer.plane_mut(component).fill(color.component(component));
        }
        Ok(buffer)
    }

    /// Change the dimensions of this buffer
    ///
    /// Resizing to the current dimensions does nothing. Resizing to different
    /// dimensions reallocates, contents are unspecified afterwards and should be
    /// populated or cleared before being read.
    ///
    /// # Errors
    /// [`ImageErrors::AllocationFailed`] when the byte count overflows or the
    /// allocator refuses, in which case the buffer is left untouched.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), ImageErrors> {
        if (width, height) == self.dimensions() {
            return Ok(());
        }
        let new_length =
            byte_length(width, height).ok_or(ImageErrors::AllocationFailed(width, height))?;

        if new_length == self.len() {
            // same storage, different shape
            self.width = width;
            self.height = height;
            return Ok(());
        }
        let (ptr, layout) =
            allocate(new_length).ok_or(ImageErrors::AllocationFailed(width, height))?;

        trace!(
            "Resizing buffer from {}x{} to {width}x{height}",
            self.width,
            self.height
        );

        if let Some(old_layout) = self.layout.take() {
            // Safety: ptr was returned by alloc_zeroed with this exact layout
            unsafe { dealloc(self.ptr.as_ptr(), old_layout) };
        }
        self.ptr = ptr;
        self.layout = layout;
        self.width = width;
        self.height = height;

        Ok(())
    }

    /// Create a deep copy of this buffer, including its options
    ///
    /// # Errors
    /// [`ImageErrors::AllocationFailed`] if the copy cannot be allocated
    pub fn try_clone(&self) -> Result<PixelBuffer, ImageErrors> {
        let mut buffer = PixelBuffer::new_with_options(self.options);
        buffer.resize(self.width, self.height)?;
        buffer.as_bytes_mut().copy_from_slice(self.as_bytes());

        Ok(buffer)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Return `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of pixels, which is also the length of each plane
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    /// Distance in bytes between two rows of a plane
    pub const fn stride(&self) -> usize {
        self.width
    }

    /// Total number of bytes in the allocation
    pub const fn len(&self) -> usize {
        self.area() * 4
    }

    pub const fn is_empty(&self) -> bool {
        self.area() == 0
    }

    /// Return true if `other` has the same width and height
    pub fn same_dimensions(&self, other: &PixelBuffer) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Options kernels use when writing into this buffer
    pub const fn options(&self) -> KernelOptions {
        self.options
    }

    pub fn set_options(&mut self, options: KernelOptions) {
        self.options = options;
    }

    /// The whole allocation, all four planes back to back
    pub fn as_bytes(&self) -> &[u8] {
        // Safety: ptr covers len() initialized bytes (zeroed on allocation),
        // or is dangling with len() == 0
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len()) }
    }

    /// The whole allocation, all four planes back to back
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        // Safety: see as_bytes, &mut self guarantees exclusivity
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len()) }
    }

    /// Byte range of a component's plane inside the allocation
    ///
    /// This is the `(offset, length)` contract every plane view is built from,
    /// the range always lies inside [`as_bytes`](Self::as_bytes).
    pub const fn plane_range(&self, component: Component) -> Range<usize> {
        let area = self.area();
        let start = component.index() * area;
        start..start + area
    }

    /// A single channel plane
    pub fn plane(&self, component: Component) -> &[u8] {
        let range = self.plane_range(component);
        &self.as_bytes()[range]
    }

    pub fn plane_mut(&mut self, component: Component) -> &mut [u8] {
        let range = self.plane_range(component);
        &mut self.as_bytes_mut()[range]
    }

    /// A channel plane and its row stride
    pub fn channel_plane(&self, component: Component) -> (&[u8], usize) {
        (self.plane(component), self.stride())
    }

    /// All planes, in [`Component::ALL`] order
    pub fn planes(&self) -> [&[u8]; 4] {
        let area = self.area();
        let (r, rest) = self.as_bytes().split_at(area);
        let (g, rest) = rest.split_at(area);
        let (b, a) = rest.split_at(area);

        [r, g, b, a]
    }

    /// All planes mutably, in [`Component::ALL`] order
    pub fn planes_mut(&mut self) -> [&mut [u8]; 4] {
        let area = self.area();
        let (r, rest) = self.as_bytes_mut().split_at_mut(area);
        let (g, rest) = rest.split_at_mut(area);
        let (b, a) = rest.split_at_mut(area);

        [r, g, b, a]
    }

    /// One row of one plane
    ///
    /// # Panics
    /// If `y` is not less than the height
    pub fn row(&self, component: Component, y: usize) -> &[u8] {
        let start = y * self.width;
        &self.plane(component)[start..start + self.width]
    }

    fn pixel_index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    /// Gather the four channels of a pixel, `None` if out of bounds
    pub fn get_pixel(&self, x: usize, y: usize) -> Option<PackedColor> {
        let index = self.pixel_index(x, y)?;
        let [r, g, b, a] = self.planes();

        Some(PackedColor::new(r[index], g[index], b[index], a[index]))
    }

    /// Scatter a color into the four planes at `(x,y)`
    ///
    /// # Errors
    /// [`ImageErrors::OutOfBounds`] if the position is outside the buffer
    pub fn set_pixel(&mut self, x: usize, y: usize, color: PackedColor) -> Result<(), ImageErrors> {
        let index = self
            .pixel_index(x, y)
            .ok_or(ImageErrors::OutOfBounds((x, y), self.dimensions()))?;

        for (plane, value) in self.planes_mut().into_iter().zip(color.to_array()) {
            plane[index] = value;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use merle_core::color::PackedColor;
    use merle_core::component::Component;
    use merle_core::options::KernelOptions;

    use crate::buffer::{PixelBuffer, MIN_ALIGNMENT};
    use crate::errors::ImageErrors;

    #[test]
    fn new_buffer_is_empty() {
        let buffer = PixelBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.as_bytes().len(), 0);
        assert!(buffer.plane(Component::Alpha).is_empty());
    }

    #[test]
    fn planes_are_laid_out_in_order() {
        let buffer = PixelBuffer::from_dimensions(3, 5).unwrap();

        for component in Component::ALL {
            let range = buffer.plane_range(component);
            assert_eq!(range.start, component.index() * 15);
            assert_eq!(range.len(), 15);
        }
        assert_eq!(buffer.len(), 60);
        assert_eq!(buffer.as_bytes().as_ptr() as usize % MIN_ALIGNMENT, 0);
    }

    #[test]
    fn resize_to_same_size_keeps_contents() {
        let mut buffer = PixelBuffer::from_color(4, 4, PackedColor::ROYAL_BLUE).unwrap();
        let before = buffer.as_bytes().as_ptr();

        buffer.resize(4, 4).unwrap();
        buffer.resize(4, 4).unwrap();

        assert_eq!(before, buffer.as_bytes().as_ptr());
        assert_eq!(buffer.get_pixel(3, 3), Some(PackedColor::ROYAL_BLUE));
    }

    #[test]
    fn resize_changes_dimensions() {
        let mut buffer = PixelBuffer::from_dimensions(2, 2).unwrap();
        buffer.resize(7, 3).unwrap();
        assert_eq!(buffer.dimensions(), (7, 3));
        assert_eq!(buffer.plane(Component::Blue).len(), 21);

        buffer.resize(0, 3).unwrap();
        assert!(buffer.is_empty());
        assert_eq!(buffer.dimensions(), (0, 3));
    }

    #[test]
    fn impossible_allocation_is_reported() {
        let mut buffer = PixelBuffer::from_color(2, 2, PackedColor::RED).unwrap();

        let result = buffer.resize(usize::MAX, 2);
        assert!(matches!(result, Err(ImageErrors::AllocationFailed(_, _))));
        // untouched
        assert_eq!(buffer.dimensions(), (2, 2));
        assert_eq!(buffer.get_pixel(1, 1), Some(PackedColor::RED));
    }

    #[test]
    fn pixel_get_set() {
        let mut buffer = PixelBuffer::from_dimensions(1, 1).unwrap();
        buffer.set_pixel(0, 0, PackedColor::ROYAL_BLUE).unwrap();

        assert_eq!(buffer.get_pixel(0, 0), Some(PackedColor::ROYAL_BLUE));
        assert_eq!(buffer.plane(Component::Green), &[105]);
        assert_eq!(buffer.get_pixel(1, 0), None);
        assert!(buffer.set_pixel(0, 1, PackedColor::RED).is_err());
    }

    #[test]
    fn try_clone_is_deep() {
        let options = KernelOptions::new_scalar();
        let mut buffer = PixelBuffer::new_with_options(options);
        buffer.resize(3, 2).unwrap();
        buffer.plane_mut(Component::Red).fill(9);

        let mut copy = buffer.try_clone().unwrap();
        assert_eq!(copy, buffer);
        assert_eq!(copy.options(), options);

        copy.plane_mut(Component::Red)[0] = 1;
        assert_ne!(copy, buffer);
    }

    #[test]
    fn rows_follow_stride() {
        let mut buffer = PixelBuffer::from_dimensions(3, 2).unwrap();
        buffer.set_pixel(1, 1, PackedColor::WHITE).unwrap();

        let (plane, stride) = buffer.channel_plane(Component::Red);
        assert_eq!(stride, 3);
        assert_eq!(plane[stride + 1], 255);
        assert_eq!(buffer.row(Component::Red, 1), &[0, 255, 0]);
    }
}
