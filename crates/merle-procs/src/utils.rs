/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use merle_image::buffer::PixelBuffer;
use merle_image::errors::ImageOperationsErrors;

/// Allocate a zeroed scratch vector, reporting allocation failure
///
/// Operations allocate all their scratch space before writing anything,
/// so a failure here never leaves a half written buffer.
pub(crate) fn try_zeroed_vec(length: usize) -> Result<Vec<u8>, ImageOperationsErrors> {
    let mut scratch = Vec::new();
    scratch
        .try_reserve_exact(length)
        .map_err(|_| ImageOperationsErrors::AllocationFailed(length))?;
    scratch.resize(length, 0);

    Ok(scratch)
}

/// Ensure `found` has the dimensions of `expected`
pub(crate) fn check_dimensions(
    expected: &PixelBuffer, found: &PixelBuffer
) -> Result<(), ImageOperationsErrors> {
    if expected.dimensions() != found.dimensions() {
        return Err(ImageOperationsErrors::DimensionsMisMatch(
            expected.dimensions(),
            found.dimensions()
        ));
    }
    Ok(())
}

/// The position of the source image on the destination
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Gravity {
    /// Place the image so that it seems like it's from the
    /// center of the canvas
    Center,
    /// Place the image so that it is from the top end of the canvas
    TopLeft,
    /// Place the src image so that it appears from the right of the canvas
    TopRight,
    /// Place the image so that it appears from the bottom left of the canvas
    BottomLeft,
    /// Place the image so that it appears from the bottom right of the canvas
    BottomRight
}

/// Offset at which a `src` sized image lands on a `dst` sized canvas
///
/// Offsets may be negative when the source is larger than the canvas.
#[allow(clippy::cast_possible_wrap)]
pub fn calculate_gravity(
    (src_width, src_height): (usize, usize), (dst_width, dst_height): (usize, usize),
    gravity: Gravity
) -> (isize, isize) {
    let (src_width, src_height) = (src_width as isize, src_height as isize);
    let (dst_width, dst_height) = (dst_width as isize, dst_height as isize);

    match gravity {
        Gravity::Center => ((dst_width - src_width) / 2, (dst_height - src_height) / 2),
        Gravity::TopLeft => (0, 0),
        Gravity::TopRight => (dst_width - src_width, 0),
        Gravity::BottomLeft => (0, dst_height - src_height),
        Gravity::BottomRight => (dst_width - src_width, dst_height - src_height)
    }
}
