/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */


//! Getting pixels in and out of the engine
//!
//! The engine never decodes or encodes, files go through the `image` crate
//! and cross into planes through the interleaved codec.
use std::ffi::OsStr;

use log::info;
use merle_core::options::KernelOptions;
use merle_image::buffer::PixelBuffer;
use merle_image::codec::{decode_interleaved_with_options, encode_interleaved};
use merle_image::errors::ImageErrors;

/// Decode `file_path` into a new buffer whose kernels run with `options`
pub fn read_buffer(file_path: &OsStr, options: KernelOptions) -> Result<PixelBuffer, ImageErrors> {
    let image = image::open(file_path)
        .map_err(|e| ImageErrors::NoImage(format!("Could not decode {file_path:?}: {e}")))?
        .to_rgba8();

    let (width, height) = image.dimensions();
    info!("Decoded {file_path:?}, {width}x{height}");

    decode_interleaved_with_options(image.as_raw(), width as usize, height as usize, options)
}

/// Encode `buffer` to `file_path`, the format follows the extension
pub fn write_buffer(file_path: &OsStr, buffer: &PixelBuffer) -> Result<(), ImageErrors> {
    let to_u32 = |value: usize| {
        u32::try_from(value).map_err(|_| {
            ImageErrors::GenericString(format!(
                "Dimension {value} is too large for the encoder"
            ))
        })
    };
    let (width, height) = (to_u32(buffer.width())?, to_u32(buffer.height())?);

    let pixels = encode_interleaved(buffer)?;

    image::save_buffer(file_path, &pixels, width, height, image::ColorType::Rgba8)
        .map_err(|e| ImageErrors::GenericString(format!("Could not encode {file_path:?}: {e}")))?;

    info!("Wrote {file_path:?}");
    Ok(())
}
