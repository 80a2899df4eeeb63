/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during image processing
//!
//! Every fallible routine checks its inputs before touching any buffer,
//! so receiving an error means nothing was written.
use std::fmt::{Debug, Display, Formatter};

/// All possible buffer errors that can occur.
///
/// This is the grandfather of errors and contains
/// allocation, addressing, ingestion and operation errors
pub enum ImageErrors {
    /// The allocator could not provide storage for a buffer of
    /// the given width and height, the buffer was left unchanged
    AllocationFailed(usize, usize),
    /// A pixel coordinate lies outside a buffer, (x,y) then (width,height)
    OutOfBounds((usize, usize), (usize, usize)),
    /// Interleaved bytes do not match the dimensions they were declared with,
    /// expected length then found length
    InterleavedLengthMisMatch(usize, usize),
    /// The external decoder could not produce an image
    NoImage(String),
    OperationsError(ImageOperationsErrors),
    GenericString(String),
    GenericStr(&'static str)
}

/// Errors that may occur during image operations
pub enum ImageOperationsErrors {
    /// Two buffers were expected to have the same dimensions,
    /// (width, height) of the expected then the found
    DimensionsMisMatch((usize, usize), (usize, usize)),
    /// A convolution kernel has a bad shape
    InvalidKernel(String),
    /// Scratch space for an operation could not be allocated,
    /// contains the number of bytes requested
    AllocationFailed(usize),
    /// Generic errors
    GenericStr(&'static str),
    /// Generic errors which have more context
    GenericString(String)
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AllocationFailed(width, height) => {
                writeln!(
                    f,
                    "Could not allocate storage for a {width}x{height} pixel buffer"
                )
            }
            Self::OutOfBounds((x, y), (width, height)) => {
                writeln!(
                    f,
                    "Pixel ({x},{y}) is outside of a buffer of dimensions {width}x{height}"
                )
            }
            Self::InterleavedLengthMisMatch(expected, found) => {
                writeln!(
                    f,
                    "Interleaved data length mismatch, expected {expected} bytes but found {found}"
                )
            }
            Self::NoImage(reason) => writeln!(f, "No image: {reason}"),
            Self::OperationsError(ref error) => writeln!(f, "{error:?}"),
            Self::GenericString(err) => writeln!(f, "{err}"),
            Self::GenericStr(err) => writeln!(f, "{err}")
        }
    }
}

impl Debug for ImageOperationsErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DimensionsMisMatch(expected, found) => {
                writeln!(
                    f,
                    "Dimensions mismatch, expected {}x{} but found {}x{}",
                    expected.0, expected.1, found.0, found.1
                )
            }
            Self::InvalidKernel(reason) => writeln!(f, "Invalid kernel: {reason}"),
            Self::AllocationFailed(bytes) => {
                writeln!(f, "Could not allocate {bytes} bytes of scratch space")
            }
            Self::GenericStr(err) => writeln!(f, "{err}"),
            Self::GenericString(err) => writeln!(f, "{err}")
        }
    }
}

impl Display for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{self:?}")
    }
}

impl Display for ImageOperationsErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{self:?}")
    }
}

impl std::error::Error for ImageErrors {}

impl std::error::Error for ImageOperationsErrors {}

impl From<ImageOperationsErrors> for ImageErrors {
    fn from(from: ImageOperationsErrors) -> Self {
        ImageErrors::OperationsError(from)
    }
}

impl From<&'static str> for ImageErrors {
    fn from(value: &'static str) -> Self {
        ImageErrors::GenericStr(value)
    }
}

impl From<String> for ImageErrors {
    fn from(value: String) -> Self {
        ImageErrors::GenericString(value)
    }
}

impl From<&'static str> for ImageOperationsErrors {
    fn from(value: &'static str) -> Self {
        ImageOperationsErrors::GenericStr(value)
    }
}

impl From<String> for ImageOperationsErrors {
    fn from(value: String) -> Self {
        ImageOperationsErrors::GenericString(value)
    }
}

/// Allocation failures of a buffer surface through operations as a
/// failure to get scratch space
impl From<ImageErrors> for ImageOperationsErrors {
    fn from(value: ImageErrors) -> Self {
        match value {
            ImageErrors::AllocationFailed(width, height) => {
                ImageOperationsErrors::AllocationFailed(width.saturating_mul(height).saturating_mul(4))
            }
            ImageErrors::OperationsError(err) => err,
            other => ImageOperationsErrors::GenericString(format!("{other:?}"))
        }
    }
}
