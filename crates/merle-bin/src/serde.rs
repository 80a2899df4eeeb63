/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */


use std::ffi::OsString;

use merle_image::buffer::PixelBuffer;
use merle_procs::statistics::BufferStatistics;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Statistics of one processed file
pub struct Statistics {
    file:       OsString,
    dimensions: (usize, usize),
    statistics: BufferStatistics,
    buffer_len: usize
}

impl Statistics {
    pub fn new(file: OsString, buffer: &PixelBuffer) -> Statistics {
        Statistics {
            file,
            dimensions: buffer.dimensions(),
            statistics: BufferStatistics::from_buffer(buffer),
            buffer_len: buffer.len()
        }
    }
}

impl Serialize for Statistics {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Statistics", 7)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("width", &self.dimensions.0)?;
        state.serialize_field("height", &self.dimensions.1)?;
        state.serialize_field("bytes", &self.buffer_len)?;
        state.serialize_field("average_color", &self.statistics.average_color)?;
        state.serialize_field("average_luminance", &self.statistics.average_luminance)?;
        state.serialize_field("is_opaque", &self.statistics.is_opaque)?;

        state.end()
    }
}
