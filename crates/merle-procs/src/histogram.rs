/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */


//! Calculate channel histogram statistics
//!
//! An image histogram is a graph that shows the number of pixels in an image at each intensity value
//!
//! The histogram is caller owned, [`histogram_into`] overwrites one in a
//! single pass over the buffer so it can be reused across frames.
use merle_core::component::Component;
use merle_core::options::KernelOptions;
use merle_image::buffer::PixelBuffer;

/// Per channel frequency of every byte value
///
/// # Example
/// ```rust
/// use merle_core::color::PackedColor;
/// use merle_core::component::Component;
/// use merle_image::buffer::PixelBuffer;
/// use merle_procs::histogram::histogram;
///
/// let buffer = PixelBuffer::from_color(100, 100, PackedColor::gray(100)).unwrap();
/// let values = histogram(&buffer);
/// // r had 100*100 items
/// assert_eq!(values.channel(Component::Red)[100], 100 * 100);
/// assert_eq!(values.channel(Component::Alpha)[255], 100 * 100);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Histogram {
    counts: [[u64; 256]; 4]
}

impl Default for Histogram {
    fn default() -> Self {
        Histogram {
            counts: [[0; 256]; 4]
        }
    }
}

impl Histogram {
    /// Create a histogram with every bin empty
    #[must_use]
    pub fn new() -> Histogram {
        Histogram::default()
    }

    /// The 256 bins of one channel
    #[must_use]
    pub const fn channel(&self, component: Component) -> &[u64; 256] {
        &self.counts[component.index()]
    }

    /// Sum of the bins of one channel, the pixel count it was built from
    #[must_use]
    pub fn total(&self, component: Component) -> u64 {
        self.channel(component).iter().sum()
    }

    /// All four channels, in `R`,`G`,`B`,`A` order
    #[must_use]
    pub const fn counts(&self) -> &[[u64; 256]; 4] {
        &self.counts
    }

    fn clear(&mut self) {
        self.counts.iter_mut().for_each(|x| x.fill(0));
    }
}

fn count_scalar(data: &[u8], bins: &mut [u64; 256]) {
    for value in data {
        bins[usize::from(*value)] += 1;
    }
}

/// Count bytes into four interleaved tables, merging them at the end
///
/// From https://fastcompression.blogspot.com/2014/09/counting-bytes-fast-little-trick-from.html
///
/// Consecutive bytes rarely hit the same table, which breaks the store to load
/// dependency a single table has on runs of equal bytes.
fn count_split_tables(data: &[u8], bins: &mut [u64; 256]) {
    let mut start1 = [0_u64; 256];
    let mut start2 = [0_u64; 256];
    let mut start3 = [0_u64; 256];
    let mut start4 = [0_u64; 256];

    let chunks = data.chunks_exact(8);
    let remainder = chunks.remainder();

    for chunk in chunks {
        let mut bytes = [0_u8; 8];
        bytes.copy_from_slice(chunk);
        let tmp1 = u64::from_le_bytes(bytes);

        start1[((tmp1 >> 56) & 255) as usize] += 1;
        start2[((tmp1 >> 48) & 255) as usize] += 1;
        start3[((tmp1 >> 40) & 255) as usize] += 1;
        start4[((tmp1 >> 32) & 255) as usize] += 1;
        start1[((tmp1 >> 24) & 255) as usize] += 1;
        start2[((tmp1 >> 16) & 255) as usize] += 1;
        start3[((tmp1 >> 8) & 255) as usize] += 1;
        start4[(tmp1 & 255) as usize] += 1;
    }

    for value in remainder {
        start1[usize::from(*value)] += 1;
    }
    // add them together
    for ((((bin, b), c), d), e) in bins
        .iter_mut()
        .zip(start1.iter())
        .zip(start2.iter())
        .zip(start3.iter())
        .zip(start4.iter())
    {
        *bin += b + c + d + e;
    }
}

/// Add the byte frequencies of `data` to `bins`
pub fn count_bytes(options: KernelOptions, data: &[u8], bins: &mut [u64; 256]) {
    if options.is_vectorized() {
        count_split_tables(data, bins);
    } else {
        count_scalar(data, bins);
    }
}

/// Overwrite `histogram` with the channel frequencies of `buffer`
pub fn histogram_into(buffer: &PixelBuffer, histogram: &mut Histogram) {
    histogram.clear();

    for component in Component::ALL {
        count_bytes(
            buffer.options(),
            buffer.plane(component),
            &mut histogram.counts[component.index()]
        );
    }
}

/// Build a new histogram of `buffer`
#[must_use]
pub fn histogram(buffer: &PixelBuffer) -> Histogram {
    let mut histogram = Histogram::new();
    histogram_into(buffer, &mut histogram);
    histogram
}
