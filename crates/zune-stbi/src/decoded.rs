/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoded pixels and header information
use zune_core::colorspace::ColorSpace;

use crate::codecs::ImageFormat;

/// A decoded image
///
/// Pixels are 8-bit, interleaved, row-major and tightly packed,
/// i.e `pixels.len() == width * height * output_colorspace.num_components()`
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedImage {
    pub(crate) pixels:            Vec<u8>,
    pub(crate) width:             usize,
    pub(crate) height:            usize,
    pub(crate) source_colorspace: ColorSpace,
    pub(crate) output_colorspace: ColorSpace,
    pub(crate) format:            ImageFormat
}

impl DecodedImage {
    /// Decoded pixels
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
    /// Consume the image returning the pixels
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
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
    /// Layout of the pixels as they were stored in the file
    pub const fn source_colorspace(&self) -> ColorSpace {
        self.source_colorspace
    }
    /// Number of channels stored in the file
    ///
    /// This is `channels_in_file` in the C interface
    pub fn source_channels(&self) -> usize {
        self.source_colorspace.num_components()
    }
    /// Layout of [`pixels`](Self::pixels)
    pub const fn output_colorspace(&self) -> ColorSpace {
        self.output_colorspace
    }
    /// Number of channels per pixel in [`pixels`](Self::pixels)
    pub fn output_channels(&self) -> usize {
        self.output_colorspace.num_components()
    }
    /// The format the image was decoded from
    pub const fn format(&self) -> ImageFormat {
        self.format
    }
}

/// Image header information returned by [`info_from_memory`](crate::info_from_memory)
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ImageInfo {
    pub width:      usize,
    pub height:     usize,
    /// Layout the loader would produce when asked for the native number of channels
    pub colorspace: ColorSpace,
    pub format:     ImageFormat
}

impl ImageInfo {
    /// Number of channels the loader would produce when asked for the native layout
    pub fn channels(&self) -> usize {
        self.colorspace.num_components()
    }
}
