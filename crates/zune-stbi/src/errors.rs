/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors that may occur when loading an image from memory
use core::fmt::{Debug, Display, Formatter};

use zune_core::colorspace::ColorSpace;
use zune_jpeg::errors::DecodeErrors;

/// Errors returned by the loader
///
/// Decoder specific errors are kept as is, so callers that
/// need more detail can match on the inner value.
pub enum StbiErrors {
    /// The input slice had no bytes
    EmptyInput,
    /// None of the supported formats recognised the magic bytes
    UnknownFormat,
    /// Requested channel count is not in `0..=4`
    UnsupportedChannelCount(usize),
    /// Channel conversion was asked to work on a layout it does not know
    UnsupportedColorspace(ColorSpace),
    /// Width or height is zero
    ZeroDimensions,
    /// A dimension exceeds the configured limit, (dimension, limit, found)
    TooLargeDimensions(&'static str, usize, usize),
    /// Decoded pixels would exceed the byte budget, (limit, found)
    TooLargeImage(usize, usize),
    /// Allocating the pixel buffer failed, carries the requested size
    OutOfMemory(usize),
    PngErrors(png::DecodingError),
    JpegErrors(DecodeErrors),
    GifErrors(gif::DecodingError),
    QoiErrors(qoi::Error),
    /// Errors from the BMP, PNM and WebP decoders
    ImageRsErrors(image::ImageError),
    /// Generic message
    Generic(&'static str)
}

impl StbiErrors {
    /// A short description of what went wrong
    ///
    /// This is what `stbi_failure_reason` reports, the strings are
    /// deliberately coarse and do not allocate.
    pub const fn failure_reason(&self) -> &'static str {
        match self {
            StbiErrors::EmptyInput => "no data",
            StbiErrors::UnknownFormat => "unknown image type",
            StbiErrors::UnsupportedChannelCount(_) => "bad req_comp",
            StbiErrors::UnsupportedColorspace(_) => "unsupported format conversion",
            StbiErrors::ZeroDimensions => "0-pixel image",
            StbiErrors::TooLargeDimensions(..) => "too large",
            StbiErrors::TooLargeImage(..) => "too large",
            StbiErrors::OutOfMemory(_) => "outofmem",
            StbiErrors::PngErrors(_) => "corrupt PNG",
            StbiErrors::JpegErrors(_) => "corrupt JPEG",
            StbiErrors::GifErrors(_) => "corrupt GIF",
            StbiErrors::QoiErrors(_) => "corrupt QOI",
            StbiErrors::ImageRsErrors(_) => "corrupt image",
            StbiErrors::Generic(_) => "decode failed"
        }
    }
}

impl Debug for StbiErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            StbiErrors::EmptyInput => writeln!(f, "Empty input, no bytes to decode"),
            StbiErrors::UnknownFormat => {
                writeln!(f, "Unknown image format, magic bytes did not match any decoder")
            }
            StbiErrors::UnsupportedChannelCount(channels) => {
                writeln!(
                    f,
                    "Unsupported channel count {channels}, expected a value between 0 and 4"
                )
            }
            StbiErrors::UnsupportedColorspace(colorspace) => {
                writeln!(
                    f,
                    "Unsupported colorspace {colorspace:?}, expected one of Luma, LumaA, RGB or RGBA"
                )
            }
            StbiErrors::ZeroDimensions => writeln!(f, "Image width or height is zero"),
            StbiErrors::TooLargeDimensions(dimension, expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions for {dimension}, {found} exceeds {expected}"
                )
            }
            StbiErrors::TooLargeImage(limit, found) => {
                writeln!(
                    f,
                    "Image needs {found} bytes, more than the limit of {limit} bytes"
                )
            }
            StbiErrors::OutOfMemory(size) => {
                writeln!(f, "Could not allocate {size} bytes for the pixels")
            }
            StbiErrors::PngErrors(err) => writeln!(f, "Png decoding failed: {err:?}"),
            StbiErrors::JpegErrors(err) => writeln!(f, "Jpeg decoding failed: {err:?}"),
            StbiErrors::GifErrors(err) => writeln!(f, "Gif decoding failed: {err:?}"),
            StbiErrors::QoiErrors(err) => writeln!(f, "Qoi decoding failed: {err:?}"),
            StbiErrors::ImageRsErrors(err) => writeln!(f, "Image decoding failed: {err:?}"),
            StbiErrors::Generic(err) => writeln!(f, "{err}")
        }
    }
}

impl Display for StbiErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for StbiErrors {}

impl From<png::DecodingError> for StbiErrors {
    fn from(value: png::DecodingError) -> Self {
        StbiErrors::PngErrors(value)
    }
}

impl From<DecodeErrors> for StbiErrors {
    fn from(value: DecodeErrors) -> Self {
        StbiErrors::JpegErrors(value)
    }
}

impl From<gif::DecodingError> for StbiErrors {
    fn from(value: gif::DecodingError) -> Self {
        StbiErrors::GifErrors(value)
    }
}

impl From<qoi::Error> for StbiErrors {
    fn from(value: qoi::Error) -> Self {
        StbiErrors::QoiErrors(value)
    }
}

impl From<image::ImageError> for StbiErrors {
    fn from(value: image::ImageError) -> Self {
        StbiErrors::ImageRsErrors(value)
    }
}

impl From<&'static str> for StbiErrors {
    fn from(value: &'static str) -> Self {
        StbiErrors::Generic(value)
    }
}
