/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Load images from memory into 8-bit pixels
//!
//! This crate mirrors the `stbi_load_from_memory` interface of `stb_image`.
//! Given a buffer containing an encoded image and a number of desired channels,
//! it returns tightly packed, interleaved 8-bit pixels together with the image
//! dimensions and the number of channels stored in the file.
//!
//! Decoding itself is done by well tested upstream decoders, this crate
//! detects the format, dispatches to the right decoder and converts the result
//! to the requested number of channels.
//!
//! # Supported formats
//! | Format | Decoder     | Native channels                         |
//! |--------|-------------|-----------------------------------------|
//! | PNG    | `png`       | 1-4, palettes and `tRNS` are expanded   |
//! | JPEG   | `zune-jpeg` | 1 for grayscale, 3 for everything else  |
//! | GIF    | `gif`       | 4, first frame only                     |
//! | QOI    | `qoi`       | 3 or 4                                  |
//! | BMP    | `image`     | 1-4                                     |
//! | PNM    | `image`     | 1-4                                     |
//! | WebP   | `image`     | 3 or 4                                  |
//!
//! # Channels
//! `desired_channels` follows `stb_image`
//!
//! - `0`: keep the layout found in the file
//! - `1`: grayscale
//! - `2`: grayscale and alpha
//! - `3`: RGB
//! - `4`: RGBA
//!
//! # Example
//! ```no_run
//! use zune_stbi::load_from_memory;
//!
//! let data = std::fs::read("image.png").unwrap();
//! let image = load_from_memory(&data, 4).unwrap();
//!
//! assert_eq!(
//!     image.pixels().len(),
//!     image.width() * image.height() * 4
//! );
//! println!("Channels in file: {}", image.source_channels());
//! ```
//!
//! # Limits
//! Use [`load_from_memory_with_options`] to configure maximum dimensions and
//! strictness via [`DecoderOptions`].
//!
//! ```no_run
//! use zune_core::options::DecoderOptions;
//! use zune_stbi::load_from_memory_with_options;
//!
//! let options = DecoderOptions::default()
//!     .set_max_width(1024)
//!     .set_max_height(1024);
//!
//! let image = load_from_memory_with_options(&[], 0, options);
//! assert!(image.is_err());
//! ```
use log::trace;
pub use zune_core;
use zune_core::options::DecoderOptions;

pub use crate::channels::{colorspace_for_channels, convert_channels};
pub use crate::codecs::{guess_format, ImageFormat};
pub use crate::decoded::{DecodedImage, ImageInfo};
pub use crate::errors::StbiErrors;

pub mod channels;
mod codecs;
mod decoded;
pub mod errors;

/// Largest number of channels a caller can ask for
pub const MAX_CHANNELS: usize = 4;

/// Largest pixel buffer, in bytes, a decode may allocate
///
/// Pixel counts must fit a C `int` once multiplied by the channel count,
/// larger images fail with [`StbiErrors::TooLargeImage`] before any allocation.
pub const MAX_IMAGE_BYTES: usize = i32::MAX as usize;

/// Decode an image in memory using default options
///
/// `desired_channels` is `0` to keep the layout of the file, or `1..=4`
/// to force a particular number of channels.
///
/// # Errors
/// See [`StbiErrors`]
pub fn load_from_memory(data: &[u8], desired_channels: usize) -> Result<DecodedImage, StbiErrors> {
    load_from_memory_with_options(data, desired_channels, DecoderOptions::default())
}

/// Decode an image in memory with custom options
///
/// # Arguments
/// - `data`: Encoded image, it is never modified
/// - `desired_channels`: `0` for the file's layout, or `1..=4`
/// - `options`: Limits and strictness, only `max_width`, `max_height` and
///   `strict_mode` are consulted
///
/// # Errors
/// - `UnsupportedChannelCount`: `desired_channels > 4`
/// - `EmptyInput`: `data` is empty
/// - `UnknownFormat`: No decoder recognised the data
/// - `ZeroDimensions`, `TooLargeDimensions`: Dimensions out of range
/// - `TooLargeImage`: The pixels would need more than [`MAX_IMAGE_BYTES`]
/// - `OutOfMemory`: The pixel buffer could not be allocated
/// - Decoder errors for corrupt data
pub fn load_from_memory_with_options(
    data: &[u8], desired_channels: usize, options: DecoderOptions
) -> Result<DecodedImage, StbiErrors> {
    if desired_channels > MAX_CHANNELS {
        return Err(StbiErrors::UnsupportedChannelCount(desired_channels));
    }
    let format = sniff(data)?;

    let raw = format.decode(data, &options)?;

    let output_colorspace = if desired_channels == 0 {
        raw.colorspace
    } else {
        colorspace_for_channels(desired_channels)
            .ok_or(StbiErrors::UnsupportedChannelCount(desired_channels))?
    };
    trace!(
        "Decoded {}x{} {:?} image, output colorspace {:?}",
        raw.width,
        raw.height,
        raw.colorspace,
        output_colorspace
    );

    codecs::check_dimensions(
        raw.width,
        raw.height,
        output_colorspace.num_components(),
        &options
    )?;
    let pixels = convert_channels(raw.pixels, raw.colorspace, output_colorspace)?;

    Ok(DecodedImage {
        pixels,
        width: raw.width,
        height: raw.height,
        source_colorspace: raw.colorspace,
        output_colorspace,
        format
    })
}

/// Read image dimensions and layout without decoding pixels
///
/// This is the counterpart of `stbi_info_from_memory`
///
/// # Errors
/// Same as [`load_from_memory`], minus errors that only occur while decoding pixels
pub fn info_from_memory(data: &[u8]) -> Result<ImageInfo, StbiErrors> {
    info_from_memory_with_options(data, DecoderOptions::default())
}

/// Read image dimensions and layout with custom options
pub fn info_from_memory_with_options(
    data: &[u8], options: DecoderOptions
) -> Result<ImageInfo, StbiErrors> {
    let format = sniff(data)?;
    let (width, height, colorspace) = format.probe(data, &options)?;

    Ok(ImageInfo {
        width,
        height,
        colorspace,
        format
    })
}

fn sniff(data: &[u8]) -> Result<ImageFormat, StbiErrors> {
    if data.is_empty() {
        return Err(StbiErrors::EmptyInput);
    }
    guess_format(data).ok_or(StbiErrors::UnknownFormat)
}
