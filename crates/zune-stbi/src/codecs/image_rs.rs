/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! BMP, PNM and WebP support via the `image` crate
//!
//! Samples wider than 8 bits are reduced to 8 bits, the channel
//! count is kept as decoded.
use std::io::Cursor;

use image::{DynamicImage, ImageDecoder, ImageReader};
use log::trace;
use zune_core::colorspace::ColorSpace;
use zune_core::options::DecoderOptions;

use crate::channels::colorspace_for_channels;
use crate::codecs::{check_dimensions, RawImage};
use crate::errors::StbiErrors;

fn read_headers<'a>(
    data: &'a [u8], format: image::ImageFormat, options: &DecoderOptions
) -> Result<(impl ImageDecoder + 'a, ColorSpace), StbiErrors> {
    let decoder = ImageReader::with_format(Cursor::new(data), format).into_decoder()?;

    let channels = usize::from(decoder.color_type().channel_count());
    let colorspace = colorspace_for_channels(channels)
        .ok_or(StbiErrors::UnsupportedChannelCount(channels))?;

    let (width, height) = decoder.dimensions();
    // samples are buffered at their native depth before reduction to 8 bits
    check_dimensions(
        width as usize,
        height as usize,
        usize::from(decoder.color_type().bytes_per_pixel()),
        options
    )?;

    Ok((decoder, colorspace))
}

pub(crate) fn probe(
    data: &[u8], format: image::ImageFormat, options: &DecoderOptions
) -> Result<(usize, usize, ColorSpace), StbiErrors> {
    let (decoder, colorspace) = read_headers(data, format, options)?;
    let (width, height) = decoder.dimensions();

    Ok((width as usize, height as usize, colorspace))
}

pub(crate) fn decode(
    data: &[u8], format: image::ImageFormat, options: &DecoderOptions
) -> Result<RawImage, StbiErrors> {
    let (decoder, colorspace) = read_headers(data, format, options)?;

    trace!("{:?} color type: {:?}", format, decoder.color_type());

    let image = DynamicImage::from_decoder(decoder)?;
    let (width, height) = (image.width() as usize, image.height() as usize);

    let pixels = match colorspace {
        ColorSpace::Luma => image.into_luma8().into_raw(),
        ColorSpace::LumaA => image.into_luma_alpha8().into_raw(),
        ColorSpace::RGB => image.into_rgb8().into_raw(),
        _ => image.into_rgba8().into_raw()
    };

    Ok(RawImage {
        pixels,
        width,
        height,
        colorspace
    })
}
