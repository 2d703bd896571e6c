/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! QOI support via the `qoi` crate
use log::trace;
use qoi::{Channels, Header};
use zune_core::colorspace::ColorSpace;
use zune_core::options::DecoderOptions;

use crate::codecs::{check_dimensions, RawImage};
use crate::errors::StbiErrors;

const fn qoi_colorspace(channels: Channels) -> ColorSpace {
    match channels {
        Channels::Rgb => ColorSpace::RGB,
        Channels::Rgba => ColorSpace::RGBA
    }
}

fn read_headers(data: &[u8], options: &DecoderOptions) -> Result<Header, StbiErrors> {
    let header = qoi::decode_header(data)?;
    check_dimensions(
        header.width as usize,
        header.height as usize,
        usize::from(header.channels.as_u8()),
        options
    )?;
    Ok(header)
}

pub(crate) fn probe(
    data: &[u8], options: &DecoderOptions
) -> Result<(usize, usize, ColorSpace), StbiErrors> {
    let header = read_headers(data, options)?;

    Ok((
        header.width as usize,
        header.height as usize,
        qoi_colorspace(header.channels)
    ))
}

pub(crate) fn decode(data: &[u8], options: &DecoderOptions) -> Result<RawImage, StbiErrors> {
    // validate before the decoder allocates the output
    read_headers(data, options)?;

    let (header, pixels) = qoi::decode_to_vec(data)?;
    trace!("Qoi channels: {}", header.channels.as_u8());

    Ok(RawImage {
        pixels,
        width: header.width as usize,
        height: header.height as usize,
        colorspace: qoi_colorspace(header.channels)
    })
}
