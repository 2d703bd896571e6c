/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! JPEG support via `zune-jpeg`
//!
//! Grayscale images stay grayscale, everything else (YCbCr, CMYK, YCCK)
//! comes out as RGB.
use log::trace;
use zune_core::bytestream::ZCursor;
use zune_core::colorspace::ColorSpace;
use zune_core::options::DecoderOptions;
use zune_jpeg::JpegDecoder;

use crate::codecs::{check_dimensions, RawImage};
use crate::errors::StbiErrors;

const fn native_colorspace(input: ColorSpace) -> ColorSpace {
    match input {
        ColorSpace::Luma => ColorSpace::Luma,
        _ => ColorSpace::RGB
    }
}

fn read_headers<'a>(
    data: &'a [u8], options: &DecoderOptions
) -> Result<(JpegDecoder<ZCursor<&'a [u8]>>, ColorSpace), StbiErrors> {
    let options = options.jpeg_set_out_colorspace(ColorSpace::RGB);
    let mut decoder = JpegDecoder::new_with_options(ZCursor::new(data), options);

    decoder.decode_headers()?;

    let (width, height) = decoder
        .dimensions()
        .ok_or(StbiErrors::Generic("Jpeg headers were not decoded"))?;

    let input = decoder
        .input_colorspace()
        .ok_or(StbiErrors::Generic("Jpeg headers were not decoded"))?;
    let colorspace = native_colorspace(input);

    check_dimensions(width, height, colorspace.num_components(), &options)?;

    Ok((decoder, colorspace))
}

pub(crate) fn probe(
    data: &[u8], options: &DecoderOptions
) -> Result<(usize, usize, ColorSpace), StbiErrors> {
    let (decoder, colorspace) = read_headers(data, options)?;
    let (width, height) = decoder
        .dimensions()
        .ok_or(StbiErrors::Generic("Jpeg headers were not decoded"))?;

    Ok((width, height, colorspace))
}

pub(crate) fn decode(data: &[u8], options: &DecoderOptions) -> Result<RawImage, StbiErrors> {
    let (mut decoder, colorspace) = read_headers(data, options)?;

    trace!(
        "Jpeg input colorspace: {:?}, decoding to {:?}",
        decoder.input_colorspace(),
        colorspace
    );
    let new_options = decoder.options().jpeg_set_out_colorspace(colorspace);
    decoder.set_options(new_options);

    let pixels = decoder.decode()?;
    let (width, height) = decoder
        .dimensions()
        .ok_or(StbiErrors::Generic("Jpeg headers were not decoded"))?;

    Ok(RawImage {
        pixels,
        width,
        height,
        colorspace
    })
}
