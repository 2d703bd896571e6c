/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! PNG support via the `png` crate
//!
//! Low bit depths and palettes are expanded, `tRNS` becomes an alpha channel
//! and 16 bit samples are stripped to 8 bits.
use std::io::Cursor;

use log::trace;
use png::{ColorType, Reader, Transformations};
use zune_core::colorspace::ColorSpace;
use zune_core::options::DecoderOptions;

use crate::codecs::{check_dimensions, zeroed_buffer, RawImage};
use crate::errors::StbiErrors;

fn png_colorspace(color_type: ColorType) -> ColorSpace {
    match color_type {
        ColorType::Grayscale => ColorSpace::Luma,
        ColorType::GrayscaleAlpha => ColorSpace::LumaA,
        // EXPAND turns indexed images into RGB or RGBA,
        // so indexed is never seen here
        ColorType::Rgb | ColorType::Indexed => ColorSpace::RGB,
        ColorType::Rgba => ColorSpace::RGBA
    }
}

fn read_headers<'a>(
    data: &'a [u8], options: &DecoderOptions
) -> Result<Reader<Cursor<&'a [u8]>>, StbiErrors> {
    let mut decoder = png::Decoder::new(Cursor::new(data));

    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    decoder.ignore_checksums(!options.strict_mode());

    let reader = decoder.read_info()?;
    let info = reader.info();
    let (color_type, _) = reader.output_color_type();

    check_dimensions(
        info.width as usize,
        info.height as usize,
        png_colorspace(color_type).num_components(),
        options
    )?;

    Ok(reader)
}

pub(crate) fn probe(
    data: &[u8], options: &DecoderOptions
) -> Result<(usize, usize, ColorSpace), StbiErrors> {
    let reader = read_headers(data, options)?;
    let info = reader.info();
    let (color_type, _) = reader.output_color_type();

    Ok((
        info.width as usize,
        info.height as usize,
        png_colorspace(color_type)
    ))
}

pub(crate) fn decode(data: &[u8], options: &DecoderOptions) -> Result<RawImage, StbiErrors> {
    let mut reader = read_headers(data, options)?;

    let (color_type, depth) = reader.output_color_type();
    trace!("Png output color type: {:?}, depth: {:?}", color_type, depth);

    let size = reader
        .output_buffer_size()
        .ok_or(StbiErrors::Generic("Png image too large to fit in memory"))?;

    let mut pixels = zeroed_buffer(size)?;
    let frame = reader.next_frame(&mut pixels)?;
    pixels.truncate(frame.buffer_size());

    Ok(RawImage {
        pixels,
        width: frame.width as usize,
        height: frame.height as usize,
        colorspace: png_colorspace(frame.color_type)
    })
}
