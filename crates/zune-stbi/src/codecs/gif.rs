/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! GIF support via the `gif` crate
//!
//! Only the first frame is decoded, it is placed on a transparent
//! canvas the size of the logical screen and returned as RGBA.
use gif::{ColorOutput, DecodeOptions, Decoder};
use log::trace;
use zune_core::colorspace::ColorSpace;
use zune_core::options::DecoderOptions;

use crate::codecs::{check_dimensions, zeroed_buffer, RawImage};
use crate::errors::StbiErrors;

fn read_headers<'a>(
    data: &'a [u8], options: &DecoderOptions
) -> Result<Decoder<&'a [u8]>, StbiErrors> {
    let mut gif_options = DecodeOptions::new();
    gif_options.set_color_output(ColorOutput::RGBA);

    let decoder = gif_options.read_info(data)?;

    check_dimensions(
        usize::from(decoder.width()),
        usize::from(decoder.height()),
        4,
        options
    )?;
    Ok(decoder)
}

pub(crate) fn probe(
    data: &[u8], options: &DecoderOptions
) -> Result<(usize, usize, ColorSpace), StbiErrors> {
    let decoder = read_headers(data, options)?;

    Ok((
        usize::from(decoder.width()),
        usize::from(decoder.height()),
        ColorSpace::RGBA
    ))
}

pub(crate) fn decode(data: &[u8], options: &DecoderOptions) -> Result<RawImage, StbiErrors> {
    let mut decoder = read_headers(data, options)?;

    let width = usize::from(decoder.width());
    let height = usize::from(decoder.height());

    let frame = decoder
        .read_next_frame()?
        .ok_or(StbiErrors::Generic("Gif contains no frames"))?;

    trace!(
        "Gif first frame: {}x{} at ({},{}) on a {}x{} screen",
        frame.width,
        frame.height,
        frame.left,
        frame.top,
        width,
        height
    );

    let frame_width = usize::from(frame.width);
    let left = usize::from(frame.left);
    let top = usize::from(frame.top);

    if frame.buffer.len() < frame_width * usize::from(frame.height) * 4 {
        return Err(StbiErrors::Generic("Gif frame buffer is too small"));
    }

    // screen size was checked against the byte budget in read_headers
    let mut pixels = zeroed_buffer(width * height * 4)?;

    if frame_width != 0 && left < width {
        // frames may hang off the logical screen, clip them
        let copy_width = frame_width.min(width - left);

        for (y, in_row) in frame
            .buffer
            .chunks_exact(frame_width * 4)
            .take(usize::from(frame.height))
            .enumerate()
        {
            let out_y = top + y;
            if out_y >= height {
                break;
            }
            let start = (out_y * width + left) * 4;
            pixels[start..start + copy_width * 4].copy_from_slice(&in_row[..copy_width * 4]);
        }
    }

    Ok(RawImage {
        pixels,
        width,
        height,
        colorspace: ColorSpace::RGBA
    })
}
