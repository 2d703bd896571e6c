/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Interleaved 8-bit channel conversion
//!
//! Decoders hand us pixels in the layout found in the file, callers may ask
//! for a different number of channels. This module converts between
//! the four layouts the loader deals with, `Luma`, `LumaA`, `RGB` and `RGBA`.
//!
//! The conversion rules are the same ones `stb_image` uses
//!
//! - Grayscale from color uses the integer weights `(77 r + 150 g + 29 b) >> 8`
//! - A newly added alpha channel is fully opaque (`255`)
//! - Removing alpha drops it, colors are not premultiplied
use log::debug;
use zune_core::colorspace::ColorSpace;

use crate::codecs::zeroed_buffer;
use crate::errors::StbiErrors;

/// Return the colorspace whose pixels have `channels` components
///
/// Returns `None` for anything outside `1..=4`
pub const fn colorspace_for_channels(channels: usize) -> Option<ColorSpace> {
    match channels {
        1 => Some(ColorSpace::Luma),
        2 => Some(ColorSpace::LumaA),
        3 => Some(ColorSpace::RGB),
        4 => Some(ColorSpace::RGBA),
        _ => None
    }
}

#[inline(always)]
fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((u32::from(r) * 77 + u32::from(g) * 150 + u32::from(b) * 29) >> 8) as u8
}

fn map_pixels<F>(
    pixels: &[u8], in_components: usize, out_components: usize, func: F
) -> Result<Vec<u8>, StbiErrors>
where
    F: Fn(&[u8], &mut [u8])
{
    let size = (pixels.len() / in_components)
        .checked_mul(out_components)
        .ok_or(StbiErrors::OutOfMemory(usize::MAX))?;
    let mut output = zeroed_buffer(size)?;

    for (in_px, out_px) in pixels
        .chunks_exact(in_components)
        .zip(output.chunks_exact_mut(out_components))
    {
        func(in_px, out_px);
    }
    Ok(output)
}

fn check_colorspace(colorspace: ColorSpace) -> Result<usize, StbiErrors> {
    match colorspace {
        ColorSpace::Luma | ColorSpace::LumaA | ColorSpace::RGB | ColorSpace::RGBA => {
            Ok(colorspace.num_components())
        }
        _ => Err(StbiErrors::UnsupportedColorspace(colorspace))
    }
}

/// Convert interleaved 8-bit pixels from one colorspace to another
///
/// If `from` and `to` are the same, `pixels` is returned untouched without copying.
///
/// # Errors
/// - `UnsupportedColorspace`: Either colorspace is not one of `Luma`, `LumaA`, `RGB` or `RGBA`
/// - `Generic`: The length of `pixels` is not a multiple of the components in `from`
pub fn convert_channels(
    pixels: Vec<u8>, from: ColorSpace, to: ColorSpace
) -> Result<Vec<u8>, StbiErrors> {
    let in_components = check_colorspace(from)?;
    let out_components = check_colorspace(to)?;

    if pixels.len() % in_components != 0 {
        return Err(StbiErrors::Generic(
            "Pixel buffer length is not a multiple of the number of channels"
        ));
    }
    if from == to {
        return Ok(pixels);
    }
    debug!("Converting pixels from {:?} to {:?}", from, to);

    let output = match (from, to) {
        (ColorSpace::Luma, ColorSpace::LumaA) => {
            map_pixels(&pixels, in_components, out_components, |i, o| {
                o[0] = i[0];
                o[1] = 255;
            })
        }
        (ColorSpace::Luma, ColorSpace::RGB) => {
            map_pixels(&pixels, in_components, out_components, |i, o| {
                o.fill(i[0]);
            })
        }
        (ColorSpace::Luma, ColorSpace::RGBA) => {
            map_pixels(&pixels, in_components, out_components, |i, o| {
                o[..3].fill(i[0]);
                o[3] = 255;
            })
        }
        (ColorSpace::LumaA, ColorSpace::Luma) => {
            map_pixels(&pixels, in_components, out_components, |i, o| {
                o[0] = i[0];
            })
        }
        (ColorSpace::LumaA, ColorSpace::RGB) => {
            map_pixels(&pixels, in_components, out_components, |i, o| {
                o.fill(i[0]);
            })
        }
        (ColorSpace::LumaA, ColorSpace::RGBA) => {
            map_pixels(&pixels, in_components, out_components, |i, o| {
                o[..3].fill(i[0]);
                o[3] = i[1];
            })
        }
        (ColorSpace::RGB, ColorSpace::Luma) => {
            map_pixels(&pixels, in_components, out_components, |i, o| {
                o[0] = luma(i[0], i[1], i[2]);
            })
        }
        (ColorSpace::RGB, ColorSpace::LumaA) => {
            map_pixels(&pixels, in_components, out_components, |i, o| {
                o[0] = luma(i[0], i[1], i[2]);
                o[1] = 255;
            })
        }
        (ColorSpace::RGB, ColorSpace::RGBA) => {
            map_pixels(&pixels, in_components, out_components, |i, o| {
                o[..3].copy_from_slice(i);
                o[3] = 255;
            })
        }
        (ColorSpace::RGBA, ColorSpace::Luma) => {
            map_pixels(&pixels, in_components, out_components, |i, o| {
                o[0] = luma(i[0], i[1], i[2]);
            })
        }
        (ColorSpace::RGBA, ColorSpace::LumaA) => {
            map_pixels(&pixels, in_components, out_components, |i, o| {
                o[0] = luma(i[0], i[1], i[2]);
                o[1] = i[3];
            })
        }
        (ColorSpace::RGBA, ColorSpace::RGB) => {
            map_pixels(&pixels, in_components, out_components, |i, o| {
                o.copy_from_slice(&i[..3]);
            })
        }
        _ => unreachable!("colorspaces were validated above")
    }?;
    Ok(output)
}
