/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Fixtures shared by the integration tests, all generated at runtime
#![allow(dead_code)]

use image::ExtendedColorType;
use nanorand::{Rng, WyRand};

/// Deterministic pseudo random bytes
pub fn random_bytes(seed: u64, length: usize) -> Vec<u8> {
    let mut rng = WyRand::new_seed(seed);
    let mut data = vec![0_u8; length];
    rng.fill_bytes(&mut data);
    data
}

/// A gradient that differs in every channel, so channel mixups show
pub fn gradient(width: usize, height: usize, channels: usize) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width * height * channels);
    for y in 0..height {
        for x in 0..width {
            for c in 0..channels {
                pixels.push(((x * 37 + y * 91 + c * 53) % 256) as u8);
            }
        }
    }
    pixels
}

pub fn encode_png(
    pixels: &[u8], width: u32, height: u32, color: png::ColorType, depth: png::BitDepth,
    palette: Option<Vec<u8>>, trns: Option<Vec<u8>>
) -> Vec<u8> {
    let mut output = vec![];
    {
        let mut encoder = png::Encoder::new(&mut output, width, height);
        encoder.set_color(color);
        encoder.set_depth(depth);
        if let Some(palette) = palette {
            encoder.set_palette(palette);
        }
        if let Some(trns) = trns {
            encoder.set_trns(trns);
        }
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(pixels).unwrap();
        writer.finish().unwrap();
    }
    output
}

pub fn encode_png_8bit(pixels: &[u8], width: u32, height: u32, color: png::ColorType) -> Vec<u8> {
    encode_png(pixels, width, height, color, png::BitDepth::Eight, None, None)
}

pub fn encode_jpeg(
    pixels: &[u8], width: u16, height: u16, color: jpeg_encoder::ColorType
) -> Vec<u8> {
    let mut output = vec![];
    let encoder = jpeg_encoder::Encoder::new(&mut output, 100);
    encoder.encode(pixels, width, height, color).unwrap();
    output
}

pub fn encode_qoi(pixels: &[u8], width: u32, height: u32) -> Vec<u8> {
    qoi::encode_to_vec(pixels, width, height).unwrap()
}

/// A gif whose only frame covers part of the logical screen
pub fn encode_gif(
    screen: (u16, u16), frame_pos: (u16, u16), frame_size: (u16, u16), indices: &[u8],
    palette: &[u8]
) -> Vec<u8> {
    let mut output = vec![];
    {
        let mut encoder = gif::Encoder::new(&mut output, screen.0, screen.1, &[]).unwrap();
        let mut frame = gif::Frame::from_palette_pixels(
            frame_size.0,
            frame_size.1,
            indices,
            palette,
            None
        );
        frame.left = frame_pos.0;
        frame.top = frame_pos.1;
        encoder.write_frame(&frame).unwrap();
        encoder.into_inner().unwrap();
    }
    output
}

pub fn encode_bmp(pixels: &[u8], width: u32, height: u32, color: ExtendedColorType) -> Vec<u8> {
    let mut output = vec![];
    image::codecs::bmp::BmpEncoder::new(&mut output)
        .encode(pixels, width, height, color)
        .unwrap();
    output
}

pub fn encode_webp(pixels: &[u8], width: u32, height: u32, color: ExtendedColorType) -> Vec<u8> {
    let mut output = vec![];
    image::codecs::webp::WebPEncoder::new_lossless(&mut output)
        .encode(pixels, width, height, color)
        .unwrap();
    output
}

/// Binary `P5`/`P6` netpbm file
pub fn encode_pnm(pixels: &[u8], width: usize, height: usize, channels: usize) -> Vec<u8> {
    let magic = if channels == 1 { "P5" } else { "P6" };
    let mut output = format!("{magic}\n{width} {height}\n255\n").into_bytes();
    output.extend_from_slice(pixels);
    output
}
