/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Synthetic images used by the benchmarks
use nanorand::{Rng, WyRand};

/// Width and height of the benchmark images
pub const BENCH_DIMENSIONS: (usize, usize) = (1024, 768);

/// A smooth gradient with some noise, compresses roughly like a photo
pub fn sample_pixels(channels: usize) -> Vec<u8> {
    let (width, height) = BENCH_DIMENSIONS;
    let mut pixels = Vec::with_capacity(width * height * channels);
    let mut rng = WyRand::new_seed(0x9E37_79B9);

    for y in 0..height {
        for x in 0..width {
            let noise = rng.generate_range(0_usize..8);

            for c in 0..channels {
                pixels.push(((x / 4 + y / 3 + c * 60 + noise) & 255) as u8);
            }
        }
    }
    pixels
}

pub fn sample_png(channels: usize) -> Vec<u8> {
    let (width, height) = BENCH_DIMENSIONS;
    let color = match channels {
        1 => png::ColorType::Grayscale,
        2 => png::ColorType::GrayscaleAlpha,
        3 => png::ColorType::Rgb,
        _ => png::ColorType::Rgba
    };
    let mut output = vec![];
    {
        let mut encoder = png::Encoder::new(&mut output, width as u32, height as u32);
        encoder.set_color(color);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(&sample_pixels(channels)).unwrap();
        writer.finish().unwrap();
    }
    output
}

pub fn sample_jpeg() -> Vec<u8> {
    let (width, height) = BENCH_DIMENSIONS;
    let mut output = vec![];
    jpeg_encoder::Encoder::new(&mut output, 90)
        .encode(
            &sample_pixels(3),
            width as u16,
            height as u16,
            jpeg_encoder::ColorType::Rgb
        )
        .unwrap();
    output
}

pub fn sample_qoi(channels: usize) -> Vec<u8> {
    let (width, height) = BENCH_DIMENSIONS;
    qoi::encode_to_vec(sample_pixels(channels), width as u32, height as u32).unwrap()
}
