/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Cursor;

use png::{BitDepth, ColorType, Transformations};
use zune_core::colorspace::ColorSpace;
use zune_stbi::{info_from_memory, load_from_memory, ImageFormat};

mod common;

fn decode_ref(data: &[u8]) -> Vec<u8> {
    let mut decoder = png::Decoder::new(Cursor::new(data));
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);

    let mut reader = decoder.read_info().unwrap();

    let mut buf = vec![0; reader.output_buffer_size().unwrap()];
    let info = reader.next_frame(&mut buf).unwrap();
    buf.truncate(info.buffer_size());
    buf
}

#[test]
fn test_native_channels_two_by_two() {
    let pixels = [255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255];
    let data = common::encode_png_8bit(&pixels, 2, 2, ColorType::Rgb);

    let image = load_from_memory(&data, 0).unwrap();

    assert_eq!(image.dimensions(), (2, 2));
    assert!(matches!(image.source_channels(), 3 | 4));
    assert_eq!(image.pixels().len(), 4 * image.source_channels());
    assert_eq!(&image.pixels()[..3], &[255, 0, 0]);
    assert_eq!(image.format(), ImageFormat::PNG);
}

#[test]
fn test_rgb_to_rgba_alpha_is_opaque() {
    let pixels = common::gradient(2, 2, 3);
    let data = common::encode_png_8bit(&pixels, 2, 2, ColorType::Rgb);

    let image = load_from_memory(&data, 4).unwrap();

    assert_eq!(image.pixels().len(), 16);
    assert_eq!(image.source_channels(), 3);
    assert_eq!(image.output_colorspace(), ColorSpace::RGBA);

    for (rgba, rgb) in image.pixels().chunks_exact(4).zip(pixels.chunks_exact(3)) {
        assert_eq!(&rgba[..3], rgb);
        assert_eq!(rgba[3], 0xFF);
    }
}

#[test]
fn test_truncated_png_is_an_error() {
    let pixels = common::gradient(16, 16, 3);
    let data = common::encode_png_8bit(&pixels, 16, 16, ColorType::Rgb);

    assert!(load_from_memory(&data[..32], 0).is_err());
    assert!(info_from_memory(&data[..32]).is_err());
}

#[test]
fn test_same_output_as_png_crate() {
    let cases = [
        (ColorType::Grayscale, 1),
        (ColorType::GrayscaleAlpha, 2),
        (ColorType::Rgb, 3),
        (ColorType::Rgba, 4)
    ];
    for (color, channels) in cases {
        let pixels = common::gradient(33, 17, channels);
        let data = common::encode_png_8bit(&pixels, 33, 17, color);

        let image = load_from_memory(&data, 0).unwrap();

        assert_eq!(image.source_channels(), channels, "{color:?}");
        assert_eq!(image.pixels(), decode_ref(&data), "{color:?}");
        assert_eq!(image.pixels(), pixels, "{color:?}");
    }
}

#[test]
fn test_sixteen_bit_is_stripped() {
    let pixels: Vec<u8> = common::gradient(5, 3, 3)
        .iter()
        .flat_map(|x| [*x, 0x7f])
        .collect();
    let data = common::encode_png(&pixels, 5, 3, ColorType::Rgb, BitDepth::Sixteen, None, None);

    let image = load_from_memory(&data, 0).unwrap();

    assert_eq!(image.source_channels(), 3);
    assert_eq!(image.pixels(), common::gradient(5, 3, 3));
    assert_eq!(image.pixels(), decode_ref(&data));
}

#[test]
fn test_palette_is_expanded() {
    let palette = vec![10, 20, 30, 40, 50, 60];
    let indices = [0, 1, 1, 0];
    let data = common::encode_png(
        &indices,
        2,
        2,
        ColorType::Indexed,
        BitDepth::Eight,
        Some(palette.clone()),
        None
    );

    let image = load_from_memory(&data, 0).unwrap();
    assert_eq!(image.source_channels(), 3);
    assert_eq!(
        image.pixels(),
        &[10, 20, 30, 40, 50, 60, 40, 50, 60, 10, 20, 30]
    );

    // tRNS adds an alpha channel
    let data = common::encode_png(
        &indices,
        2,
        2,
        ColorType::Indexed,
        BitDepth::Eight,
        Some(palette),
        Some(vec![0, 255])
    );
    let image = load_from_memory(&data, 0).unwrap();
    assert_eq!(image.source_channels(), 4);
    assert_eq!(&image.pixels()[..8], &[10, 20, 30, 0, 40, 50, 60, 255]);
}

#[test]
fn test_low_bit_depth_grayscale() {
    // 1 bit, 8 pixels per byte
    let data = common::encode_png(
        &[0b1010_0000, 0b0101_0000],
        4,
        2,
        ColorType::Grayscale,
        BitDepth::One,
        None,
        None
    );
    let image = load_from_memory(&data, 1).unwrap();
    assert_eq!(image.pixels(), &[255, 0, 255, 0, 0, 255, 0, 255]);
}

#[test]
fn test_length_for_every_desired_channel_count() {
    let pixels = common::gradient(7, 9, 4);
    let data = common::encode_png_8bit(&pixels, 7, 9, ColorType::Rgba);

    for desired in 0..=4 {
        let image = load_from_memory(&data, desired).unwrap();
        let effective = if desired == 0 { 4 } else { desired };

        assert_eq!(image.output_channels(), effective);
        assert_eq!(image.pixels().len(), 7 * 9 * effective);
    }
}

#[test]
fn test_input_is_not_modified() {
    let pixels = common::gradient(8, 8, 3);
    let data = common::encode_png_8bit(&pixels, 8, 8, ColorType::Rgb);
    let copy = data.clone();

    for desired in 0..=4 {
        let _ = load_from_memory(&data, desired).unwrap();
        let _ = info_from_memory(&data).unwrap();
    }
    assert_eq!(data, copy);
}

#[test]
fn test_info_matches_decode() {
    let pixels = common::gradient(12, 5, 2);
    let data = common::encode_png_8bit(&pixels, 12, 5, ColorType::GrayscaleAlpha);

    let info = info_from_memory(&data).unwrap();
    let image = load_from_memory(&data, 0).unwrap();

    assert_eq!((info.width, info.height), image.dimensions());
    assert_eq!(info.colorspace, ColorSpace::LumaA);
    assert_eq!(info.channels(), image.source_channels());
    assert_eq!(info.format, ImageFormat::PNG);
}
