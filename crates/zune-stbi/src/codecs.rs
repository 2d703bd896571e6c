/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Format detection and decoder dispatch
//!
//! Each submodule wraps one upstream decoder and exposes two functions,
//! `probe` which reads headers only and `decode` which returns 8-bit pixels
//! in the layout the file stores them in.
use log::trace;
use zune_core::colorspace::ColorSpace;
use zune_core::options::DecoderOptions;

use crate::errors::StbiErrors;
use crate::MAX_IMAGE_BYTES;

mod gif;
mod image_rs;
mod jpeg;
mod png;
mod qoi;

/// All image formats the loader can decode
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ImageFormat {
    /// Portable Network Graphics
    PNG,
    /// Joint Photographic Experts Group
    JPEG,
    /// Graphics Interchange Format, first frame only
    GIF,
    /// Quite Okay Image
    QOI,
    /// Windows Bitmap Files
    BMP,
    /// Netpbm family, `P1` to `P7`
    PNM,
    /// WebP, lossy and lossless
    WEBP
}

impl ImageFormat {
    /// Short lowercase name of the format
    pub const fn name(self) -> &'static str {
        match self {
            ImageFormat::PNG => "png",
            ImageFormat::JPEG => "jpeg",
            ImageFormat::GIF => "gif",
            ImageFormat::QOI => "qoi",
            ImageFormat::BMP => "bmp",
            ImageFormat::PNM => "pnm",
            ImageFormat::WEBP => "webp"
        }
    }

    /// Guess the format of `data` from its magic bytes
    ///
    /// See [`guess_format`]
    pub fn guess_format(data: &[u8]) -> Option<ImageFormat> {
        guess_format(data)
    }

    pub(crate) fn probe(
        self, data: &[u8], options: &DecoderOptions
    ) -> Result<(usize, usize, ColorSpace), StbiErrors> {
        match self {
            ImageFormat::PNG => png::probe(data, options),
            ImageFormat::JPEG => jpeg::probe(data, options),
            ImageFormat::GIF => gif::probe(data, options),
            ImageFormat::QOI => qoi::probe(data, options),
            ImageFormat::BMP => image_rs::probe(data, image::ImageFormat::Bmp, options),
            ImageFormat::PNM => image_rs::probe(data, image::ImageFormat::Pnm, options),
            ImageFormat::WEBP => image_rs::probe(data, image::ImageFormat::WebP, options)
        }
    }

    pub(crate) fn decode(
        self, data: &[u8], options: &DecoderOptions
    ) -> Result<RawImage, StbiErrors> {
        let image = match self {
            ImageFormat::PNG => png::decode(data, options),
            ImageFormat::JPEG => jpeg::decode(data, options),
            ImageFormat::GIF => gif::decode(data, options),
            ImageFormat::QOI => qoi::decode(data, options),
            ImageFormat::BMP => image_rs::decode(data, image::ImageFormat::Bmp, options),
            ImageFormat::PNM => image_rs::decode(data, image::ImageFormat::Pnm, options),
            ImageFormat::WEBP => image_rs::decode(data, image::ImageFormat::WebP, options)
        }?;
        image.validate()?;
        Ok(image)
    }
}

/// Guess the format of an encoded image from its magic bytes
///
/// Returns `None` if no supported format matches.
///
/// # Example
/// ```
/// use zune_stbi::{guess_format, ImageFormat};
///
/// assert_eq!(guess_format(b"qoif\x00\x00\x00\x01"), Some(ImageFormat::QOI));
/// assert_eq!(guess_format(b"hello"), None);
/// ```
pub fn guess_format(data: &[u8]) -> Option<ImageFormat> {
    let magic_bytes: [(&[u8], ImageFormat); 13] = [
        (&[137, 80, 78, 71, 13, 10, 26, 10], ImageFormat::PNG),
        (&[0xff, 0xd8], ImageFormat::JPEG),
        (b"GIF87a", ImageFormat::GIF),
        (b"GIF89a", ImageFormat::GIF),
        (b"qoif", ImageFormat::QOI),
        (b"BM", ImageFormat::BMP),
        (b"P1", ImageFormat::PNM),
        (b"P2", ImageFormat::PNM),
        (b"P3", ImageFormat::PNM),
        (b"P4", ImageFormat::PNM),
        (b"P5", ImageFormat::PNM),
        (b"P6", ImageFormat::PNM),
        (b"P7", ImageFormat::PNM)
    ];

    for (magic, format) in magic_bytes {
        if data.starts_with(magic) {
            trace!("Guessed format: {:?}", format);
            return Some(format);
        }
    }
    // RIFF <size> WEBP
    if data.len() >= 12 && &data[..4] == b"RIFF" && &data[8..12] == b"WEBP" {
        trace!("Guessed format: {:?}", ImageFormat::WEBP);
        return Some(ImageFormat::WEBP);
    }
    None
}

/// Pixels as produced by a decoder, before channel conversion
pub(crate) struct RawImage {
    pub(crate) pixels:     Vec<u8>,
    pub(crate) width:      usize,
    pub(crate) height:     usize,
    pub(crate) colorspace: ColorSpace
}

impl RawImage {
    fn validate(&self) -> Result<(), StbiErrors> {
        if self.width == 0 || self.height == 0 {
            return Err(StbiErrors::ZeroDimensions);
        }
        let expected = self
            .width
            .checked_mul(self.height)
            .and_then(|x| x.checked_mul(self.colorspace.num_components()))
            .ok_or(StbiErrors::Generic("Image dimensions overflow"))?;

        if self.pixels.len() != expected {
            return Err(StbiErrors::Generic(
                "Decoder output does not match image dimensions"
            ));
        }
        Ok(())
    }
}

/// Check image dimensions against the configured limits
///
/// `components` is the number of bytes per pixel the caller is about to
/// allocate for, the whole buffer must fit in [`MAX_IMAGE_BYTES`].
pub(crate) fn check_dimensions(
    width: usize, height: usize, components: usize, options: &DecoderOptions
) -> Result<(), StbiErrors> {
    if width == 0 || height == 0 {
        return Err(StbiErrors::ZeroDimensions);
    }
    if width > options.max_width() {
        return Err(StbiErrors::TooLargeDimensions(
            "width",
            options.max_width(),
            width
        ));
    }
    if height > options.max_height() {
        return Err(StbiErrors::TooLargeDimensions(
            "height",
            options.max_height(),
            height
        ));
    }
    let size = width
        .checked_mul(height)
        .and_then(|x| x.checked_mul(components))
        .unwrap_or(usize::MAX);

    if size > MAX_IMAGE_BYTES {
        return Err(StbiErrors::TooLargeImage(MAX_IMAGE_BYTES, size));
    }
    Ok(())
}

/// Allocate a zeroed buffer, reporting allocation failure as an error
pub(crate) fn zeroed_buffer(size: usize) -> Result<Vec<u8>, StbiErrors> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(size)
        .map_err(|_| StbiErrors::OutOfMemory(size))?;
    buffer.resize(size, 0);
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use zune_core::options::DecoderOptions;

    use crate::codecs::{check_dimensions, guess_format, zeroed_buffer, ImageFormat};
    use crate::errors::StbiErrors;
    use crate::MAX_IMAGE_BYTES;

    #[test]
    fn guess_known_signatures() {
        assert_eq!(
            guess_format(&[137, 80, 78, 71, 13, 10, 26, 10, 0]),
            Some(ImageFormat::PNG)
        );
        assert_eq!(guess_format(&[0xff, 0xd8, 0xff, 0xe0]), Some(ImageFormat::JPEG));
        assert_eq!(guess_format(b"GIF89a...."), Some(ImageFormat::GIF));
        assert_eq!(guess_format(b"GIF87a...."), Some(ImageFormat::GIF));
        assert_eq!(guess_format(b"qoif"), Some(ImageFormat::QOI));
        assert_eq!(guess_format(b"BM\x00\x00"), Some(ImageFormat::BMP));
        assert_eq!(guess_format(b"P6\n1 1\n255\n"), Some(ImageFormat::PNM));
        assert_eq!(guess_format(b"RIFF\x10\x00\x00\x00WEBPVP8L"), Some(ImageFormat::WEBP));
    }

    #[test]
    fn guess_rejects_near_misses() {
        assert_eq!(guess_format(&[]), None);
        assert_eq!(guess_format(&[137, 80, 78]), None);
        assert_eq!(guess_format(b"GIF90a"), None);
        assert_eq!(guess_format(b"RIFF\x10\x00\x00\x00WAVE"), None);
        assert_eq!(guess_format(b"P8"), None);
    }

    #[test]
    fn dimension_limits() {
        let options = DecoderOptions::default()
            .set_max_width(100)
            .set_max_height(50);

        assert!(check_dimensions(100, 50, 4, &options).is_ok());
        assert!(matches!(
            check_dimensions(0, 10, 4, &options),
            Err(StbiErrors::ZeroDimensions)
        ));
        assert!(matches!(
            check_dimensions(101, 10, 4, &options),
            Err(StbiErrors::TooLargeDimensions("width", 100, 101))
        ));
        assert!(matches!(
            check_dimensions(10, 51, 4, &options),
            Err(StbiErrors::TooLargeDimensions("height", 50, 51))
        ));
    }

    #[test]
    fn byte_budget() {
        let options = DecoderOptions::default()
            .set_max_width(1 << 24)
            .set_max_height(1 << 24);

        assert!(check_dimensions(16384, 16384, 4, &options).is_ok());
        assert!(matches!(
            check_dimensions(40000, 40000, 4, &options),
            Err(StbiErrors::TooLargeImage(MAX_IMAGE_BYTES, _))
        ));
        // the same screen fits when a single channel is allocated
        assert!(check_dimensions(40000, 40000, 1, &options).is_ok());
        assert!(matches!(
            check_dimensions(1 << 24, 1 << 24, 4, &options),
            Err(StbiErrors::TooLargeImage(..))
        ));
    }

    #[test]
    fn zeroed_buffer_reports_allocation_failure() {
        assert_eq!(zeroed_buffer(16).unwrap(), vec![0; 16]);
        assert!(matches!(
            zeroed_buffer(usize::MAX),
            Err(StbiErrors::OutOfMemory(usize::MAX))
        ));
    }
}
