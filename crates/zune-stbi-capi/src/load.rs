/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::{c_int, c_uchar};
use std::ptr;

use log::trace;
use zune_core::options::DecoderOptions;
use zune_stbi::{info_from_memory_with_options, load_from_memory_with_options};

use crate::errno::set_failure_reason;
use crate::utils::{copy_to_malloc, write_out};

/// Largest width or height accepted through the C interface
///
/// The decoded pixels must also fit in [`zune_stbi::MAX_IMAGE_BYTES`].
pub const STBI_MAX_DIMENSIONS: usize = 1 << 24;

fn stbi_options() -> DecoderOptions {
    DecoderOptions::default()
        .set_max_width(STBI_MAX_DIMENSIONS)
        .set_max_height(STBI_MAX_DIMENSIONS)
}

/// Turn a `(pointer, length)` pair into a slice, recording a failure reason if invalid
unsafe fn input_slice<'a>(buffer: *const c_uchar, len: c_int) -> Option<&'a [u8]> {
    if buffer.is_null() {
        set_failure_reason("no data");
        return None;
    }
    match usize::try_from(len) {
        Ok(len) => Some(std::slice::from_raw_parts(buffer, len)),
        Err(_) => {
            set_failure_reason("bad length");
            None
        }
    }
}

/// \brief Decode an image in memory
///
/// @param buffer: Encoded image, must be valid for `len` bytes, it is not modified
///
/// @param len: Number of bytes in `buffer`, negative values are rejected
///
/// @param x: After successful decoding, the image width, can be null
///
/// @param y: After successful decoding, the image height, can be null
///
/// @param channels_in_file: After successful decoding, the number of channels in the file, can be null
///
/// @param desired_channels: `0` to keep the file's channels, or `1` to `4`
///
/// \returns A pointer to `x * y * (desired_channels ? desired_channels : channels_in_file)` bytes,
/// free it with `stbi_image_free`. On failure returns null, leaves the out parameters
/// untouched and `stbi_failure_reason` reports why.
#[no_mangle]
pub unsafe extern "C" fn stbi_load_from_memory(
    buffer: *const c_uchar, len: c_int, x: *mut c_int, y: *mut c_int,
    channels_in_file: *mut c_int, desired_channels: c_int
) -> *mut c_uchar {
    let Some(data) = input_slice(buffer, len) else {
        return ptr::null_mut();
    };
    let desired = match usize::try_from(desired_channels) {
        Ok(desired) if desired <= zune_stbi::MAX_CHANNELS => desired,
        _ => {
            set_failure_reason("bad req_comp");
            return ptr::null_mut();
        }
    };

    match load_from_memory_with_options(data, desired, stbi_options()) {
        Ok(image) => {
            let output = copy_to_malloc(image.pixels());

            if output.is_null() {
                set_failure_reason("outofmem");
                return ptr::null_mut();
            }
            trace!(
                "Decoded {}x{} image with {} channels",
                image.width(),
                image.height(),
                image.source_channels()
            );
            write_out(x, image.width());
            write_out(y, image.height());
            write_out(channels_in_file, image.source_channels());

            output
        }
        Err(err) => {
            set_failure_reason(err.failure_reason());
            ptr::null_mut()
        }
    }
}

/// \brief Read image dimensions and channels without decoding pixels
///
/// @param buffer: Encoded image, must be valid for `len` bytes
///
/// @param len: Number of bytes in `buffer`
///
/// @param x: Image width, can be null
///
/// @param y: Image height, can be null
///
/// @param comp: Number of channels in the file, can be null
///
/// \returns 1 on success, 0 on failure
#[no_mangle]
pub unsafe extern "C" fn stbi_info_from_memory(
    buffer: *const c_uchar, len: c_int, x: *mut c_int, y: *mut c_int, comp: *mut c_int
) -> c_int {
    let Some(data) = input_slice(buffer, len) else {
        return 0;
    };

    match info_from_memory_with_options(data, stbi_options()) {
        Ok(info) => {
            write_out(x, info.width);
            write_out(y, info.height);
            write_out(comp, info.channels());
            1
        }
        Err(err) => {
            set_failure_reason(err.failure_reason());
            0
        }
    }
}
