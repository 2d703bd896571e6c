/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::{c_int, c_uchar, c_void};

/// \brief Free pixels returned by `stbi_load_from_memory`
///
/// Passing null is a no-op
///
/// \param retval_from_stbi_load: A pointer returned by `stbi_load_from_memory`
#[no_mangle]
pub unsafe extern "C" fn stbi_image_free(retval_from_stbi_load: *mut c_void) {
    libc::free(retval_from_stbi_load)
}

/// Copy `pixels` into a buffer allocated with `libc::malloc`
///
/// Returns null if allocation fails
pub(crate) fn copy_to_malloc(pixels: &[u8]) -> *mut c_uchar {
    // malloc(0) may return null, never ask for zero bytes
    let size = pixels.len().max(1);
    let mem = unsafe { libc::malloc(size) }.cast::<c_uchar>();

    if !mem.is_null() {
        unsafe { std::ptr::copy_nonoverlapping(pixels.as_ptr(), mem, pixels.len()) };
    }
    mem
}

/// Write `value` to `ptr` if it is not null
pub(crate) unsafe fn write_out(ptr: *mut c_int, value: usize) {
    if !ptr.is_null() {
        *ptr = c_int::try_from(value).unwrap_or(c_int::MAX);
    }
}
