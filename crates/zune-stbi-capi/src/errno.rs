/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Per thread failure reasons
use std::cell::RefCell;
use std::ffi::{c_char, CString};
use std::ptr;

use log::warn;

thread_local! {
    static FAILURE_REASON: RefCell<Option<CString>> = const { RefCell::new(None) };
}

/// Record why the last call on this thread failed
pub(crate) fn set_failure_reason(reason: &'static str) {
    warn!("stbi call failed: {reason}");

    FAILURE_REASON.with(|cell| {
        *cell.borrow_mut() = CString::new(reason).ok();
    });
}

/// \brief Return a short description of the last failure on the calling thread
///
/// The string is owned by the library and stays valid until the next failing
/// call on the same thread. Do not free it.
///
/// \returns A null terminated string, or null if no call on this thread has failed
#[no_mangle]
pub extern "C" fn stbi_failure_reason() -> *const c_char {
    FAILURE_REASON.with(|cell| match cell.borrow().as_ref() {
        Some(reason) => reason.as_ptr(),
        None => ptr::null()
    })
}
