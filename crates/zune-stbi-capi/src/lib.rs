/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! stb_image compatible C bindings to zune-stbi
//!
//! Exports
//! ```c
//! unsigned char *stbi_load_from_memory(const unsigned char *buffer, int len,
//!                                      int *x, int *y, int *channels_in_file,
//!                                      int desired_channels);
//! int stbi_info_from_memory(const unsigned char *buffer, int len, int *x, int *y, int *comp);
//! void stbi_image_free(void *retval_from_stbi_load);
//! const char *stbi_failure_reason(void);
//! ```
//! Pixels are allocated with `malloc`, release them with `stbi_image_free`.
pub use errno::stbi_failure_reason;
pub use load::{stbi_info_from_memory, stbi_load_from_memory, STBI_MAX_DIMENSIONS};
pub use utils::stbi_image_free;

mod errno;
mod load;
mod utils;
