/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::ArgMatches;
use log::warn;
use zune_core::options::DecoderOptions;
use zune_stbi::info_from_memory_with_options;

/// Probe input files and print their header information to standard output
///
/// Files that cannot be read or recognised are reported and skipped
pub fn probe_input_files(args: &ArgMatches, options: DecoderOptions) {
    let Some(files) = args.get_many::<PathBuf>("files") else {
        return;
    };
    for file in files {
        let data = match std::fs::read(file) {
            Ok(data) => data,
            Err(err) => {
                warn!("Could not read {}: {err}", file.display());
                continue;
            }
        };
        match info_from_memory_with_options(&data, options) {
            Ok(info) => {
                println!(
                    "{}: {}x{}, {} channels ({:?}), {}, {} bytes",
                    file.display(),
                    info.width,
                    info.height,
                    info.channels(),
                    info.colorspace,
                    info.format.name(),
                    data.len()
                );
            }
            Err(err) => warn!("Could not probe {}: {}", file.display(), err.failure_reason())
        }
    }
}
