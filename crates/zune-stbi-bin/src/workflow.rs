/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;
use std::time::Instant;

use clap::ArgMatches;
use log::info;
use zune_core::options::DecoderOptions;
use zune_stbi::load_from_memory_with_options;

use crate::bench::bench_files;
use crate::errors::CliErrors;
use crate::probe_files::probe_input_files;

pub(crate) fn decode_file(args: &ArgMatches, options: DecoderOptions) -> Result<(), CliErrors> {
    let Some(file) = args.get_one::<PathBuf>("file") else {
        return Ok(());
    };
    let channels = args.get_one::<usize>("channels").copied().unwrap_or(0);

    let data = std::fs::read(file).map_err(|x| CliErrors::IoErrors(file.clone(), x))?;

    let start = Instant::now();
    let image = load_from_memory_with_options(&data, channels, options)
        .map_err(|x| CliErrors::StbiErrors(file.clone(), x))?;
    info!("Decoded in {:?}", start.elapsed());

    println!(
        "{}: {}x{} {}, {} channels in file, {} channels out",
        file.display(),
        image.width(),
        image.height(),
        image.format().name(),
        image.source_channels(),
        image.output_channels()
    );

    if let Some(out) = args.get_one::<PathBuf>("out") {
        info!("Writing {} bytes to {}", image.pixels().len(), out.display());
        std::fs::write(out, image.pixels()).map_err(|x| CliErrors::IoErrors(out.clone(), x))?;
    }
    Ok(())
}

pub(crate) fn create_and_exec_workflow_from_cmd(args: &ArgMatches) -> Result<(), CliErrors> {
    let options = crate::cmd_parsers::get_decoder_options(args);

    match args.subcommand() {
        Some(("probe", sub)) => {
            probe_input_files(sub, options);
            Ok(())
        }
        Some(("decode", sub)) => decode_file(sub, options),
        Some(("bench", sub)) => bench_files(sub, options),
        _ => Ok(())
    }
}
