/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decode throughput over a corpus of files
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use clap::ArgMatches;
use indicatif::ProgressBar;
use log::{debug, info, warn};
use walkdir::WalkDir;
use zune_core::options::DecoderOptions;
use zune_stbi::load_from_memory_with_options;

use crate::errors::CliErrors;

/// Set by the first Ctrl-C, the second one exits
static STOP: AtomicBool = AtomicBool::new(false);

/// Throughput summary, in megapixels per second
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BenchResults {
    /// Files found under the given paths
    pub total:       usize,
    pub decoded:     usize,
    pub skipped:     usize,
    /// The run was stopped before every file was visited
    pub interrupted: bool,
    pub mean:        f64,
    pub geo_mean:    f64
}

fn install_ctrlc_handler() {
    let result = ctrlc::set_handler(|| {
        if STOP.swap(true, Ordering::SeqCst) {
            std::process::exit(0);
        }
    });
    if let Err(err) = result {
        warn!("Could not install Ctrl-C handler: {err}");
    }
}

pub fn mean(speeds: &[f64]) -> f64 {
    if speeds.is_empty() {
        return 0.0;
    }
    speeds.iter().sum::<f64>() / speeds.len() as f64
}

pub fn geometric_mean(speeds: &[f64]) -> f64 {
    if speeds.is_empty() {
        return 0.0;
    }
    // sum of logs, a running product overflows on large corpora
    let log_sum: f64 = speeds.iter().map(|x| x.ln()).sum();
    (log_sum / speeds.len() as f64).exp()
}

/// Collect every file under `paths`, directories are walked recursively
pub fn collect_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        for entry in WalkDir::new(path).sort_by_file_name() {
            match entry {
                Ok(entry) if entry.file_type().is_file() => files.push(entry.into_path()),
                Ok(_) => {}
                Err(err) => warn!("Skipping {}: {err}", path.display())
            }
        }
    }
    files
}

fn decode_one(
    path: &Path, desired_channels: usize, options: DecoderOptions
) -> Result<f64, CliErrors> {
    let data = std::fs::read(path).map_err(|x| CliErrors::IoErrors(path.to_path_buf(), x))?;

    let start = Instant::now();
    let image = load_from_memory_with_options(&data, desired_channels, options)
        .map_err(|x| CliErrors::StbiErrors(path.to_path_buf(), x))?;
    let elapsed = start.elapsed().as_secs_f64().max(f64::EPSILON);

    let megapixels = (image.width() * image.height()) as f64 / 1_000_000.0;
    let speed = megapixels / elapsed;

    debug!(
        "{}: {}x{} in {:.3} ms, {:.1} MP/s",
        path.display(),
        image.width(),
        image.height(),
        elapsed * 1000.0,
        speed
    );
    Ok(speed)
}

/// Decode every file under `paths` and summarise the throughput
///
/// `stop` is checked after each file, once set the file in flight
/// finishes and the results so far are returned.
pub fn run_bench(
    paths: &[PathBuf], desired_channels: usize, options: DecoderOptions, stop: &AtomicBool
) -> Result<BenchResults, CliErrors> {
    let files = collect_files(paths);
    info!("Benchmarking {} files", files.len());

    let bar = ProgressBar::new(files.len() as u64);
    let mut speeds = Vec::with_capacity(files.len());
    let mut skipped = 0;
    let mut interrupted = false;

    for (i, file) in files.iter().enumerate() {
        match decode_one(file, desired_channels, options) {
            Ok(speed) => speeds.push(speed),
            Err(err) => {
                bar.suspend(|| warn!("Skipping {err}"));
                skipped += 1;
            }
        }
        bar.inc(1);

        if stop.load(Ordering::SeqCst) && i + 1 < files.len() {
            interrupted = true;
            break;
        }
    }
    bar.finish_and_clear();

    if speeds.is_empty() {
        return Err(CliErrors::NothingDecoded);
    }

    Ok(BenchResults {
        total: files.len(),
        decoded: speeds.len(),
        skipped,
        interrupted,
        mean: mean(&speeds),
        geo_mean: geometric_mean(&speeds)
    })
}

pub fn bench_files(args: &ArgMatches, options: DecoderOptions) -> Result<(), CliErrors> {
    let paths: Vec<PathBuf> = args
        .get_many::<PathBuf>("paths")
        .map(|x| x.cloned().collect())
        .unwrap_or_default();
    let channels = args.get_one::<usize>("channels").copied().unwrap_or(0);

    install_ctrlc_handler();
    let results = run_bench(&paths, channels, options, &STOP)?;

    if results.interrupted {
        println!(
            "interrupted after {} of {} files",
            results.decoded + results.skipped,
            results.total
        );
    }
    println!(
        "decoded {} files, skipped {}",
        results.decoded, results.skipped
    );
    println!("mean:    {:>8.2} MP/s", results.mean);
    println!("geomean: {:>8.2} MP/s", results.geo_mean);

    Ok(())
}
