/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::path::PathBuf;

use zune_stbi::StbiErrors;

/// Errors that stop a command
pub enum CliErrors {
    /// Reading or writing a file failed
    IoErrors(PathBuf, std::io::Error),
    /// Decoding failed
    StbiErrors(PathBuf, StbiErrors),
    /// None of the files given to `bench` could be decoded
    NothingDecoded
}

impl Debug for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CliErrors::IoErrors(path, err) => {
                writeln!(f, "{}: {err}", path.display())
            }
            CliErrors::StbiErrors(path, err) => {
                // inner debug output already ends the line
                write!(f, "{}: {err:?}", path.display())
            }
            CliErrors::NothingDecoded => writeln!(f, "No image could be decoded")
        }
    }
}

/// Single line form, used when a failure is logged and the run continues
impl Display for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CliErrors::IoErrors(path, err) => write!(f, "{}: {err}", path.display()),
            CliErrors::StbiErrors(path, err) => {
                write!(f, "{}: {}", path.display(), err.failure_reason())
            }
            CliErrors::NothingDecoded => write!(f, "No image could be decoded")
        }
    }
}
