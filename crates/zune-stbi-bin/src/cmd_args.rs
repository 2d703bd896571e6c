/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

/// Parse `--channels`, either `native` or a number between 0 and 4
pub fn parse_channels(value: &str) -> Result<usize, String> {
    if value.eq_ignore_ascii_case("native") {
        return Ok(0);
    }
    match value.parse::<usize>() {
        Ok(channels) if channels <= zune_stbi::MAX_CHANNELS => Ok(channels),
        _ => Err(format!(
            "expected `native` or a number between 0 and {}, found `{value}`",
            zune_stbi::MAX_CHANNELS
        ))
    }
}

fn channels_arg() -> Arg {
    Arg::new("channels")
        .long("channels")
        .short('c')
        .help("Number of channels to decode to, `native` keeps the layout of the file")
        .default_value("native")
        .value_parser(parse_channels)
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("zune-stbi")
        .about("Load images from memory, stb_image style")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new("probe")
            .about("Print width, height, channels and format of images")
            .arg(Arg::new("files")
                .help("Images to probe")
                .action(ArgAction::Append)
                .value_parser(value_parser!(PathBuf))
                .required(true)))
        .subcommand(Command::new("decode")
            .about("Decode an image and optionally write the raw pixels")
            .arg(Arg::new("file")
                .help("Image to decode")
                .value_parser(value_parser!(PathBuf))
                .required(true))
            .arg(channels_arg())
            .arg(Arg::new("out")
                .short('o')
                .long("out")
                .help("Write raw interleaved pixels to this file")
                .value_parser(value_parser!(PathBuf))))
        .subcommand(Command::new("bench")
            .about("Measure decode throughput in megapixels per second")
            .arg(Arg::new("paths")
                .help("Files or directories, directories are walked recursively")
                .action(ArgAction::Append)
                .value_parser(value_parser!(PathBuf))
                .required(true))
            .arg(channels_arg()))
        .arg(Arg::new("max-width")
            .long("max-width")
            .global(true)
            .help_heading("DECODING")
            .help("Maximum width of images to decode")
            .default_value("16384")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("max-height")
            .long("max-height")
            .global(true)
            .help_heading("DECODING")
            .help("Maximum height of images to decode")
            .default_value("16384")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("strict")
            .long("strict")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("DECODING")
            .help("Treat recoverable errors such as bad checksums as fatal"))
        .arg(Arg::new("debug")
            .long("debug")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::cmd_args::{create_cmd_args, parse_channels};

    #[test]
    fn channels_values() {
        assert_eq!(parse_channels("native"), Ok(0));
        assert_eq!(parse_channels("NATIVE"), Ok(0));
        assert_eq!(parse_channels("0"), Ok(0));
        assert_eq!(parse_channels("4"), Ok(4));
        assert!(parse_channels("5").is_err());
        assert!(parse_channels("rgb").is_err());
    }

    #[test]
    fn command_is_valid() {
        create_cmd_args().debug_assert();
    }

    #[test]
    fn global_options_after_subcommand() {
        let matches = create_cmd_args()
            .try_get_matches_from([
                "zune-stbi", "decode", "a.png", "--channels", "3", "--max-width", "10", "--strict"
            ])
            .unwrap();

        assert_eq!(matches.get_one::<usize>("max-width"), Some(&10));
        assert_eq!(matches.get_one::<bool>("strict"), Some(&true));

        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "decode");
        assert_eq!(sub.get_one::<usize>("channels"), Some(&3));
        assert_eq!(
            sub.get_one::<PathBuf>("file"),
            Some(&PathBuf::from("a.png"))
        );
    }
}
