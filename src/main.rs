// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oread-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oread and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Oread CLI entrypoint.
//!
//! Runs the interactive automap inspector against a JSON map file, or against
//! the built-in demo map when no file is given.

use std::error::Error;
use std::path::Path;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<map-file>] [--settings <file>]\n  {program} --demo\n\nLoads a JSON map and runs the interactive automap inspector.\nIf map-file is omitted (or with --demo) a built-in demo map is used.\n--settings points at a JSON settings file; absent keys fall back to defaults."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    map_file: Option<String>,
    settings_file: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--settings" => {
                if options.settings_file.is_some() {
                    return Err(());
                }
                let file = args.next().ok_or(())?;
                options.settings_file = Some(file);
            }
            other if other.starts_with('-') => return Err(()),
            _ => {
                if options.map_file.is_some() {
                    return Err(());
                }
                options.map_file = Some(arg);
            }
        }
    }

    if options.demo && options.map_file.is_some() {
        return Err(());
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "oread".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let settings = match &options.settings_file {
            Some(path) => oread::store::load_settings(Path::new(path))?,
            None => oread::store::Settings::default(),
        };

        let map = match &options.map_file {
            Some(path) => oread::store::load_map(Path::new(path))?,
            None => oread::tui::demo_map(),
        };

        oread::tui::run(map, settings)
    })();

    if let Err(err) = result {
        eprintln!("oread: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_options, CliOptions};

    fn parse(args: &[&str]) -> Result<CliOptions, ()> {
        parse_options(args.iter().map(|arg| (*arg).to_owned()))
    }

    #[test]
    fn no_arguments_is_the_default() {
        assert_eq!(parse(&[]), Ok(CliOptions::default()));
    }

    #[test]
    fn map_file_and_settings_parse() {
        let options = parse(&["e1m1.json", "--settings", "oread.json"]).expect("options");
        assert_eq!(options.map_file.as_deref(), Some("e1m1.json"));
        assert_eq!(options.settings_file.as_deref(), Some("oread.json"));
        assert!(!options.demo);
    }

    #[test]
    fn demo_conflicts_with_a_map_file() {
        assert_eq!(parse(&["--demo", "e1m1.json"]), Err(()));
        assert_eq!(parse(&["e1m1.json", "--demo"]), Err(()));
    }

    #[test]
    fn unknown_flags_and_missing_values_are_rejected() {
        assert_eq!(parse(&["--wat"]), Err(()));
        assert_eq!(parse(&["--settings"]), Err(()));
        assert_eq!(parse(&["a.json", "b.json"]), Err(()));
    }
}
