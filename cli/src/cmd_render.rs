// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{Arg, ArgAction, ArgMatches, arg};
use flagval_core::FlagValueParser;

use crate::options::Options;

/// Validate the given option values and print their canonical form.
///
/// This is the default command. Every occurrence of an option is applied to the same value in
/// command-line order, after the raw values from the config file.
#[derive(Debug, Clone, Default)]
pub struct CmdRender {
    pub since: Vec<String>,
    pub color: Vec<String>,
    pub levels: Vec<String>,
}

impl CmdRender {
    /// The option arguments, each occurrence validated against the matching value of `options`.
    pub fn args(options: &Options) -> [Arg; 3] {
        let [since, color, levels] = Self::raw_args();
        [
            since.value_parser(FlagValueParser::new(options.since.clone())),
            color.value_parser(FlagValueParser::new(options.color.clone())),
            levels.value_parser(FlagValueParser::new(options.levels.clone())),
        ]
    }

    /// The option arguments, accepting any text.
    pub fn raw_args() -> [Arg; 3] {
        [
            arg!(--since <TIMESTAMP> "Start time, in the configured layout")
                .action(ArgAction::Append),
            arg!(--color <COLOR> "Color to use, case-insensitive").action(ArgAction::Append),
            arg!(--levels <LEVELS> "Comma-separated list of levels, case-insensitive")
                .action(ArgAction::Append),
        ]
    }

    pub fn from(matches: &ArgMatches) -> Self {
        fn get_all(matches: &ArgMatches, id: &str) -> Vec<String> {
            matches
                .get_raw(id)
                .map(|values| {
                    values
                        .map(|v| v.to_string_lossy().into_owned())
                        .collect()
                })
                .unwrap_or_default()
        }

        Self {
            since: get_all(matches, Options::SINCE),
            color: get_all(matches, Options::COLOR),
            levels: get_all(matches, Options::LEVELS),
        }
    }

    pub fn run(self, mut options: Options, out: &mut impl io::Write) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "applying option values...");
        options.apply(Options::SINCE, self.since.iter().map(String::as_str))?;
        options.apply(Options::COLOR, self.color.iter().map(String::as_str))?;
        options.apply(Options::LEVELS, self.levels.iter().map(String::as_str))?;

        let rendered = toml::to_string(&options.render())?;
        out.write_all(rendered.as_bytes())?;
        Ok(())
    }
}
