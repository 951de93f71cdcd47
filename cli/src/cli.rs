// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, io, path::PathBuf, process::ExitCode};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;

use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_render::CmdRender;
use crate::config::{APP_NAME, parse_config};
use crate::logging;
use crate::options::Options;

/// Run the flagval command-line interface.
pub fn run() -> ExitCode {
    let args: Vec<OsString> = std::env::args_os().collect();
    let (config, verbose) = scan_global_args(&args);
    logging::init(verbose);

    let options = match parse_config(config).and_then(|config| Options::from_config(&config)) {
        Ok(options) => options,
        Err(e) => return report(e),
    };

    let cli = Cli::from(&Cli::command_for(&options).get_matches_from(&args));
    match cli.run(options, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(e),
    }
}

fn report(e: Box<dyn Error>) -> ExitCode {
    eprintln!("{} {}", "Error:".red(), e);
    ExitCode::FAILURE
}

/// Read `--config` and `--verbose` ahead of the full parse.
///
/// The option definitions come from the config file, so it has to be located before the
/// validating command can be built. Parse errors are left to the full parse.
fn scan_global_args(args: &[OsString]) -> (Option<PathBuf>, bool) {
    let matches = Cli::base_command()
        .args(CmdRender::raw_args())
        .disable_help_flag(true)
        .disable_version_flag(true)
        .ignore_errors(true)
        .try_get_matches_from(args);

    match matches {
        Ok(matches) => (
            matches.get_one::<PathBuf>("config").cloned(),
            matches.get_flag("verbose"),
        ),
        Err(_) => (None, false),
    }
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// Whether to log debug information
    pub verbose: bool,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface with the built-in option definitions
    pub fn command() -> Command {
        Self::command_for(&Options::default())
    }

    /// Create the command-line interface validating against `options`
    pub fn command_for(options: &Options) -> Command {
        Self::base_command().args(CmdRender::args(options))
    }

    fn base_command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Validate option values and print their canonical form.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // default to render
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $FLAGVAL_CONFIG, then to \
$XDG_CONFIG_HOME/flagval/config.toml on Linux and MacOS, %APPDATA%/flagval/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath)
                    .global(true),
            )
            .arg(arg!(-v --verbose "Show debug logs").global(true))
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the specified arguments with the built-in option definitions
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command().try_get_matches_from(args)?;
        Ok(Self::from(&matches))
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: &ArgMatches) -> Self {
        let command = match matches.subcommand() {
            Some((CmdGenerateCompletion::NAME, matches)) => {
                Commands::GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            None => Commands::Render(CmdRender::from(matches)),
            _ => unreachable!(),
        };

        Cli {
            config: matches.get_one("config").cloned(),
            verbose: matches.get_flag("verbose"),
            command,
        }
    }

    /// Run the command with the loaded `options`, writing its output to `out`
    pub fn run(self, options: Options, out: &mut impl io::Write) -> Result<(), Box<dyn Error>> {
        match self.command {
            Commands::Render(cmd) => cmd.run(options, out),
            Commands::GenerateCompletion(cmd) => cmd.run(out),
        }
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Print the canonical option values
    Render(CmdRender),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_render() {
        let cli = Cli::try_parse_from(["flagval"]).unwrap();
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
        assert!(matches!(cli.command, Commands::Render(_)));
    }

    #[test]
    fn parses_global_flags() {
        let cli = Cli::try_parse_from(["flagval", "-v", "--config", "/tmp/flagval.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/flagval.toml")));
        assert!(cli.verbose);
    }

    #[test]
    fn parses_option_values() {
        let cli = Cli::try_parse_from(["flagval", "--since", "2024-01-02 03:04:05"]).unwrap();
        match cli.command {
            Commands::Render(cmd) => assert_eq!(cmd.since, vec!["2024-01-02 03:04:05"]),
            Commands::GenerateCompletion(_) => panic!("expected render command"),
        }
    }

    #[test]
    fn parses_generate_completion() {
        let cli = Cli::try_parse_from(["flagval", "generate-completion", "zsh"]).unwrap();
        assert!(matches!(cli.command, Commands::GenerateCompletion(_)));
    }

    #[test]
    fn rejects_invalid_values_while_parsing() {
        let err = Cli::try_parse_from(["flagval", "--levels", "info,fatal"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn scans_global_args_past_option_values() {
        let args: Vec<OsString> = [
            "flagval", "--color", "anything", "--since", "whenever", "-c", "a.toml", "-v",
        ]
        .into_iter()
        .map(OsString::from)
        .collect();
        assert_eq!(scan_global_args(&args), (Some(PathBuf::from("a.toml")), true));

        let args: Vec<OsString> = ["flagval"].into_iter().map(OsString::from).collect();
        assert_eq!(scan_global_args(&args), (None, false));
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["flagval", "--colour", "red"]).is_err());
    }

    #[test]
    fn verifies_command() {
        Cli::command().debug_assert();
    }
}
