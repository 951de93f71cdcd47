// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command, ValueEnum, arg, value_parser};
use clap_complete::{Generator, generate};

use crate::Cli;

/// Print a shell completion script for `flagval`.
#[derive(Debug, Clone, Copy)]
pub struct CmdGenerateCompletion {
    pub shell: Shell,
}

impl CmdGenerateCompletion {
    pub const NAME: &str = "generate-completion";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Generate shell completion for the specified shell")
            .hide(true)
            .arg(
                arg!(shell: <SHELL> "The shell generator to use")
                    .value_parser(value_parser!(Shell)),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let shell = matches
            .get_one::<Shell>("shell")
            .copied()
            .expect("shell is required");

        Self { shell }
    }

    pub fn run(self, out: &mut impl io::Write) -> Result<(), Box<dyn Error>> {
        use clap_complete::Shell as ClapShell;

        tracing::debug!(?self, "generating shell completion...");
        match self.shell {
            Shell::Bash => write_completion(ClapShell::Bash, out),
            Shell::Elvish => write_completion(ClapShell::Elvish, out),
            Shell::Fish => write_completion(ClapShell::Fish, out),
            Shell::PowerShell => write_completion(ClapShell::PowerShell, out),
            Shell::Zsh => write_completion(ClapShell::Zsh, out),
            Shell::Nushell => write_completion(clap_complete_nushell::Nushell, out),
        }
        Ok(())
    }
}

fn write_completion(generator: impl Generator, out: &mut impl io::Write) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(generator, &mut cmd, name, out);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Nushell,
    #[clap(name = "powershell")]
    #[allow(clippy::enum_variant_names)]
    PowerShell,
    Zsh,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(shell: &str) -> CmdGenerateCompletion {
        let matches = Cli::command()
            .try_get_matches_from(["flagval", "generate-completion", shell])
            .unwrap_or_else(|e| panic!("failed to parse shell '{shell}': {e}"));
        let sub_matches = matches.subcommand_matches(CmdGenerateCompletion::NAME).unwrap();
        CmdGenerateCompletion::from(sub_matches)
    }

    #[test]
    fn parses_every_shell() {
        for (name, shell) in [
            ("bash", Shell::Bash),
            ("elvish", Shell::Elvish),
            ("fish", Shell::Fish),
            ("nushell", Shell::Nushell),
            ("powershell", Shell::PowerShell),
            ("zsh", Shell::Zsh),
        ] {
            assert_eq!(parse(name).shell, shell);
        }
    }

    #[test]
    fn completion_mentions_options() {
        let mut output = vec![];
        parse("bash").run(&mut output).unwrap();
        let script = String::from_utf8(output).unwrap();
        assert!(script.contains("--levels"));
        assert!(script.contains("--since"));
    }

    #[test]
    fn rejects_unknown_shell() {
        assert!(
            Cli::command()
                .try_get_matches_from(["flagval", "generate-completion", "cmd"])
                .is_err()
        );
    }
}
