//! Shell completion generation command.

use clap::Command;
use clap_complete::{Shell, generate};
use std::io::{self, Write};
use tracing::info;
use typegen_core::cli::ExitCode;

/// Writes the completion script for `shell` to `out`.
pub fn generate_completions(shell: Shell, cmd: &mut Command, out: &mut dyn Write) {
    info!("Generating {shell} completions");
    let name = cmd.get_name().to_string();
    generate(shell, cmd, name, out);
}

/// Prints the completion script for `shell` to stdout.
///
/// # Examples
///
/// ```no_run
/// use clap::CommandFactory;
/// use clap_complete::Shell;
/// use typegen_cli::Cli;
/// use typegen_cli::commands::completions;
///
/// completions::run(Shell::Bash, &mut Cli::command());
/// ```
pub fn run(shell: Shell, cmd: &mut Command) -> ExitCode {
    generate_completions(shell, cmd, &mut io::stdout());
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cli;
    use clap::CommandFactory;

    fn script_for(shell: Shell) -> String {
        let mut buffer = Vec::new();
        generate_completions(shell, &mut Cli::command(), &mut buffer);
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_bash_completions_mention_subcommands() {
        let script = script_for(Shell::Bash);
        assert!(script.contains("openspace-typegen"));
        assert!(script.contains("generate"));
        assert!(script.contains("introspect"));
    }

    #[test]
    fn test_zsh_completions_mention_flags() {
        let script = script_for(Shell::Zsh);
        assert!(script.contains("--strict"));
        assert!(script.contains("--root-interface"));
    }

    #[test]
    fn test_other_shells_produce_output() {
        for shell in [Shell::Fish, Shell::PowerShell, Shell::Elvish] {
            assert!(!script_for(shell).is_empty(), "{shell} script is empty");
        }
    }
}
