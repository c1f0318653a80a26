//! Shell completion generation.

use std::io;

use clap::CommandFactory;
use clap_complete::{Generator, generate, shells};

use crate::{
    cli::{Cli, CompletionsArgs, Shell},
    error::CliResult,
};

const BIN_NAME: &str = "tgscaff";

pub fn execute(args: CompletionsArgs) -> CliResult<()> {
    let mut out = io::stdout();
    match args.shell {
        Shell::Bash => write_completions(shells::Bash, &mut out),
        Shell::Zsh => write_completions(shells::Zsh, &mut out),
        Shell::Fish => write_completions(shells::Fish, &mut out),
        Shell::PowerShell => write_completions(shells::PowerShell, &mut out),
        Shell::Elvish => write_completions(shells::Elvish, &mut out),
    }
    Ok(())
}

fn write_completions<G: Generator>(shell: G, buf: &mut dyn io::Write) {
    generate(shell, &mut Cli::command(), BIN_NAME, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bash_script_mentions_subcommands() {
        let mut buf = Vec::new();
        write_completions(shells::Bash, &mut buf);
        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("tgscaff"));
        assert!(script.contains("generate"));
    }
}
