//! Shell completion generation.

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::{generate, shells};

use crate::{
    cli::{Cli, CompletionsArgs, Shell},
    error::CliResult,
};

const BIN: &str = "rolekeeper";

pub fn execute(args: CompletionsArgs) -> CliResult<()> {
    let mut stdout = io::stdout().lock();
    write_completions(args.shell, &mut stdout);
    stdout.flush()?;
    Ok(())
}

fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    match shell {
        Shell::Bash => generate(shells::Bash, &mut cmd, BIN, out),
        Shell::Zsh => generate(shells::Zsh, &mut cmd, BIN, out),
        Shell::Fish => generate(shells::Fish, &mut cmd, BIN, out),
        Shell::PowerShell => generate(shells::PowerShell, &mut cmd, BIN, out),
        Shell::Elvish => generate(shells::Elvish, &mut cmd, BIN, out),
    }
}
