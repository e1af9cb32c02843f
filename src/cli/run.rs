use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, check::check, dedupe::dedupe, init::init},
};

/// Dispatch to the command handler for the parsed arguments.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Dedupe(args)) => dedupe(args),
        Some(Command::Check(args)) => check(args),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
