/// Dispatch a parsed command to its handler.
///
/// # Returns
/// - `Ok(CommandResult)` with the command summary to report
/// - `Err` if the command fails (e.g., unreadable table, missing column)
use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::CommandResult,
    commands::{analyze::analyze, classify::classify, init::init, recode::recode},
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Classify(cmd)) => classify(cmd),
        Some(Command::Recode(cmd)) => recode(cmd),
        Some(Command::Analyze(cmd)) => analyze(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
