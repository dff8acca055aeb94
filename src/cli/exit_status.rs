use std::process::ExitCode;

use super::commands::CommandResult;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed successfully
/// - `Failure` (1): Command ran but could not do its job (e.g. config already exists)
/// - `Error` (2): Command failed (unreadable table, missing column, bad data, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command ran but could not do its job.
    Failure,
    /// Command failed due to an error.
    Error,
}

impl From<&CommandResult> for ExitStatus {
    fn from(result: &CommandResult) -> Self {
        if result.succeeded() {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
