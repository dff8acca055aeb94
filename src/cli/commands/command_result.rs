use super::{CommandSummary, InitSummary};

/// Result of running an acslang command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}

impl CommandResult {
    pub fn new(summary: CommandSummary) -> Self {
        Self { summary }
    }

    /// False when the command ran but could not do its job (e.g. init over an existing file).
    pub fn succeeded(&self) -> bool {
        !matches!(
            self.summary,
            CommandSummary::Init(InitSummary { created: false })
        )
    }
}
