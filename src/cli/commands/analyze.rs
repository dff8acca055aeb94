use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary};
use crate::{
    analysis::analyze as run_analysis,
    cli::{args::AnalyzeCommand, context::RunContext},
};

pub fn analyze(cmd: AnalyzeCommand) -> Result<CommandResult> {
    let ctx = RunContext::new(&cmd.common)?;
    let data = ctx.recoded_dataset()?;
    let key = ctx.language_key()?;

    let analysis = run_analysis(&data, key, &ctx.config.focus_families)
        .context("Failed to analyze survey records")?;

    Ok(CommandResult::new(CommandSummary::Analyze(analysis)))
}
