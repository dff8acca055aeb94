use std::{fs::File, io};

use anyhow::{Context, Result};
use tracing::info;

use super::{CommandResult, CommandSummary, RecodeSummary};
use crate::{
    cli::{args::RecodeCommand, context::RunContext},
    core::{
        Dataset,
        recode::{PRECISE_HOUSEHOLD_LANGUAGE, uncoded_column},
    },
};

pub fn recode(cmd: RecodeCommand) -> Result<CommandResult> {
    let ctx = RunContext::new(&cmd.common)?;
    let data = ctx.recoded_dataset()?;

    match &cmd.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            data.write_csv(file)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), rows = data.row_count(), "wrote recoded records");
        }
        None => {
            data.write_csv(io::stdout().lock())
                .context("Failed to write recoded records")?;
        }
    }

    Ok(CommandResult::new(CommandSummary::Recode(RecodeSummary {
        row_count: data.row_count(),
        column_count: data.column_count(),
        output: cmd.output,
        family_counts: family_counts(&data)?,
    })))
}

fn family_counts(data: &Dataset) -> Result<Vec<(String, usize)>> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for value in data.column(&uncoded_column(PRECISE_HOUSEHOLD_LANGUAGE))? {
        let name = value.to_string();
        match counts.iter_mut().find(|(n, _)| *n == name) {
            Some((_, count)) => *count += 1,
            None => counts.push((name, 1)),
        }
    }
    Ok(counts)
}
