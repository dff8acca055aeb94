use anyhow::Result;

use super::{ClassifiedCode, ClassifySummary, CommandResult, CommandSummary};
use crate::cli::{args::ClassifyCommand, context::RunContext};

pub fn classify(cmd: ClassifyCommand) -> Result<CommandResult> {
    let ctx = RunContext::new(&cmd.common)?;
    let families = ctx.families()?;

    let codes = cmd
        .codes
        .iter()
        .map(|&code| {
            let result = families.classify(code);
            ClassifiedCode {
                code,
                label: result.label().to_string(),
                range: result.family().map(|family| family.range()),
            }
        })
        .collect();

    Ok(CommandResult::new(CommandSummary::Classify(
        ClassifySummary {
            family_count: families.len(),
            codes,
        },
    )))
}
