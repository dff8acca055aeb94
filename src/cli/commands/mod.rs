pub mod analyze;
pub mod classify;
mod command_result;
pub mod init;
pub mod recode;

use std::path::PathBuf;

pub use command_result::*;

use crate::analysis::Analysis;

#[derive(Debug)]
pub enum CommandSummary {
    Classify(ClassifySummary),
    Recode(RecodeSummary),
    Analyze(Analysis),
    Init(InitSummary),
}

/// One classified code.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedCode {
    pub code: f64,
    pub label: String,
    /// Range of the matching family; `None` for the unspecified label.
    pub range: Option<(f64, f64)>,
}

#[derive(Debug)]
pub struct ClassifySummary {
    pub family_count: usize,
    pub codes: Vec<ClassifiedCode>,
}

#[derive(Debug)]
pub struct RecodeSummary {
    pub row_count: usize,
    pub column_count: usize,
    /// `None` when the CSV went to stdout.
    pub output: Option<PathBuf>,
    /// Rows per household language family, in first-seen order.
    pub family_counts: Vec<(String, usize)>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}
