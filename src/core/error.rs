use std::path::{Path, PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by table imports, dataset handling and recoding.
#[derive(Debug, Error)]
pub enum Error {
    #[error("line {line}: expected {expected} fields, found {found}: \"{content}\"")]
    MalformedTableLine {
        line: usize,
        expected: usize,
        found: usize,
        content: String,
    },
    #[error("line {line}: range bound \"{value}\" is not a number")]
    NonNumericRange { line: usize, value: String },
    #[error("a family with lower bound {min} is already registered (\"{existing}\")")]
    DuplicateLowerBound { min: f64, existing: String },
    #[error("dataset has no column \"{column}\"")]
    MissingColumn { column: String },
    #[error("column \"{column}\" has {found} rows, dataset has {expected}")]
    ColumnLength {
        column: String,
        expected: usize,
        found: usize,
    },
    #[error("column \"{column}\", row {row}: \"{value}\" is not a numeric code")]
    TypeCoercionFailure {
        column: String,
        row: usize,
        value: String,
    },
    #[error("language key has no label for code \"{code}\"")]
    MissingLabel { code: String },
    #[error("chi-square test on \"{column}\" is degenerate: {reason}")]
    DegenerateTest { column: String, reason: String },
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl Error {
    pub fn kind(&self) -> &'static str {
        match self {
            Error::MalformedTableLine { .. } => "malformed_table_line",
            Error::NonNumericRange { .. } => "non_numeric_range",
            Error::DuplicateLowerBound { .. } => "duplicate_lower_bound",
            Error::MissingColumn { .. } => "missing_column",
            Error::ColumnLength { .. } => "column_length",
            Error::TypeCoercionFailure { .. } => "type_coercion_failure",
            Error::MissingLabel { .. } => "missing_label",
            Error::DegenerateTest { .. } => "degenerate_test",
            Error::Io { .. } => "io",
            Error::Csv { .. } => "csv",
        }
    }

    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn csv(path: &Path, source: csv::Error) -> Self {
        Error::Csv {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn missing_column(column: &str) -> Self {
        Error::MissingColumn {
            column: column.to_string(),
        }
    }
}
