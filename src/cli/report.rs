//! Report formatting and printing utilities.
//!
//! Every printer has a `*_to` variant taking a writer, so the output can be
//! captured in tests. Separate from core logic to allow acslang to be used
//! as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    ClassifySummary, CommandResult, CommandSummary, InitSummary, RecodeSummary,
};
use crate::{
    analysis::{Analysis, NamedTest, ProportionTable, Spread, SpreadTable},
    config::CONFIG_FILE_NAME,
    utils::{display_number, plural},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Width of the proportion bar at 100%.
const BAR_WIDTH: usize = 20;

const BAR_CHAR: &str = "\u{2588}"; // █

/// Print the summary of a finished command.
pub fn print(result: &CommandResult) {
    match &result.summary {
        CommandSummary::Classify(summary) => print_classify_to(summary, &mut io::stdout().lock()),
        // the recoded CSV owns stdout when no output file was given
        CommandSummary::Recode(summary) if summary.output.is_none() => {
            print_recode_to(summary, &mut io::stderr().lock())
        }
        CommandSummary::Recode(summary) => print_recode_to(summary, &mut io::stdout().lock()),
        CommandSummary::Analyze(analysis) => print_analysis_to(analysis, &mut io::stdout().lock()),
        CommandSummary::Init(summary) => print_init_to(summary, &mut io::stdout().lock()),
    }
}

pub fn print_classify_to<W: Write>(summary: &ClassifySummary, writer: &mut W) {
    let codes: Vec<String> = summary.codes.iter().map(|c| display_number(c.code)).collect();
    let width = column_width(codes.iter().map(String::as_str));

    for (code, entry) in codes.iter().zip(&summary.codes) {
        let label = match entry.range {
            Some(_) => entry.label.bold(),
            None => entry.label.dimmed(),
        };
        let range = match entry.range {
            Some((min, max)) => format!("  [{}, {}]", display_number(min), display_number(max))
                .dimmed()
                .to_string(),
            None => String::new(),
        };
        let _ = writeln!(writer, "{}  {}{}", pad_left(code, width).cyan(), label, range);
    }

    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Classified {} {} against {} {}",
            summary.codes.len(),
            plural(summary.codes.len(), "code", "codes"),
            summary.family_count,
            plural(summary.family_count, "family", "families")
        )
        .green()
    );
}

pub fn print_recode_to<W: Write>(summary: &RecodeSummary, writer: &mut W) {
    let destination = match &summary.output {
        Some(path) => format!(" to {}", path.display()),
        None => String::new(),
    };
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Recoded {} {} ({} columns){}",
            summary.row_count,
            plural(summary.row_count, "record", "records"),
            summary.column_count,
            destination
        )
        .green()
    );

    if summary.family_counts.is_empty() {
        return;
    }
    let width = column_width(summary.family_counts.iter().map(|(name, _)| name.as_str()));
    let _ = writeln!(writer, "{}", "Household language families:".bold());
    for (name, count) in &summary.family_counts {
        let _ = writeln!(writer, "  {}  {}", pad_right(name, width), count);
    }
}

pub fn print_analysis_to<W: Write>(analysis: &Analysis, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {} {}, {} in focus families",
        "Analyzed".bold(),
        analysis.row_count,
        plural(analysis.row_count, "record", "records"),
        analysis.focus_row_count
    );
    let _ = writeln!(writer);

    for table in &analysis.spreads {
        print_spread_table(table, writer);
    }
    for table in &analysis.tables {
        print_table(table, writer);
    }
    for test in &analysis.tests {
        print_test(test, writer);
    }
}

pub fn print_init_to<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!("{} already exists", CONFIG_FILE_NAME).red()
        );
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_table<W: Write>(table: &ProportionTable, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{}  {}",
        table.title.bold(),
        format!("({} / {})", table.category, table.observed).dimmed()
    );

    let width = column_width(
        table
            .rows
            .iter()
            .map(|row| row.category.as_str())
            .chain(["mean"]),
    );

    for row in &table.rows {
        let bar = BAR_CHAR.repeat((row.proportion * BAR_WIDTH as f64).round() as usize);
        let _ = writeln!(
            writer,
            "  {}  {:>6.1}%  {:>9}  {}",
            pad_right(&row.category, width),
            row.proportion * 100.0,
            format!("{}/{}", row.observed, row.total),
            bar.blue()
        );
    }
    if let Some(mean) = table.mean() {
        let _ = writeln!(
            writer,
            "  {}  {:>6.1}%",
            pad_right("mean", width).dimmed(),
            mean * 100.0
        );
    }
    let _ = writeln!(writer);
}

fn print_spread_table<W: Write>(table: &SpreadTable, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{}  {}",
        table.title.bold(),
        format!("({} / {})", table.category, table.value).dimmed()
    );

    let width = column_width(
        table
            .rows
            .iter()
            .chain(&table.control)
            .map(|row| row.category.as_str()),
    );
    let _ = writeln!(
        writer,
        "  {}  {:>5}  {:>5}  {:>6}  {:>6}  {:>6}  {:>5}  {:>6}",
        pad_right("", width),
        "n",
        "min",
        "q1",
        "median",
        "q3",
        "max",
        "mean"
    );
    for row in &table.rows {
        let _ = writeln!(writer, "  {}  {}", pad_right(&row.category, width), spread_columns(row));
    }
    if let Some(control) = &table.control {
        let _ = writeln!(
            writer,
            "  {}  {}",
            pad_right(&control.category, width).dimmed(),
            spread_columns(control)
        );
    }
    let _ = writeln!(writer);
}

fn spread_columns(spread: &Spread) -> String {
    format!(
        "{:>5}  {:>5}  {:>6.1}  {:>6.1}  {:>6.1}  {:>5}  {:>6.1}",
        spread.count,
        display_number(spread.min),
        spread.lower_quartile,
        spread.median,
        spread.upper_quartile,
        display_number(spread.max),
        spread.mean
    )
}

fn print_test<W: Write>(test: &NamedTest, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", "Chi-square:".bold(), test.title);
    match &test.outcome {
        Ok(result) => {
            let _ = writeln!(
                writer,
                "  statistic {:.4}  df {}  p-value {:.4}",
                result.statistic,
                display_number(result.degrees_of_freedom),
                result.p_value
            );
        }
        Err(err) => {
            let _ = writeln!(writer, "  {} {}", "skipped:".bold().yellow(), err);
        }
    }
    let _ = writeln!(writer);
}

/// Widest entry in terminal columns.
fn column_width<'a>(entries: impl IntoIterator<Item = &'a str>) -> usize {
    entries
        .into_iter()
        .map(UnicodeWidthStr::width)
        .max()
        .unwrap_or(0)
}

/// `format!` width counts chars, so wide characters are padded by hand.
fn pad_right(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(text));
    format!("{}{}", text, " ".repeat(fill))
}

fn pad_left(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(text));
    format!("{}{}", " ".repeat(fill), text)
}
