//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `classify`: Classify language codes into families
//! - `recode`: Merge and recode the survey files, writing CSV
//! - `analyze`: Recode, then report proportions and chi-square tests
//! - `init`: Write a default configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Classify(cmd)) => cmd.common.verbose,
            Some(Command::Recode(cmd)) => cmd.common.verbose,
            Some(Command::Analyze(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Family-range table (overrides config file)
    #[arg(long)]
    pub families: Option<PathBuf>,

    /// Language code-to-label table (overrides config file)
    #[arg(long)]
    pub language_key: Option<PathBuf>,

    /// ACS housing-unit CSV file (overrides config file)
    #[arg(long)]
    pub household: Option<PathBuf>,

    /// ACS person CSV file (overrides config file)
    #[arg(long)]
    pub person: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ClassifyCommand {
    /// Numeric language codes to classify
    #[arg(required = true, allow_negative_numbers = true)]
    pub codes: Vec<f64>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct RecodeCommand {
    /// Write the recoded CSV here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct AnalyzeCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify language codes into linguistic families
    Classify(ClassifyCommand),
    /// Merge household and person records and recode language, isolation and income fields
    Recode(RecodeCommand),
    /// Report isolation and public-assistance proportions with chi-square tests
    Analyze(AnalyzeCommand),
    /// Initialize a new .acslangrc.json configuration file
    Init,
}
