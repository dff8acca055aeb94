//! Command-line interface layer.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

pub mod args;
pub mod commands;
pub mod context;
mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    init_logging(args.verbose());

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = run::run(args)?;
    report::print(&result);

    Ok(ExitStatus::from(&result))
}

/// Install the stderr log subscriber when `--verbose` is given or `RUST_LOG` is set.
fn init_logging(verbose: bool) {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) if verbose => EnvFilter::new("acslang=debug"),
        Err(_) => return,
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
