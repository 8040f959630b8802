//! msds-check CLI entry point
//!
//! Rule-based data-quality checks for MSDS product records.

use clap::Parser;
use msds_check::cli::args::{Cli, Command};
use msds_check::commands::{self, CommandOutput};
use msds_check::version::get_build_info;
use msds_check::MsdsError;
use tracing_subscriber::EnvFilter;

use std::process::ExitCode;

fn main() -> ExitCode {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            eprintln!("Run 'msds-check --help' for usage information.");
            return ExitCode::from(3);
        }
    };

    match run(&cli) {
        Ok(output) => {
            if !output.text.is_empty() {
                println!("{}", output.text);
            }
            ExitCode::from(output.exit_code)
        }
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("Error: {}", e);
            ExitCode::from(3)
        }
    }
}

fn run(cli: &Cli) -> Result<CommandOutput, MsdsError> {
    match cli.command {
        Command::Check {
            ref file,
            strict,
            ref baseline,
        } => commands::check::run(cli, file, strict, baseline.as_deref()),
        Command::Fix { ref file, ref output } => commands::fix::run(cli, file, output.as_deref()),
        Command::Lookup { ref cas } => commands::lookup::run(cli, cas),
        Command::Rules { ref field } => commands::rules::run(cli, field.as_deref()),
        Command::Version => Ok(CommandOutput::success(get_build_info().to_string())),
    }
}

/// Log to stderr, filtered by MSDS_CHECK_LOG, then RUST_LOG, default warn
fn init_logging() {
    let filter = EnvFilter::try_from_env("MSDS_CHECK_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
