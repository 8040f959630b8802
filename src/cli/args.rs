//! Command line arguments for msds-check.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Rule-based data-quality checks for MSDS product records
#[derive(Debug, Parser)]
#[command(name = "msds-check", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, env = "MSDS_CHECK_FORMAT", global = true)]
    pub format: OutputFormat,

    /// Only show products with warnings or errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Show issue descriptions and suggested values
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output (also set by NO_COLOR)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Engine configuration file (TOML)
    #[arg(long, env = "MSDS_CHECK_CONFIG", global = true)]
    pub config: Option<PathBuf>,
}

/// Command to execute
#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Validate products from a JSON file (one object or an array)
    Check {
        file: PathBuf,

        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,

        /// Previous JSON report to compare against
        #[arg(long)]
        baseline: Option<PathBuf>,
    },

    /// Apply auto-fixable suggestions and write the corrected JSON
    Fix {
        file: PathBuf,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a CAS number and show its reference data
    Lookup { cas: String },

    /// List the rules the engine reports
    Rules {
        /// Only rules for this field (e.g. cas_number)
        #[arg(long)]
        field: Option<String>,
    },

    /// Print version information
    Version,
}

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal output
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
    /// JUnit XML for CI/CD integration
    Junit,
}

impl Cli {
    /// Color is on unless disabled by flag or NO_COLOR
    pub fn color_enabled(&self) -> bool {
        !self.no_color && std::env::var_os("NO_COLOR").is_none()
    }
}
