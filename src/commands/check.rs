//! Check command
//!
//! Validates every product in an input file and renders the report.

use super::{load_engine, load_products, CommandOutput};
use crate::cli::args::{Cli, OutputFormat};
use crate::cli::output::get_formatter;
use crate::engine::result::{ComparisonResult, ValidationReport};
use crate::{validate_products, MsdsError};
use std::fs;
use std::path::Path;

/// Run the check command
pub fn run(cli: &Cli, file: &Path, strict: bool, baseline: Option<&Path>) -> Result<CommandOutput, MsdsError> {
    let engine = load_engine(cli.config.as_deref())?;
    let products = load_products(file)?;

    let report = validate_products(&products, &engine).with_source(file.display().to_string());
    let summary = report.summary();
    tracing::info!(
        products = summary.products,
        errors = summary.errors,
        warnings = summary.warnings,
        suggestions = summary.suggestions,
        "validation finished"
    );

    let formatter = get_formatter(cli.format, cli.color_enabled(), cli.verbose, cli.quiet);
    let mut text = formatter.format(&report);

    if let Some(path) = baseline {
        let previous = load_report(path)?;
        let diff = report.compare_to(&previous);
        tracing::info!(
            new = diff.new_issues.len(),
            resolved = diff.resolved.len(),
            escalated = diff.escalated.len(),
            "compared against baseline"
        );
        // Structured formats stay machine-readable
        if cli.format == OutputFormat::Text {
            text.push('\n');
            text.push_str(&format_comparison(&diff));
        }
    }

    Ok(CommandOutput {
        text,
        exit_code: report.exit_code(strict),
    })
}

/// Load a report previously written with `--format json`
pub fn load_report(path: &Path) -> Result<ValidationReport, MsdsError> {
    let context = path.display().to_string();
    let raw = fs::read_to_string(path).map_err(|source| MsdsError::Io {
        context: context.clone(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| MsdsError::Json { context, source })
}

fn format_comparison(diff: &ComparisonResult) -> String {
    let mut output = format!(
        "BASELINE: {} new, {} resolved, {} escalated, {} unchanged\n",
        diff.new_issues.len(),
        diff.resolved.len(),
        diff.escalated.len(),
        diff.unchanged.len()
    );
    for id in &diff.new_issues {
        output.push_str(&format!("  + {}\n", id));
    }
    for id in &diff.escalated {
        output.push_str(&format!("  ! {}\n", id));
    }
    for id in &diff.resolved {
        output.push_str(&format!("  - {}\n", id));
    }
    output
}
