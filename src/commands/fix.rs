//! Fix command
//!
//! Applies every auto-fixable suggestion and writes the corrected products
//! as JSON, to a file or stdout.

use super::{load_engine, load_input, CommandOutput};
use crate::cli::args::Cli;
use crate::engine::fix::fix_product;
use crate::MsdsError;
use std::fs;
use std::path::Path;

/// Run the fix command
pub fn run(cli: &Cli, file: &Path, output: Option<&Path>) -> Result<CommandOutput, MsdsError> {
    let engine = load_engine(cli.config.as_deref())?;
    let input = load_input(file)?;
    let product_count = input.len();

    let mut total_changed = 0;
    let fixed = input.map(|product| {
        let (fixed, changed) = fix_product(&product, &engine);
        if changed > 0 {
            tracing::info!(product = %product.name, fields = changed, "applied fixes");
        }
        total_changed += changed;
        fixed
    });

    // Written back in the shape it was read: object or array
    let json = serde_json::to_string_pretty(&fixed).map_err(|source| MsdsError::Json {
        context: "fixed products".to_string(),
        source,
    })?;

    match output {
        Some(path) => {
            fs::write(path, json + "\n").map_err(|source| MsdsError::Io {
                context: path.display().to_string(),
                source,
            })?;
            Ok(CommandOutput::success(format!(
                "Applied {} fixes across {} products, wrote {}",
                total_changed,
                product_count,
                path.display()
            )))
        }
        None => {
            tracing::info!(fields = total_changed, "fixes applied");
            Ok(CommandOutput::success(json))
        }
    }
}
