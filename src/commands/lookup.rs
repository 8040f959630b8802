//! CAS lookup command
//!
//! Validates a CAS number and shows what the reference tables know about it.

use super::{load_engine, CommandOutput};
use crate::checks::cas::{validate_cas_number, CasValidation};
use crate::cli::args::{Cli, OutputFormat};
use crate::data::HazardThreshold;
use crate::MsdsError;
use serde::Serialize;

/// Lookup result
#[derive(Debug, Serialize)]
pub struct CasLookup {
    pub input: String,
    pub validation: CasValidation,
    /// CAS the reference data was looked up under (input or suggestion)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hazard: Option<HazardThreshold>,
}

/// Run the lookup command
pub fn run(cli: &Cli, cas: &str) -> Result<CommandOutput, MsdsError> {
    let engine = load_engine(cli.config.as_deref())?;
    let lookup = lookup(cas, &engine.reference);

    let text = match cli.format {
        OutputFormat::Json => serde_json::to_string_pretty(&lookup).map_err(|source| MsdsError::Json {
            context: "lookup result".to_string(),
            source,
        })?,
        _ => format_text(&lookup),
    };

    Ok(CommandOutput {
        text,
        exit_code: if lookup.validation.valid { 0 } else { 1 },
    })
}

/// Look up a CAS number, following the corrected form when one exists
pub fn lookup(cas: &str, reference: &crate::ReferenceData) -> CasLookup {
    let input = cas.trim().to_string();
    let validation = validate_cas_number(&input);

    let resolved = if validation.valid {
        Some(input.clone())
    } else {
        validation.suggestion.clone()
    };

    let name = resolved
        .as_deref()
        .and_then(|c| reference.canonical_name(c))
        .map(str::to_string);
    let hazard = resolved
        .as_deref()
        .and_then(|c| reference.hazard_threshold(c))
        .cloned();

    CasLookup {
        input,
        validation,
        resolved,
        name,
        hazard,
    }
}

fn format_text(lookup: &CasLookup) -> String {
    let mut output = format!("CAS:        {}\n", lookup.input);

    match (&lookup.validation.problem, &lookup.validation.suggestion) {
        (None, _) => output.push_str("Valid:      yes\n"),
        (Some(problem), Some(fixed)) => {
            output.push_str(&format!("Valid:      no ({})\n", problem.title()));
            output.push_str(&format!("Suggested:  {}\n", fixed));
        }
        (Some(problem), None) => output.push_str(&format!("Valid:      no ({})\n", problem.title())),
    }

    output.push_str(&format!(
        "Name:       {}\n",
        lookup.name.as_deref().unwrap_or("(not registered)")
    ));
    if let Some(ref hazard) = lookup.hazard {
        output.push_str(&format!("Safe limit: {}%\n", hazard.max_safe_percentage));
        output.push_str(&format!("Warning:    {}\n", hazard.warning_text));
    }

    output.trim_end().to_string()
}
