//! Rules command
//!
//! Lists every rule the engine can report, grouped by field.

use super::CommandOutput;
use crate::checks::{get_all_rules, get_rules_by_field, Rule};
use crate::cli::args::{Cli, OutputFormat};
use crate::{IssueField, MsdsError};
use serde::Serialize;

const FIELDS: [IssueField; 6] = [
    IssueField::CasNumber,
    IssueField::MainIngredient,
    IssueField::ContentPercentage,
    IssueField::HazardClassification,
    IssueField::Ingredients,
    IssueField::TotalContent,
];

#[derive(Serialize)]
struct RuleView<'a> {
    id: &'a str,
    field: IssueField,
    severity: crate::Severity,
    auto_fixable: bool,
    description: &'a str,
}

impl<'a> From<&'a Rule> for RuleView<'a> {
    fn from(rule: &'a Rule) -> Self {
        RuleView {
            id: rule.id,
            field: rule.field,
            severity: rule.severity,
            auto_fixable: rule.auto_fixable,
            description: rule.description,
        }
    }
}

/// Run the rules command
pub fn run(cli: &Cli, field: Option<&str>) -> Result<CommandOutput, MsdsError> {
    let rules: Vec<&Rule> = match field {
        Some(name) => get_rules_by_field(parse_field(name)?),
        None => get_all_rules().iter().collect(),
    };

    let text = match cli.format {
        OutputFormat::Json => {
            let views: Vec<RuleView> = rules.iter().map(|r| RuleView::from(*r)).collect();
            serde_json::to_string_pretty(&views).map_err(|source| MsdsError::Json {
                context: "rule list".to_string(),
                source,
            })?
        }
        _ => format_text(&rules),
    };

    Ok(CommandOutput::success(text))
}

fn parse_field(name: &str) -> Result<IssueField, MsdsError> {
    FIELDS
        .iter()
        .copied()
        .find(|f| f.as_str() == name)
        .ok_or_else(|| {
            let valid: Vec<_> = FIELDS.iter().map(IssueField::as_str).collect();
            MsdsError::Config(format!("unknown field '{}'. Valid fields: {}", name, valid.join(", ")))
        })
}

fn format_text(rules: &[&Rule]) -> String {
    let mut output = String::from("Available rules:\n");

    for field in FIELDS {
        let in_field: Vec<_> = rules.iter().filter(|r| r.field == field).collect();
        if in_field.is_empty() {
            continue;
        }

        output.push_str(&format!("\n{}:\n", field.as_str().to_uppercase()));
        for rule in in_field {
            output.push_str(&format!(
                "  {:<24} {:<10} {}{}\n",
                rule.id,
                rule.severity.to_string(),
                rule.description,
                if rule.auto_fixable { " (auto-fix)" } else { "" }
            ));
        }
    }

    output.trim_end().to_string()
}
