//! Auto-fix collection and application.
//!
//! Only issues that are auto-fixable and carry a suggested value are applied.
//! When several fixes target the same field, the one detected last wins.

use crate::checks::percentage::{format_percentage, parse_percentage_range};
use crate::engine::detector::detect_ingredient_issues;
use crate::{Engine, IngredientRecord, IssueField, ProductRecord, ValidationIssue};
use std::collections::BTreeMap;

/// A replacement value for one ingredient field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldFix {
    Name(String),
    CasNumber(String),
    Percentage(f64),
}

/// Collect the applicable fixes from an ingredient's issues, keyed by field
pub fn collect_fixes(issues: &[ValidationIssue]) -> BTreeMap<IssueField, FieldFix> {
    let mut fixes = BTreeMap::new();

    for issue in issues.iter().filter(|i| i.is_applicable()) {
        let Some(value) = issue.suggested_value.as_deref() else {
            continue;
        };

        let fix = match issue.field {
            IssueField::MainIngredient => FieldFix::Name(value.to_string()),
            IssueField::CasNumber => FieldFix::CasNumber(value.to_string()),
            IssueField::ContentPercentage => match value.trim().trim_end_matches('%').parse::<f64>() {
                Ok(v) => FieldFix::Percentage(v),
                Err(_) => {
                    tracing::warn!(issue = %issue.id, value, "suggested content is not a number, skipping");
                    continue;
                }
            },
            IssueField::HazardClassification | IssueField::TotalContent | IssueField::Ingredients => continue,
        };

        fixes.insert(issue.field, fix);
    }

    fixes
}

/// Apply fixes to an ingredient. Returns the number of fields changed.
///
/// A content fix sets the numeric value when present and rewrites the text
/// only when it holds a single number; range text is left alone.
pub fn apply_fixes(ingredient: &mut IngredientRecord, fixes: &BTreeMap<IssueField, FieldFix>) -> usize {
    let mut changed = 0;

    for fix in fixes.values() {
        match fix {
            FieldFix::Name(name) => {
                if ingredient.name != *name {
                    ingredient.name = name.clone();
                    changed += 1;
                }
            }
            FieldFix::CasNumber(cas) => {
                if ingredient.cas_number.as_deref() != Some(cas.as_str()) {
                    ingredient.cas_number = Some(cas.clone());
                    changed += 1;
                }
            }
            FieldFix::Percentage(value) => {
                let mut touched = false;

                if ingredient.percentage_value.is_some() && ingredient.percentage_value != Some(*value) {
                    ingredient.percentage_value = Some(*value);
                    touched = true;
                }

                let single_text = ingredient
                    .percentage_text
                    .as_deref()
                    .and_then(parse_percentage_range)
                    .map_or(false, |r| r.is_single());
                if single_text {
                    let rendered = format!("{}%", format_percentage(*value));
                    if ingredient.percentage_text.as_deref() != Some(rendered.as_str()) {
                        ingredient.percentage_text = Some(rendered);
                        touched = true;
                    }
                }

                if touched {
                    changed += 1;
                }
            }
        }
    }

    changed
}

/// Apply every applicable fix to a copy of the product.
///
/// Issues are detected per ingredient position, so ingredients sharing an
/// id never receive each other's fixes. Returns the corrected product and
/// the number of fields changed.
pub fn fix_product(product: &ProductRecord, engine: &Engine) -> (ProductRecord, usize) {
    let mut fixed = product.clone();
    let mut changed = 0;

    for ingredient in &mut fixed.ingredients {
        let issues = detect_ingredient_issues(ingredient, ingredient.hazard_text.as_deref(), engine);
        let fixes = collect_fixes(&issues);
        if fixes.is_empty() {
            continue;
        }

        let n = apply_fixes(ingredient, &fixes);
        tracing::debug!(ingredient = %ingredient.id, fields = n, "fixes applied");
        changed += n;
    }

    (fixed, changed)
}
