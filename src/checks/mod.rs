//! Field validators.
//!
//! Each validator inspects one field and returns the problems it found:
//! - CAS: format, missing hyphens, check digit
//! - Name: missing, length, numeric-only, symbols-only, placeholder markers
//! - Percentage: bounds, zero, high concentration, precision, range text
//! - Hazard: placeholder markers, length, GHS keywords
//!
//! # Graceful Degradation
//!
//! Validators never panic and never return errors. Anything that cannot be
//! parsed is itself a finding; a correction that cannot be derived is simply
//! not suggested.

pub mod cas;
pub mod hazard;
pub mod name;
pub mod percentage;

use crate::{IssueField, Severity};

/// A rule the engine can report, for listing and documentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Issue id suffix, e.g. "cas-checksum"
    pub id: &'static str,
    pub field: IssueField,
    pub severity: Severity,
    pub auto_fixable: bool,
    pub description: &'static str,
}

const fn rule(
    id: &'static str,
    field: IssueField,
    severity: Severity,
    auto_fixable: bool,
    description: &'static str,
) -> Rule {
    Rule {
        id,
        field,
        severity,
        auto_fixable,
        description,
    }
}

/// Every rule, in the order the detector evaluates them
pub const RULES: &[Rule] = &[
    rule("cas-missing", IssueField::CasNumber, Severity::Suggestion, false, "CAS number is absent"),
    rule("cas-hyphenation", IssueField::CasNumber, Severity::Error, true, "Bare 6/7-digit CAS number needs hyphens"),
    rule("cas-checksum", IssueField::CasNumber, Severity::Error, true, "CAS check digit does not match"),
    rule("cas-format", IssueField::CasNumber, Severity::Warning, false, "CAS number does not match D{2,7}-DD-D"),
    rule("name-missing", IssueField::MainIngredient, Severity::Error, false, "Ingredient name is empty"),
    rule("name-too-short", IssueField::MainIngredient, Severity::Warning, false, "Ingredient name is shorter than 2 characters"),
    rule("name-numeric", IssueField::MainIngredient, Severity::Warning, false, "Ingredient name is digits only"),
    rule("name-symbols", IssueField::MainIngredient, Severity::Warning, false, "Ingredient name has no letters or digits"),
    rule("name-placeholder", IssueField::MainIngredient, Severity::Error, false, "Ingredient name contains an error/test marker"),
    rule("name-too-long", IssueField::MainIngredient, Severity::Warning, false, "Ingredient name is longer than 100 characters"),
    rule("content-missing", IssueField::ContentPercentage, Severity::Suggestion, false, "Content percentage is absent"),
    rule("content-negative", IssueField::ContentPercentage, Severity::Error, true, "Content percentage is negative"),
    rule("content-over-100", IssueField::ContentPercentage, Severity::Error, false, "Content percentage exceeds 100%"),
    rule("content-zero", IssueField::ContentPercentage, Severity::Suggestion, false, "Content percentage is exactly 0"),
    rule("content-high", IssueField::ContentPercentage, Severity::Warning, false, "Content percentage above the high-concentration limit"),
    rule("content-precision", IssueField::ContentPercentage, Severity::Suggestion, true, "Content percentage has more than 2 decimal places"),
    rule("content-unparseable", IssueField::ContentPercentage, Severity::Warning, false, "Content text is not a number or range"),
    rule("content-range-reversed", IssueField::ContentPercentage, Severity::Warning, false, "Content range minimum exceeds maximum"),
    rule("hazard-placeholder", IssueField::HazardClassification, Severity::Error, false, "Hazard text is an invalid-classification placeholder"),
    rule("hazard-too-short", IssueField::HazardClassification, Severity::Warning, false, "Hazard text is shorter than 10 characters"),
    rule("hazard-no-keyword", IssueField::HazardClassification, Severity::Warning, false, "Hazard text has no GHS classification term"),
    rule("cas-name-mismatch", IssueField::MainIngredient, Severity::Warning, true, "Name differs from the registered name for the CAS number"),
    rule("hazard-threshold", IssueField::ContentPercentage, Severity::Warning, false, "Content exceeds the safe limit for a hazardous substance"),
    rule("name-standardize", IssueField::MainIngredient, Severity::Suggestion, true, "Name has a standard form"),
    rule("cas-duplicate", IssueField::CasNumber, Severity::Warning, false, "CAS number repeated within a product"),
    rule("no-ingredients", IssueField::Ingredients, Severity::Warning, false, "Product has no ingredients"),
    rule("total-over-100", IssueField::TotalContent, Severity::Error, false, "Sum of maximum contents exceeds 100%"),
    rule("total-under-95", IssueField::TotalContent, Severity::Warning, false, "Sum of maximum contents is below 95%"),
];

/// Get all rules
pub fn get_all_rules() -> &'static [Rule] {
    RULES
}

/// Get rules reporting on a specific field
pub fn get_rules_by_field(field: IssueField) -> Vec<&'static Rule> {
    RULES.iter().filter(|r| r.field == field).collect()
}

/// Look up a rule by issue id, which may carry an ingredient prefix
pub fn find_rule(issue_id: &str) -> Option<&'static Rule> {
    RULES
        .iter()
        .filter(|r| issue_id == r.id || issue_id.ends_with(&format!("-{}", r.id)))
        .max_by_key(|r| r.id.len())
}
