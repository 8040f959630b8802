//! Hazard classification text validation.
//!
//! Heuristic only: catches placeholders and obviously malformed entries,
//! does not certify GHS compliance.

use super::name::contains_marker;
use crate::config::Limits;
use serde::Serialize;

/// Placeholders written by failed extraction
pub const HAZARD_PLACEHOLDER_MARKERS: &[&str] = &["잘못된 분류", "invalid classification", "분류 불가"];

/// Terms that appear in GHS hazard statements and classifications
const GHS_KEYWORDS: &[&str] = &[
    "유해",
    "위험",
    "독성",
    "인화성",
    "자극",
    "부식",
    "발암",
    "과민",
    "구분",
    "산화성",
    "hazard",
    "toxic",
    "flammable",
    "irritat",
    "corros",
    "carcinogen",
    "sensiti",
    "category",
    "oxidi",
];

/// A problem with hazard text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HazardProblem {
    Placeholder,
    TooShort,
    NoGhsKeyword,
}

impl HazardProblem {
    pub fn slug(&self) -> &'static str {
        match self {
            HazardProblem::Placeholder => "hazard-placeholder",
            HazardProblem::TooShort => "hazard-too-short",
            HazardProblem::NoGhsKeyword => "hazard-no-keyword",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            HazardProblem::Placeholder => "유해성 분류가 잘못된 분류로 표기되어 있습니다",
            HazardProblem::TooShort => "유해성 분류 정보가 너무 짧습니다",
            HazardProblem::NoGhsKeyword => "GHS 유해성 분류 표현을 찾을 수 없습니다",
        }
    }
}

/// Result of validating hazard text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HazardValidation {
    pub valid: bool,
    pub issues: Vec<HazardProblem>,
}

/// Validate hazard text. Absent or blank text is valid.
pub fn validate_hazard_text(text: Option<&str>, limits: &Limits) -> HazardValidation {
    let mut issues = Vec::new();

    let text = match text.map(str::trim) {
        Some(t) if !t.is_empty() => t,
        _ => {
            return HazardValidation {
                valid: true,
                issues,
            }
        }
    };

    if contains_marker(text, HAZARD_PLACEHOLDER_MARKERS) {
        issues.push(HazardProblem::Placeholder);
    }

    if text.chars().count() < limits.hazard_min_chars {
        issues.push(HazardProblem::TooShort);
    } else if !has_ghs_keyword(text) {
        issues.push(HazardProblem::NoGhsKeyword);
    }

    HazardValidation {
        valid: issues.is_empty(),
        issues,
    }
}

/// True when text contains a GHS term or a hazard statement code (H2xx-H4xx)
pub fn has_ghs_keyword(text: &str) -> bool {
    contains_marker(text, GHS_KEYWORDS) || has_hazard_code(text)
}

fn has_hazard_code(text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    chars.windows(4).any(|w| {
        (w[0] == 'H' || w[0] == 'h')
            && matches!(w[1], '2' | '3' | '4')
            && w[2].is_ascii_digit()
            && w[3].is_ascii_digit()
    })
}
