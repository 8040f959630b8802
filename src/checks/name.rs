//! Ingredient name validation.

use crate::config::Limits;
use serde::Serialize;

/// Markers that show up in names produced by failed extraction or test data
pub const NAME_PLACEHOLDER_MARKERS: &[&str] = &["잘못된", "오류", "테스트", "invalid", "error", "test"];

/// A problem with an ingredient name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NameProblem {
    Missing,
    TooShort,
    NumericOnly,
    NoLetters,
    Placeholder,
    TooLong,
}

impl NameProblem {
    pub fn slug(&self) -> &'static str {
        match self {
            NameProblem::Missing => "name-missing",
            NameProblem::TooShort => "name-too-short",
            NameProblem::NumericOnly => "name-numeric",
            NameProblem::NoLetters => "name-symbols",
            NameProblem::Placeholder => "name-placeholder",
            NameProblem::TooLong => "name-too-long",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            NameProblem::Missing => "성분명이 비어 있습니다",
            NameProblem::TooShort => "성분명이 너무 짧습니다",
            NameProblem::NumericOnly => "성분명이 숫자로만 구성되어 있습니다",
            NameProblem::NoLetters => "성분명에 문자가 없습니다",
            NameProblem::Placeholder => "성분명에 오류 또는 임시 표기가 포함되어 있습니다",
            NameProblem::TooLong => "성분명이 너무 깁니다",
        }
    }

    /// Missing and placeholder names cannot be approved as-is
    pub fn is_blocking(&self) -> bool {
        matches!(self, NameProblem::Missing | NameProblem::Placeholder)
    }
}

/// Result of validating a name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameValidation {
    pub valid: bool,
    pub issues: Vec<NameProblem>,
}

/// Validate an ingredient name. All independent problems are reported; a
/// missing name is reported alone.
pub fn validate_ingredient_name(name: &str, limits: &Limits) -> NameValidation {
    let trimmed = name.trim();
    let mut issues = Vec::new();

    if trimmed.is_empty() {
        issues.push(NameProblem::Missing);
        return NameValidation { valid: false, issues };
    }

    let char_count = trimmed.chars().count();

    if char_count < limits.name_min_chars {
        issues.push(NameProblem::TooShort);
    }

    if trimmed.chars().all(|c| c.is_ascii_digit()) {
        issues.push(NameProblem::NumericOnly);
    }

    // char::is_alphanumeric covers Hangul syllables and jamo
    if !trimmed.chars().any(char::is_alphanumeric) {
        issues.push(NameProblem::NoLetters);
    }

    if contains_marker(trimmed, NAME_PLACEHOLDER_MARKERS) {
        issues.push(NameProblem::Placeholder);
    }

    if char_count > limits.name_max_chars {
        issues.push(NameProblem::TooLong);
    }

    NameValidation {
        valid: issues.is_empty(),
        issues,
    }
}

/// Case-insensitive substring match against a marker list
pub(crate) fn contains_marker(text: &str, markers: &[&str]) -> bool {
    let lowered = text.to_lowercase();
    markers.iter().any(|m| lowered.contains(&m.to_lowercase()))
}
