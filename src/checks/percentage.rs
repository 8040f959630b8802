//! Content percentage validation and range parsing.
//!
//! MSDS sheets give contents as free text: "10-20%", "<5%", ">95%", "12.5%".
//! The range parser turns these into numeric bounds; the value validator
//! checks a single number.

use crate::config::Limits;
use crate::IngredientRecord;
use serde::Serialize;

/// Parsed content range in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PercentageRange {
    pub min: f64,
    pub max: f64,
}

impl PercentageRange {
    pub fn single(value: f64) -> Self {
        PercentageRange {
            min: value,
            max: value,
        }
    }

    pub fn is_single(&self) -> bool {
        self.min == self.max
    }
}

/// A problem with a content value or its text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PercentageProblem {
    Missing,
    Negative,
    OverHundred,
    Zero,
    HighConcentration,
    ExcessPrecision,
    Unparseable,
    ReversedRange,
}

impl PercentageProblem {
    pub fn slug(&self) -> &'static str {
        match self {
            PercentageProblem::Missing => "content-missing",
            PercentageProblem::Negative => "content-negative",
            PercentageProblem::OverHundred => "content-over-100",
            PercentageProblem::Zero => "content-zero",
            PercentageProblem::HighConcentration => "content-high",
            PercentageProblem::ExcessPrecision => "content-precision",
            PercentageProblem::Unparseable => "content-unparseable",
            PercentageProblem::ReversedRange => "content-range-reversed",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            PercentageProblem::Missing => "함유량 정보가 없습니다",
            PercentageProblem::Negative => "함유량이 음수입니다",
            PercentageProblem::OverHundred => "함유량이 100%를 초과합니다 (>100%)",
            PercentageProblem::Zero => "함유량이 0%입니다",
            PercentageProblem::HighConcentration => "고농도 성분입니다",
            PercentageProblem::ExcessPrecision => "함유량의 소수점 자릿수가 너무 많습니다",
            PercentageProblem::Unparseable => "함유량 표기 형식을 인식할 수 없습니다",
            PercentageProblem::ReversedRange => "함유량 범위의 최솟값이 최댓값보다 큽니다",
        }
    }
}

/// Result of validating a content value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PercentageValidation {
    pub valid: bool,
    pub issues: Vec<PercentageProblem>,
}

/// Validate a single content value.
///
/// Each condition is checked independently. Magnitude checks run on the
/// absolute value, so a negative value may also be flagged as too large.
pub fn validate_percentage(value: Option<f64>, limits: &Limits) -> PercentageValidation {
    let mut issues = Vec::new();

    match value {
        None => issues.push(PercentageProblem::Missing),
        Some(v) if !v.is_finite() => issues.push(PercentageProblem::Unparseable),
        Some(v) => {
            if v < 0.0 {
                issues.push(PercentageProblem::Negative);
            }

            let magnitude = v.abs();
            if magnitude > 100.0 {
                issues.push(PercentageProblem::OverHundred);
            } else if magnitude > limits.high_concentration {
                issues.push(PercentageProblem::HighConcentration);
            }

            if magnitude == 0.0 {
                issues.push(PercentageProblem::Zero);
            }

            if decimal_places(magnitude) > limits.max_decimal_places {
                issues.push(PercentageProblem::ExcessPrecision);
            }
        }
    }

    PercentageValidation {
        valid: issues.is_empty(),
        issues,
    }
}

/// Check the free-text form of a content value
pub fn validate_percentage_text(text: &str) -> Vec<PercentageProblem> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    match parse_percentage_range(text) {
        None => vec![PercentageProblem::Unparseable],
        Some(range) if range.min > range.max => vec![PercentageProblem::ReversedRange],
        Some(_) => Vec::new(),
    }
}

/// Parse "a-b%", "a~b%", "<b%", ">a%", or "a%" into a range.
///
/// Unparseable text yields `None`.
pub fn parse_percentage_range(text: &str) -> Option<PercentageRange> {
    let s = text.trim();
    if s.is_empty() {
        return None;
    }

    for prefix in ["<=", "≤", "<"] {
        if let Some(rest) = s.strip_prefix(prefix) {
            return Some(PercentageRange {
                min: 0.0,
                max: parse_number(rest)?,
            });
        }
    }
    for prefix in [">=", "≥", ">"] {
        if let Some(rest) = s.strip_prefix(prefix) {
            return Some(PercentageRange {
                min: parse_number(rest)?,
                max: 100.0,
            });
        }
    }

    if let Some((low, high)) = split_range(s) {
        return Some(PercentageRange {
            min: parse_number(low)?,
            max: parse_number(high)?,
        });
    }

    parse_number(s).map(PercentageRange::single)
}

/// An ingredient's content: the explicit value, else the text (a single
/// number, or the upper bound of a range).
///
/// Every content check and the product total read this one number.
pub fn effective_percentage(ingredient: &IngredientRecord) -> Option<f64> {
    ingredient.percentage_value.or_else(|| {
        ingredient
            .percentage_text
            .as_deref()
            .and_then(parse_percentage_range)
            .map(|r| r.max)
    })
}

/// Render a number without a trailing ".0"
pub fn format_percentage(value: f64) -> String {
    format!("{}", value)
}

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, places: usize) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

fn decimal_places(value: f64) -> usize {
    let rendered = format!("{}", value);
    rendered
        .split_once('.')
        .map(|(_, frac)| frac.len())
        .unwrap_or(0)
}

fn split_range(s: &str) -> Option<(&str, &str)> {
    if let Some(split) = s.split_once('~') {
        return Some(split);
    }
    // A leading '-' is a sign, not a separator
    let idx = s.char_indices().skip(1).find(|(_, c)| *c == '-').map(|(i, _)| i)?;
    Some((&s[..idx], &s[idx + 1..]))
}

fn parse_number(s: &str) -> Option<f64> {
    let cleaned = s.trim().trim_end_matches('%').trim();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}
