//! Per-ingredient issue detection.
//!
//! Runs the field validators for one ingredient in a fixed order and turns
//! their findings into [`ValidationIssue`]s:
//!
//! 1. CAS number
//! 2. Ingredient name
//! 3. Content percentage
//! 4. Hazard text
//! 5. Name vs. registered name for the CAS number
//! 6. Content vs. hazard threshold for the CAS number
//! 7. Name standardization

use crate::checks::cas::{normalize_cas, validate_cas_number, CasProblem};
use crate::checks::hazard::{validate_hazard_text, HazardProblem};
use crate::checks::name::validate_ingredient_name;
use crate::checks::percentage::{
    effective_percentage, format_percentage, parse_percentage_range, round_to,
    validate_percentage, validate_percentage_text, PercentageProblem,
};
use crate::data::ReferenceData;
use crate::{Engine, IngredientRecord, IssueField, Severity, ValidationIssue};

/// Detect all issues for one ingredient.
///
/// `hazard_text` is the classification text to check alongside the
/// ingredient; pass `None` to skip hazard checks.
pub fn detect_ingredient_issues(
    ingredient: &IngredientRecord,
    hazard_text: Option<&str>,
    engine: &Engine,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    check_cas(ingredient, &mut issues);
    check_name(ingredient, engine, &mut issues);
    check_percentage(ingredient, engine, &mut issues);
    issues.extend(hazard_issues(
        hazard_text,
        engine,
        &format!("{}-", ingredient.id),
    )
    .into_iter()
    .map(|issue| issue.for_ingredient(&ingredient.id)));

    if let Some(cas) = ingredient.cas_number.as_deref().and_then(normalize_cas) {
        check_registered_name(ingredient, &cas, &engine.reference, &mut issues);
        check_hazard_threshold(ingredient, &cas, &engine.reference, &mut issues);
    }

    check_standard_name(ingredient, &engine.reference, &mut issues);

    tracing::debug!(
        ingredient = %ingredient.id,
        issues = issues.len(),
        "ingredient checked"
    );

    issues
}

/// Canonical form of an ingredient name; the trimmed input when no alias applies
pub fn standardize_ingredient_name(name: &str, reference: &ReferenceData) -> String {
    reference
        .alias_target(name)
        .map(str::to_string)
        .unwrap_or_else(|| name.trim().to_string())
}

/// Issues for a hazard text, ids prefixed with `id_prefix`
pub(crate) fn hazard_issues(
    hazard_text: Option<&str>,
    engine: &Engine,
    id_prefix: &str,
) -> Vec<ValidationIssue> {
    let validation = validate_hazard_text(hazard_text, &engine.limits);
    let original = hazard_text.unwrap_or_default().trim();

    validation
        .issues
        .into_iter()
        .map(|problem| {
            let severity = match problem {
                HazardProblem::Placeholder => Severity::Error,
                HazardProblem::TooShort | HazardProblem::NoGhsKeyword => Severity::Warning,
            };
            ValidationIssue::new(
                format!("{}{}", id_prefix, problem.slug()),
                severity,
                IssueField::HazardClassification,
                problem.message(),
                format!("유해성 분류: '{}'", original),
                original,
            )
        })
        .collect()
}

fn issue_id(ingredient: &IngredientRecord, slug: &str) -> String {
    format!("{}-{}", ingredient.id, slug)
}

fn check_cas(ingredient: &IngredientRecord, issues: &mut Vec<ValidationIssue>) {
    let cas = match ingredient.cas_number.as_deref().map(str::trim) {
        Some(c) if !c.is_empty() => c,
        _ => {
            issues.push(
                ValidationIssue::new(
                    issue_id(ingredient, "cas-missing"),
                    Severity::Suggestion,
                    IssueField::CasNumber,
                    "CAS 번호 누락",
                    "CAS 번호를 입력하면 성분명과 유해성 기준을 확인할 수 있습니다",
                    "",
                )
                .for_ingredient(&ingredient.id),
            );
            return;
        }
    };

    let validation = validate_cas_number(cas);
    if validation.valid {
        return;
    }

    let problem = validation.problem.unwrap_or(CasProblem::Format);
    let description = match (problem, validation.suggestion.as_deref()) {
        (CasProblem::Checksum, Some(fixed)) => {
            format!("'{}'의 검증번호가 올바르지 않습니다 (올바른 번호: {})", cas, fixed)
        }
        (CasProblem::MissingHyphens, Some(fixed)) => {
            format!("'{}'에 하이픈이 없습니다 (올바른 형식: {})", cas, fixed)
        }
        _ => format!("'{}'은(는) CAS 번호 형식(XXXXXXX-XX-X)이 아닙니다", cas),
    };

    let issue = ValidationIssue::new(
        issue_id(ingredient, problem.slug()),
        Severity::Warning,
        IssueField::CasNumber,
        problem.title(),
        description,
        cas,
    )
    .for_ingredient(&ingredient.id);

    issues.push(match validation.suggestion {
        Some(fixed) => ValidationIssue {
            severity: Severity::Error,
            ..issue.with_suggestion(fixed, true)
        },
        None => issue,
    });
}

fn check_name(ingredient: &IngredientRecord, engine: &Engine, issues: &mut Vec<ValidationIssue>) {
    let validation = validate_ingredient_name(&ingredient.name, &engine.limits);
    let name = ingredient.name.trim();

    for problem in validation.issues {
        let severity = if problem.is_blocking() {
            Severity::Error
        } else {
            Severity::Warning
        };
        issues.push(
            ValidationIssue::new(
                issue_id(ingredient, problem.slug()),
                severity,
                IssueField::MainIngredient,
                problem.message(),
                format!("성분명: '{}'", name),
                name,
            )
            .for_ingredient(&ingredient.id),
        );
    }
}

fn check_percentage(ingredient: &IngredientRecord, engine: &Engine, issues: &mut Vec<ValidationIssue>) {
    let limits = &engine.limits;
    let text = ingredient.percentage_text.as_deref().map(str::trim).unwrap_or("");
    let value = effective_percentage(ingredient);

    let original = match ingredient.percentage_value {
        Some(v) => format_percentage(v),
        None => text.to_string(),
    };

    // Fixes rewrite a single number; ranges are left for review
    let single_value = ingredient.percentage_value.is_some()
        || parse_percentage_range(text).map_or(false, |r| r.is_single());

    let mut problems = validate_percentage_text(text);
    let unparseable = problems.contains(&PercentageProblem::Unparseable);
    problems.extend(
        validate_percentage(value, limits)
            .issues
            .into_iter()
            .filter(|p| !(unparseable && *p == PercentageProblem::Missing)),
    );

    for problem in problems {
        let severity = match problem {
            PercentageProblem::Negative | PercentageProblem::OverHundred => Severity::Error,
            PercentageProblem::HighConcentration
            | PercentageProblem::Unparseable
            | PercentageProblem::ReversedRange => Severity::Warning,
            PercentageProblem::Missing | PercentageProblem::Zero | PercentageProblem::ExcessPrecision => {
                Severity::Suggestion
            }
        };

        let description = match (problem, value) {
            (PercentageProblem::HighConcentration, Some(v)) => format!(
                "함유량 {}%가 {}%를 초과합니다. 값을 확인하세요",
                format_percentage(v.abs()),
                format_percentage(limits.high_concentration)
            ),
            (PercentageProblem::ExcessPrecision, _) => format!(
                "소수점 {}자리까지 표기하세요 (현재: {})",
                limits.max_decimal_places, original
            ),
            _ => format!("함유량: '{}'", original),
        };

        let issue = ValidationIssue::new(
            issue_id(ingredient, problem.slug()),
            severity,
            IssueField::ContentPercentage,
            problem.message(),
            description,
            original.clone(),
        )
        .for_ingredient(&ingredient.id);

        let suggestion = match (problem, value) {
            (PercentageProblem::Negative, Some(v)) => Some(format_percentage(v.abs())),
            (PercentageProblem::ExcessPrecision, Some(v)) => {
                Some(format_percentage(round_to(v.abs(), limits.max_decimal_places)))
            }
            _ => None,
        };

        issues.push(match suggestion {
            Some(s) => issue.with_suggestion(s, single_value),
            None => issue,
        });
    }
}

fn check_registered_name(
    ingredient: &IngredientRecord,
    cas: &str,
    reference: &ReferenceData,
    issues: &mut Vec<ValidationIssue>,
) {
    let name = ingredient.name.trim();
    if name.is_empty() {
        return;
    }
    let Some(canonical) = reference.canonical_name(cas) else {
        return;
    };

    let name_lower = name.to_lowercase();
    let canonical_lower = canonical.to_lowercase();
    if name_lower.contains(&canonical_lower) || canonical_lower.contains(&name_lower) {
        return;
    }

    issues.push(
        ValidationIssue::new(
            issue_id(ingredient, "cas-name-mismatch"),
            Severity::Warning,
            IssueField::MainIngredient,
            "CAS 번호와 성분명 불일치",
            format!("CAS {}는 '{}'로 등록되어 있습니다", cas, canonical),
            name,
        )
        .for_ingredient(&ingredient.id)
        .with_suggestion(canonical, true),
    );
}

fn check_hazard_threshold(
    ingredient: &IngredientRecord,
    cas: &str,
    reference: &ReferenceData,
    issues: &mut Vec<ValidationIssue>,
) {
    let Some(threshold) = reference.hazard_threshold(cas) else {
        return;
    };
    let Some(max) = effective_percentage(ingredient) else {
        return;
    };
    if max <= threshold.max_safe_percentage {
        return;
    }

    issues.push(
        ValidationIssue::new(
            issue_id(ingredient, "hazard-threshold"),
            Severity::Warning,
            IssueField::ContentPercentage,
            "유해물질 함량 기준 초과",
            threshold.warning_text.clone(),
            format_percentage(max),
        )
        .for_ingredient(&ingredient.id),
    );
}

fn check_standard_name(
    ingredient: &IngredientRecord,
    reference: &ReferenceData,
    issues: &mut Vec<ValidationIssue>,
) {
    let name = ingredient.name.trim();
    if name.is_empty() {
        return;
    }

    let standard = standardize_ingredient_name(name, reference);
    if standard == name {
        return;
    }

    issues.push(
        ValidationIssue::new(
            issue_id(ingredient, "name-standardize"),
            Severity::Suggestion,
            IssueField::MainIngredient,
            "성분명 표준화",
            format!("'{}'의 표준 성분명은 '{}'입니다", name, standard),
            name,
        )
        .for_ingredient(&ingredient.id)
        .with_suggestion(standard, true),
    );
}
