//! Product-level checks.
//!
//! Findings that need the whole ingredient list: total content, repeated CAS
//! numbers, and the product's own hazard classification text.

use super::detector::hazard_issues;
use crate::checks::cas::is_cas_format;
use crate::checks::percentage::{effective_percentage, format_percentage, round_to};
use crate::{Engine, IssueField, ProductRecord, Severity, ValidationIssue};
use std::collections::HashSet;

/// Issues that concern the product as a whole.
pub fn product_level_issues(product: &ProductRecord, engine: &Engine) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if product.ingredients.is_empty() {
        issues.push(ValidationIssue::new(
            "no-ingredients",
            Severity::Warning,
            IssueField::Ingredients,
            "구성성분 없음",
            format!("'{}'에 등록된 구성성분이 없습니다", product.name),
            "",
        ));
    }

    issues.extend(duplicate_cas_issues(product));
    issues.extend(hazard_issues(product.hazard_text.as_deref(), engine, "product-"));

    if let Some(issue) = total_content_issue(product, engine) {
        issues.push(issue);
    }

    issues
}

/// Sum of the maximum content of every ingredient with a parseable
/// percentage, rounded to 2 decimals. `None` when no ingredient has one.
pub fn total_max_percentage(product: &ProductRecord) -> Option<f64> {
    let maxima: Vec<f64> = product.ingredients.iter().filter_map(effective_percentage).collect();
    if maxima.is_empty() {
        return None;
    }
    Some(round_to(maxima.iter().sum(), 2))
}

fn total_content_issue(product: &ProductRecord, engine: &Engine) -> Option<ValidationIssue> {
    let limits = &engine.limits;
    let total = total_max_percentage(product)?;

    if total > limits.total_max {
        Some(ValidationIssue::new(
            "total-over-100",
            Severity::Error,
            IssueField::TotalContent,
            "총 함유량 100% 초과",
            format!(
                "구성성분 최대 함유량의 합이 {}%로 {}%를 초과합니다",
                format_percentage(total),
                format_percentage(limits.total_max)
            ),
            format_percentage(total),
        ))
    } else if total > 0.0 && total < limits.total_min_disclosed {
        Some(ValidationIssue::new(
            "total-under-95",
            Severity::Warning,
            IssueField::TotalContent,
            "총 함유량 부족",
            format!(
                "구성성분 최대 함유량의 합이 {}%로 {}% 미만입니다. 누락된 성분이 있는지 확인하세요",
                format_percentage(total),
                format_percentage(limits.total_min_disclosed)
            ),
            format_percentage(total),
        ))
    } else {
        None
    }
}

fn duplicate_cas_issues(product: &ProductRecord) -> Vec<ValidationIssue> {
    let mut seen = HashSet::new();
    let mut issues = Vec::new();

    for ingredient in &product.ingredients {
        let Some(cas) = ingredient.cas_number.as_deref().map(str::trim) else {
            continue;
        };
        if !is_cas_format(cas) {
            continue;
        }
        if !seen.insert(cas) {
            issues.push(
                ValidationIssue::new(
                    format!("{}-cas-duplicate", ingredient.id),
                    Severity::Warning,
                    IssueField::CasNumber,
                    "CAS 번호 중복",
                    format!("CAS {}가 같은 제품에 두 번 이상 등록되어 있습니다", cas),
                    cas,
                )
                .for_ingredient(&ingredient.id),
            );
        }
    }

    issues
}
