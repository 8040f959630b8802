//! Engine integration tests.
//!
//! Full product validation through the public API: issue order, product
//! totals, rollup, and the documented edge cases.

use crate::mocks::*;
use msds_check::checks::cas::validate_cas_number;
use msds_check::engine::detector::standardize_ingredient_name;
use msds_check::{
    detect_ingredient_issues, product_level_issues, validate_product, validate_products, Engine, EngineConfig,
    IssueField, ProductStatus, ReferenceData, Severity, StatusKind,
};

fn ids(issues: &[msds_check::ValidationIssue]) -> Vec<&str> {
    issues.iter().map(|i| i.id.as_str()).collect()
}

#[test]
fn test_clean_product_is_completed() {
    let report = validate_product(&clean_product(), &Engine::builtin());
    assert!(report.issues.is_empty(), "{:?}", report.issues);
    assert_eq!(report.status.status, StatusKind::Completed);
    assert!(report.is_approvable(true));
}

#[test]
fn test_ethanol_cas_is_valid() {
    let result = validate_cas_number("64-17-5");
    assert!(result.valid);
    assert_eq!(result.suggestion, None);
}

#[test]
fn test_five_digit_cas_is_rejected_without_suggestion() {
    let result = validate_cas_number("64175");
    assert!(!result.valid);
    assert_eq!(result.suggestion, None);
}

#[test]
fn test_seven_digit_cas_gets_hyphens() {
    let result = validate_cas_number("7732185");
    assert_eq!(result.suggestion.as_deref(), Some("7732-18-5"));
}

#[test]
fn test_over_hundred_and_negative_content() {
    let engine = Engine::builtin();

    let over = MockIngredient::new("1", "에탄올").cas("64-17-5").value(105.0).build();
    let issues = detect_ingredient_issues(&over, None, &engine);
    let error = issues.iter().find(|i| i.severity == Severity::Error).unwrap();
    assert!(error.title.contains(">100%"));

    let negative = MockIngredient::new("1", "에탄올").cas("64-17-5").value(-5.0).build();
    let issues = detect_ingredient_issues(&negative, None, &engine);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, Severity::Error);
    assert!(issues[0].auto_fixable);
    assert_eq!(issues[0].suggested_value.as_deref(), Some("5"));
}

#[test]
fn test_total_over_hundred_yields_one_product_error() {
    let report = validate_product(&overfilled_product(), &Engine::builtin());
    let product_errors: Vec<_> = report
        .product_issues()
        .into_iter()
        .filter(|i| i.severity == Severity::Error)
        .collect();
    assert_eq!(product_errors.len(), 1);
    assert_eq!(product_errors[0].id, "total-over-100");
    assert_eq!(product_errors[0].field, IssueField::TotalContent);
}

#[test]
fn test_total_of_fifty_yields_one_warning() {
    let product = MockProduct::new("반제품")
        .ingredient(MockIngredient::new("1", "정제수").cas("7732-18-5").content("20-30%"))
        .ingredient(MockIngredient::new("2", "에탄올").cas("64-17-5").content("<20%"))
        .build();
    let issues = product_level_issues(&product, &Engine::builtin());
    assert_eq!(ids(&issues), vec!["total-under-95"]);
    assert_eq!(issues[0].severity, Severity::Warning);
}

#[test]
fn test_warning_and_suggestion_roll_up_to_warning() {
    // 90% is a high-concentration warning; the missing CAS is a suggestion
    let product = MockProduct::new("농축액")
        .ingredient(MockIngredient::new("1", "정제수").content("90%"))
        .ingredient(MockIngredient::new("2", "에탄올").cas("64-17-5").content("10%"))
        .build();
    let report = validate_product(&product, &Engine::builtin());
    assert_eq!(report.count(Severity::Warning), 1);
    assert_eq!(report.count(Severity::Suggestion), 1);
    assert_eq!(report.count(Severity::Error), 0);
    assert_eq!(report.status.status, StatusKind::Warning);
    assert_eq!(ProductStatus::from_issues(&report.issues).status, StatusKind::Warning);
}

#[test]
fn test_standardized_name_is_stable() {
    let engine = Engine::builtin();
    assert_eq!(standardize_ingredient_name("Water", &engine.reference), "정제수");

    let water = MockIngredient::new("1", "Water").cas("7732-18-5").content("100%").build();
    let issues = detect_ingredient_issues(&water, None, &engine);
    let suggestion = issues.iter().find(|i| i.id == "1-name-standardize").unwrap();
    let canonical = suggestion.suggested_value.clone().unwrap();
    assert_eq!(canonical, "정제수");

    let corrected = MockIngredient::new("1", &canonical).cas("7732-18-5").content("100%").build();
    let issues = detect_ingredient_issues(&corrected, None, &engine);
    assert!(issues.iter().all(|i| i.id != "1-name-standardize"));
    assert_eq!(standardize_ingredient_name(&canonical, &engine.reference), canonical);
}

#[test]
fn test_empty_name_yields_exactly_one_name_error() {
    let engine = Engine::builtin();
    let variants = [
        MockIngredient::new("1", "").build(),
        MockIngredient::new("1", "  ").cas("64-17-5").content("30%").build(),
        MockIngredient::new("1", "").cas("71-43-2").value(-5.0).hazard("오류").build(),
        MockIngredient::new("1", "").cas("64-17-6").content("105%").build(),
    ];

    for ingredient in &variants {
        let issues = detect_ingredient_issues(ingredient, ingredient.hazard_text.as_deref(), &engine);
        let name_errors: Vec<_> = issues
            .iter()
            .filter(|i| i.field == IssueField::MainIngredient && i.severity == Severity::Error)
            .collect();
        assert_eq!(name_errors.len(), 1, "{:?}", ingredient);
        assert_eq!(name_errors[0].id, "1-name-missing");
    }
}

#[test]
fn test_issues_follow_ingredient_order() {
    let report = validate_product(&fixable_product(), &Engine::builtin());
    assert_eq!(
        ids(&report.issues),
        vec!["1-cas-hyphenation", "1-name-standardize", "2-cas-checksum", "2-content-precision"]
    );
}

#[test]
fn test_hazard_thresholds() {
    let report = validate_product(&hazardous_product(), &Engine::builtin());
    assert_eq!(ids(&report.issues), vec!["1-hazard-threshold", "2-hazard-threshold"]);
    assert!(report.issues[1].description.contains("벤젠"));
    assert_eq!(report.status.status, StatusKind::Warning);
}

#[test]
fn test_batch_summary_and_exit_code() {
    let report = validate_products(
        &[clean_product(), hazardous_product(), overfilled_product()],
        &Engine::builtin(),
    );
    let summary = report.summary();
    assert_eq!(summary.products, 3);
    assert_eq!(summary.completed, 1);
    assert_eq!(summary.with_warnings, 1);
    assert_eq!(summary.with_errors, 1);
    assert_eq!(report.exit_code(false), 1);
}

#[test]
fn test_configured_substance_and_limits() {
    let config = EngineConfig::from_toml_str(
        r#"
        [limits]
        high_concentration = 95.0

        [[substances]]
        cas = "7440-50-8"
        name = "구리"

        [[hazards]]
        cas = "7440-50-8"
        max_safe_percentage = 1.0
        warning_text = "구리 1% 초과"

        [[aliases]]
        alias = "copper"
        canonical = "구리"
        "#,
    )
    .unwrap();
    let engine = Engine::from_config(&config).unwrap();

    let product = MockProduct::new("합금 세정제")
        .ingredient(MockIngredient::new("1", "정제수").cas("7732-18-5").content("90%"))
        .ingredient(MockIngredient::new("2", "copper").cas("7440-50-8").content("10%"))
        .build();
    let report = validate_product(&product, &engine);
    assert_eq!(
        ids(&report.issues),
        vec!["2-cas-name-mismatch", "2-hazard-threshold", "2-name-standardize"]
    );
    assert_eq!(report.issues[0].suggested_value.as_deref(), Some("구리"));
}

#[test]
fn test_reference_tables_are_consistent() {
    let reference = ReferenceData::load();
    for cas in reference.substances.keys() {
        assert!(validate_cas_number(cas).valid, "{} fails its checksum", cas);
    }
    for cas in reference.hazards.keys() {
        assert!(reference.canonical_name(cas).is_some(), "{} has no name", cas);
    }
    for canonical in reference.aliases.values() {
        assert!(
            reference.substances.values().any(|name| name == canonical),
            "alias target {} is not a known substance",
            canonical
        );
    }
}
