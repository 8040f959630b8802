//! Auto-fix integration tests.
//!
//! Validate, fix, and re-validate products end to end.

use crate::mocks::*;
use msds_check::engine::fix::fix_product;
use msds_check::{apply_fixes, collect_fixes, detect_ingredient_issues, validate_product, Engine, FieldFix, IssueField};

#[test]
fn test_fixing_removes_fixed_issues() {
    let engine = Engine::builtin();
    let product = fixable_product();

    let before = validate_product(&product, &engine);
    assert_eq!(before.auto_fixable_count(), 4);

    let (fixed, changed) = fix_product(&product, &engine);
    assert_eq!(changed, 4);

    let after = validate_product(&fixed, &engine);
    assert!(after.issues.is_empty(), "{:?}", after.issues);
    assert_eq!(fixed.ingredients[1].percentage_text.as_deref(), Some("40%"));
}

#[test]
fn test_fixing_is_idempotent() {
    let engine = Engine::builtin();
    let product = fixable_product();

    let (once, _) = fix_product(&product, &engine);
    let (twice, changed) = fix_product(&once, &engine);
    assert_eq!(changed, 0);
    assert_eq!(once, twice);
}

#[test]
fn test_unfixable_issues_are_left_alone() {
    let engine = Engine::builtin();
    let product = overfilled_product();
    let (fixed, changed) = fix_product(&product, &engine);
    assert_eq!(changed, 0);
    assert_eq!(fixed, product);
}

#[test]
fn test_negative_value_fix() {
    let engine = Engine::builtin();
    let mut ingredient = MockIngredient::new("1", "에탄올").cas("64-17-5").value(-5.0).content("-5%").build();

    let issues = detect_ingredient_issues(&ingredient, None, &engine);
    let fixes = collect_fixes(&issues);
    assert_eq!(fixes.get(&IssueField::ContentPercentage), Some(&FieldFix::Percentage(5.0)));

    assert_eq!(apply_fixes(&mut ingredient, &fixes), 1);
    assert_eq!(ingredient.percentage_value, Some(5.0));
    assert_eq!(ingredient.percentage_text.as_deref(), Some("5%"));
    assert!(detect_ingredient_issues(&ingredient, None, &engine).is_empty());
}

#[test]
fn test_name_mismatch_fix_uses_registered_name() {
    let engine = Engine::builtin();
    let mut ingredient = MockIngredient::new("1", "아세톤").cas("64-17-5").content("30%").build();

    let fixes = collect_fixes(&detect_ingredient_issues(&ingredient, None, &engine));
    apply_fixes(&mut ingredient, &fixes);
    assert_eq!(ingredient.name, "에탄올");
}
