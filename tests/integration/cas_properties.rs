//! Property tests for the CAS and content validators.

use msds_check::checks::cas::{check_digit, validate_cas_number, CasProblem};
use msds_check::checks::percentage::parse_percentage_range;
use msds_check::{ProductStatus, Severity, StatusKind};
use proptest::prelude::*;

fn with_check_digit(registry: &str, middle: &str) -> String {
    let digit = check_digit(registry.chars().chain(middle.chars()));
    format!("{}-{}-{}", registry, middle, digit)
}

proptest! {
    #[test]
    fn correct_checksum_is_valid(registry in "[0-9]{2,7}", middle in "[0-9]{2}") {
        let cas = with_check_digit(&registry, &middle);
        prop_assert!(validate_cas_number(&cas).valid);
    }

    #[test]
    fn wrong_checksum_suggests_the_correct_one(
        registry in "[0-9]{2,7}",
        middle in "[0-9]{2}",
        offset in 1u32..10,
    ) {
        let correct = with_check_digit(&registry, &middle);
        let digit = check_digit(registry.chars().chain(middle.chars()));
        let wrong = format!("{}-{}-{}", registry, middle, (digit + offset) % 10);

        let result = validate_cas_number(&wrong);
        prop_assert!(!result.valid);
        prop_assert_eq!(result.problem, Some(CasProblem::Checksum));
        prop_assert_eq!(result.suggestion, Some(correct));
    }

    #[test]
    fn bare_digits_get_a_valid_hyphenated_form(digits in "[0-9]{6,7}") {
        let result = validate_cas_number(&digits);
        prop_assert_eq!(result.problem, Some(CasProblem::MissingHyphens));
        let suggestion = result.suggestion.unwrap();
        prop_assert!(validate_cas_number(&suggestion).valid);
        let bare = suggestion.replace('-', "");
        prop_assert_eq!(&bare[..bare.len() - 1], &digits[..digits.len() - 1]);
    }

    #[test]
    fn other_digit_counts_get_no_suggestion(digits in "[0-9]{1,5}|[0-9]{8,12}") {
        let result = validate_cas_number(&digits);
        prop_assert!(!result.valid);
        prop_assert_eq!(result.suggestion, None);
    }

    #[test]
    fn validator_never_panics(input in ".*") {
        let _ = validate_cas_number(&input);
        let _ = parse_percentage_range(&input);
    }

    #[test]
    fn ranges_parse_to_their_bounds(low in 0u32..50, high in 50u32..=100) {
        let range = parse_percentage_range(&format!("{}-{}%", low, high)).unwrap();
        prop_assert_eq!(range.min, low as f64);
        prop_assert_eq!(range.max, high as f64);
    }

    #[test]
    fn rollup_follows_precedence(severities in prop::collection::vec(
        prop_oneof![Just(Severity::Error), Just(Severity::Warning), Just(Severity::Suggestion)],
        0..12,
    )) {
        let status = ProductStatus::from_severities(severities.iter().copied());
        let expected = if severities.contains(&Severity::Error) {
            StatusKind::Error
        } else if severities.contains(&Severity::Warning) {
            StatusKind::Warning
        } else if severities.is_empty() {
            StatusKind::Completed
        } else {
            StatusKind::Suggestion
        };
        prop_assert_eq!(status.status, expected);
        prop_assert_eq!(status.issue_count, severities.len());
    }
}
