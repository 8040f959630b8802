//! CAS registry number validation.
//!
//! A CAS number has the form `D{2,7}-DD-D`. The final digit is a check digit:
//! the remaining digits, read right to left, are weighted 1, 2, 3, ... and the
//! weighted sum modulo 10 must equal it.

use serde::Serialize;

/// Why a CAS number was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CasProblem {
    /// Does not match the CAS pattern at all
    Format,
    /// Six or seven bare digits; the hyphens are missing (and the check
    /// digit may be wrong too)
    MissingHyphens,
    /// Well-formed but the check digit is wrong
    Checksum,
}

impl CasProblem {
    pub fn slug(&self) -> &'static str {
        match self {
            CasProblem::Format => "cas-format",
            CasProblem::MissingHyphens => "cas-hyphenation",
            CasProblem::Checksum => "cas-checksum",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            CasProblem::Format => "CAS 번호 형식 오류",
            CasProblem::MissingHyphens => "CAS 번호 하이픈 누락",
            CasProblem::Checksum => "CAS 번호 검증번호 불일치",
        }
    }
}

/// Result of validating a CAS number
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CasValidation {
    pub valid: bool,
    /// Corrected form, when one can be derived
    pub suggestion: Option<String>,
    pub problem: Option<CasProblem>,
}

impl CasValidation {
    fn ok() -> Self {
        CasValidation {
            valid: true,
            suggestion: None,
            problem: None,
        }
    }

    fn rejected(problem: CasProblem, suggestion: Option<String>) -> Self {
        CasValidation {
            valid: false,
            suggestion,
            problem: Some(problem),
        }
    }
}

/// The three hyphen-separated groups of a well-formed CAS number
struct CasParts<'a> {
    registry: &'a str,
    middle: &'a str,
    check: u32,
}

/// Validate a CAS number's format and check digit.
///
/// Never panics; anything that is not a CAS number comes back invalid.
pub fn validate_cas_number(input: &str) -> CasValidation {
    let cas = input.trim();

    if let Some(parts) = split_cas(cas) {
        let expected = check_digit(parts.registry.chars().chain(parts.middle.chars()));
        return if expected == parts.check {
            CasValidation::ok()
        } else {
            CasValidation::rejected(
                CasProblem::Checksum,
                Some(format!("{}-{}-{}", parts.registry, parts.middle, expected)),
            )
        };
    }

    // The suggestion carries the computed check digit so it validates as-is
    if is_all_digits(cas) && (cas.len() == 6 || cas.len() == 7) {
        let head = &cas[..cas.len() - 1];
        let (registry, middle) = head.split_at(head.len() - 2);
        return CasValidation::rejected(
            CasProblem::MissingHyphens,
            Some(format!("{}-{}-{}", registry, middle, check_digit(head.chars()))),
        );
    }

    CasValidation::rejected(CasProblem::Format, None)
}

/// True when the input matches `D{2,7}-DD-D`, ignoring the check digit
pub fn is_cas_format(input: &str) -> bool {
    split_cas(input.trim()).is_some()
}

/// Trimmed CAS number if it is fully valid
pub fn normalize_cas(input: &str) -> Option<String> {
    let cas = input.trim();
    if validate_cas_number(cas).valid {
        Some(cas.to_string())
    } else {
        None
    }
}

/// Compute the check digit for the digits preceding it
pub fn check_digit<I>(digits: I) -> u32
where
    I: IntoIterator<Item = char>,
    I::IntoIter: DoubleEndedIterator,
{
    let sum: u32 = digits
        .into_iter()
        .rev()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(i, d)| d * (i as u32 + 1))
        .sum();
    sum % 10
}

fn split_cas(cas: &str) -> Option<CasParts<'_>> {
    let mut groups = cas.split('-');
    let registry = groups.next()?;
    let middle = groups.next()?;
    let check = groups.next()?;
    if groups.next().is_some() {
        return None;
    }

    if !(2..=7).contains(&registry.len()) || !is_all_digits(registry) {
        return None;
    }
    if middle.len() != 2 || !is_all_digits(middle) {
        return None;
    }
    if check.len() != 1 {
        return None;
    }

    Some(CasParts {
        registry,
        middle,
        check: check.chars().next()?.to_digit(10)?,
    })
}

fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}
