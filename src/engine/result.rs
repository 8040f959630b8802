//! Result aggregation and reporting.
//!
//! Rolls issues up into product statuses, summarizes a run, and compares a
//! run against a previous one.

use crate::{Severity, ValidationIssue};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Overall state of a product's data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    Error,
    Warning,
    Suggestion,
    Completed,
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusKind::Error => write!(f, "error"),
            StatusKind::Warning => write!(f, "warning"),
            StatusKind::Suggestion => write!(f, "suggestion"),
            StatusKind::Completed => write!(f, "completed"),
        }
    }
}

/// Status rollup for a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductStatus {
    pub status: StatusKind,
    pub issue_count: usize,
}

impl ProductStatus {
    /// Error if any issue is an error, else Warning if any is a warning,
    /// else Suggestion if there are any issues, else Completed.
    pub fn from_issues(issues: &[ValidationIssue]) -> Self {
        Self::from_severities(issues.iter().map(|i| i.severity))
    }

    pub fn from_severities<I>(severities: I) -> Self
    where
        I: IntoIterator<Item = Severity>,
    {
        let mut issue_count = 0;
        let mut worst: Option<Severity> = None;

        for severity in severities {
            issue_count += 1;
            // Severity orders Error < Warning < Suggestion
            worst = Some(worst.map_or(severity, |w| w.min(severity)));
        }

        let status = match worst {
            Some(Severity::Error) => StatusKind::Error,
            Some(Severity::Warning) => StatusKind::Warning,
            Some(Severity::Suggestion) => StatusKind::Suggestion,
            None => StatusKind::Completed,
        };

        ProductStatus { status, issue_count }
    }
}

/// Validation outcome for one product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductReport {
    pub product: String,
    pub issues: Vec<ValidationIssue>,
    pub status: ProductStatus,
}

impl ProductReport {
    pub fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }

    pub fn auto_fixable_count(&self) -> usize {
        self.issues.iter().filter(|i| i.is_applicable()).count()
    }

    /// Product-level issues (no ingredient id)
    pub fn product_issues(&self) -> Vec<&ValidationIssue> {
        self.issues.iter().filter(|i| i.ingredient_id.is_none()).collect()
    }

    /// Whether the product can be approved. Errors always block; warnings
    /// block in strict mode.
    pub fn is_approvable(&self, strict: bool) -> bool {
        match self.status.status {
            StatusKind::Error => false,
            StatusKind::Warning => !strict,
            StatusKind::Suggestion | StatusKind::Completed => true,
        }
    }
}

/// Result summary statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSummary {
    /// Products by status
    pub products: usize,
    pub completed: usize,
    pub with_suggestions: usize,
    pub with_warnings: usize,
    pub with_errors: usize,
    /// Issues by severity
    pub errors: usize,
    pub warnings: usize,
    pub suggestions: usize,
    pub auto_fixable: usize,
}

impl ResultSummary {
    pub fn total_issues(&self) -> usize {
        self.errors + self.warnings + self.suggestions
    }
}

/// Validation report for a batch of products
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Unix timestamp (seconds)
    pub timestamp: u64,
    /// Input the products came from, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub products: Vec<ProductReport>,
}

impl ValidationReport {
    pub fn new(products: Vec<ProductReport>) -> Self {
        ValidationReport {
            timestamp: unix_timestamp(),
            source: None,
            products,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Calculate summary statistics
    pub fn summary(&self) -> ResultSummary {
        let mut summary = ResultSummary::default();

        for product in &self.products {
            summary.products += 1;

            match product.status.status {
                StatusKind::Completed => summary.completed += 1,
                StatusKind::Suggestion => summary.with_suggestions += 1,
                StatusKind::Warning => summary.with_warnings += 1,
                StatusKind::Error => summary.with_errors += 1,
            }

            for issue in &product.issues {
                match issue.severity {
                    Severity::Error => summary.errors += 1,
                    Severity::Warning => summary.warnings += 1,
                    Severity::Suggestion => summary.suggestions += 1,
                }
                if issue.is_applicable() {
                    summary.auto_fixable += 1;
                }
            }
        }

        summary
    }

    /// Worst status across all products
    pub fn overall_status(&self) -> StatusKind {
        self.products
            .iter()
            .map(|p| p.status.status)
            .min()
            .unwrap_or(StatusKind::Completed)
    }

    /// Process exit code: 0 clean, 1 errors, 2 warnings only.
    /// In strict mode warnings exit with 1.
    pub fn exit_code(&self, strict: bool) -> u8 {
        match self.overall_status() {
            StatusKind::Error => 1,
            StatusKind::Warning if strict => 1,
            StatusKind::Warning => 2,
            StatusKind::Suggestion | StatusKind::Completed => 0,
        }
    }

    /// Compare against an earlier report of the same products
    pub fn compare_to(&self, previous: &ValidationReport) -> ComparisonResult {
        let key = |product: &str, issue: &ValidationIssue| format!("{}::{}", product, issue.id);

        let before: HashMap<String, Severity> = previous
            .products
            .iter()
            .flat_map(|p| p.issues.iter().map(move |i| (key(&p.product, i), i.severity)))
            .collect();
        let after: HashSet<String> = self
            .products
            .iter()
            .flat_map(|p| p.issues.iter().map(move |i| key(&p.product, i)))
            .collect();

        let mut result = ComparisonResult::default();

        for product in &self.products {
            for issue in &product.issues {
                let k = key(&product.product, issue);
                match before.get(&k) {
                    None => result.new_issues.push(k),
                    Some(old) if issue.severity < *old => result.escalated.push(k),
                    Some(_) => result.unchanged.push(k),
                }
            }
        }

        let mut resolved: Vec<String> = before.into_keys().filter(|k| !after.contains(k)).collect();
        resolved.sort();
        result.resolved = resolved;

        result
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Difference between two validation runs, keyed "product::issue-id"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComparisonResult {
    pub new_issues: Vec<String>,
    pub resolved: Vec<String>,
    /// Present in both runs with a more severe level now
    pub escalated: Vec<String>,
    pub unchanged: Vec<String>,
}

fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
