//! Output formatting for msds-check.
//!
//! Provides terminal, JSON, and JUnit XML output formatters.
//!
//! # Graceful Degradation
//!
//! - Non-TTY output: Color disabled via NO_COLOR or --no-color
//! - Empty reports: Produces valid output with zero products
//!
//! All formatters produce valid output for any ValidationReport input.
//! No function in this module will panic.

use crate::cli::args::OutputFormat;
use crate::engine::result::{ProductReport, ResultSummary, StatusKind, ValidationReport};
use crate::{Severity, ValidationIssue};
use serde::Serialize;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format a validation report into a string
    fn format(&self, report: &ValidationReport) -> String;
}

/// Terminal (human-readable) formatter
pub struct TerminalFormatter {
    color: bool,
    verbose: bool,
    quiet: bool,
}

impl TerminalFormatter {
    pub fn new(color: bool, verbose: bool, quiet: bool) -> Self {
        TerminalFormatter {
            color,
            verbose,
            quiet,
        }
    }

    fn colorize(&self, text: &str, color_code: &str) -> String {
        if self.color {
            format!("\x1b[{}m{}\x1b[0m", color_code, text)
        } else {
            text.to_string()
        }
    }

    fn status_label(&self, status: StatusKind) -> String {
        match status {
            StatusKind::Completed => self.colorize("[ OK ]", "32"),
            StatusKind::Suggestion => self.colorize("[INFO]", "36"),
            StatusKind::Warning => self.colorize("[WARN]", "33"),
            StatusKind::Error => self.colorize("[FAIL]", "31"),
        }
    }

    fn severity_label(&self, severity: Severity) -> String {
        match severity {
            Severity::Suggestion => self.colorize("suggestion", "36"),
            Severity::Warning => self.colorize("warning", "33"),
            Severity::Error => self.colorize("error", "31"),
        }
    }

    fn format_issue(&self, issue: &ValidationIssue, output: &mut String) {
        output.push_str(&format!(
            "    {} {}: {}",
            self.severity_label(issue.severity),
            issue.id,
            issue.title
        ));
        if issue.is_applicable() {
            output.push_str(&self.colorize(" (auto-fix)", "90"));
        }
        output.push('\n');

        if self.verbose {
            output.push_str(&format!("      {}\n", issue.description));
            if let Some(ref suggested) = issue.suggested_value {
                output.push_str(&format!("      '{}' -> '{}'\n", issue.original_value, suggested));
            }
        }
    }

    fn format_product(&self, product: &ProductReport, output: &mut String) {
        output.push_str(&format!(
            "{} {} ({} issues)\n",
            self.status_label(product.status.status),
            product.product,
            product.status.issue_count
        ));

        for issue in &product.issues {
            // Quiet mode hides suggestions
            if self.quiet && issue.severity == Severity::Suggestion {
                continue;
            }
            self.format_issue(issue, output);
        }
    }
}

impl OutputFormatter for TerminalFormatter {
    fn format(&self, report: &ValidationReport) -> String {
        let mut output = String::new();

        output.push_str("--------------------------------------------------------------------------------\n");
        output.push_str("msds-check validation report\n");
        if let Some(ref source) = report.source {
            output.push_str(&format!("Source: {}\n", source));
        }
        output.push_str(&format!("Timestamp: {}\n", format_timestamp(report.timestamp)));
        output.push_str("--------------------------------------------------------------------------------\n\n");

        for product in &report.products {
            if self.quiet
                && matches!(product.status.status, StatusKind::Completed | StatusKind::Suggestion)
            {
                continue;
            }
            self.format_product(product, &mut output);
            output.push('\n');
        }

        let summary = report.summary();
        output.push_str("--------------------------------------------------------------------------------\n");
        output.push_str(&format!(
            "SUMMARY: {} products: {} completed, {} with suggestions, {} with warnings, {} with errors\n",
            summary.products,
            summary.completed,
            summary.with_suggestions,
            summary.with_warnings,
            summary.with_errors
        ));
        output.push_str(&format!(
            "Issues: {} errors, {} warnings, {} suggestions ({} auto-fixable)\n",
            summary.errors, summary.warnings, summary.suggestions, summary.auto_fixable
        ));

        let exit_code = report.exit_code(false);
        let exit_desc = match exit_code {
            1 => "errors detected",
            2 => "warnings detected",
            _ => "no blocking issues",
        };
        output.push_str(&format!("Exit code: {} ({})\n", exit_code, exit_desc));
        output.push_str("--------------------------------------------------------------------------------");

        output
    }
}

/// JSON formatter
pub struct JsonFormatter {
    pretty: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    timestamp: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<&'a str>,
    summary: ResultSummary,
    products: &'a [ProductReport],
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        JsonFormatter { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &ValidationReport) -> String {
        let body = JsonReport {
            timestamp: report.timestamp,
            source: report.source.as_deref(),
            summary: report.summary(),
            products: &report.products,
        };

        let rendered = if self.pretty {
            serde_json::to_string_pretty(&body)
        } else {
            serde_json::to_string(&body)
        };
        rendered.unwrap_or_else(|e| format!("{{\"error\":{:?}}}", e.to_string()))
    }
}

/// Test case name and the issues reported under it
type TestCase<'a> = (String, Vec<&'a ValidationIssue>);

/// JUnit XML formatter
///
/// One test suite per product and one test case per ingredient, plus a
/// "product" case for product-level issues. Errors are failures.
pub struct JunitFormatter;

impl JunitFormatter {
    pub fn new() -> Self {
        JunitFormatter
    }

    fn escape_xml(s: &str) -> String {
        let mut result = String::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '&' => result.push_str("&amp;"),
                '<' => result.push_str("&lt;"),
                '>' => result.push_str("&gt;"),
                '"' => result.push_str("&quot;"),
                '\'' => result.push_str("&apos;"),
                c => result.push(c),
            }
        }
        result
    }

    fn test_cases(product: &ProductReport) -> Vec<TestCase<'_>> {
        let mut cases: Vec<TestCase<'_>> = Vec::new();

        for issue in &product.issues {
            let name = match issue.ingredient_id {
                Some(ref id) => format!("ingredient {}", id),
                None => "product".to_string(),
            };
            match cases.iter_mut().find(|(n, _)| *n == name) {
                Some((_, issues)) => issues.push(issue),
                None => cases.push((name, vec![issue])),
            }
        }

        if cases.is_empty() {
            cases.push(("product".to_string(), Vec::new()));
        }
        cases
    }

    fn failures(cases: &[TestCase<'_>]) -> usize {
        cases
            .iter()
            .filter(|(_, issues)| issues.iter().any(|i| i.severity == Severity::Error))
            .count()
    }

    fn write_case(name: &str, suite: &str, issues: &[&ValidationIssue], output: &mut String) {
        output.push_str(&format!(
            "    <testcase name=\"{}\" classname=\"msds-check.{}\"",
            Self::escape_xml(name),
            Self::escape_xml(suite)
        ));

        if issues.is_empty() {
            output.push_str(" />\n");
            return;
        }
        output.push_str(">\n");

        let errors: Vec<_> = issues.iter().filter(|i| i.severity == Severity::Error).collect();
        if let Some(first) = errors.first() {
            let details: Vec<String> = errors.iter().map(|i| format!("{}: {}", i.id, i.description)).collect();
            output.push_str(&format!(
                "      <failure message=\"{}\">{}</failure>\n",
                Self::escape_xml(&first.title),
                Self::escape_xml(&details.join("\n"))
            ));
        }

        let notes: Vec<String> = issues
            .iter()
            .filter(|i| i.severity != Severity::Error)
            .map(|i| format!("{}: {} - {}", i.severity.to_string().to_uppercase(), i.id, i.title))
            .collect();
        if !notes.is_empty() {
            output.push_str(&format!(
                "      <system-out>{}</system-out>\n",
                Self::escape_xml(&notes.join("\n"))
            ));
        }

        output.push_str("    </testcase>\n");
    }
}

impl Default for JunitFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for JunitFormatter {
    fn format(&self, report: &ValidationReport) -> String {
        let mut output = String::new();
        output.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");

        let suites: Vec<_> = report
            .products
            .iter()
            .map(|p| (p, Self::test_cases(p)))
            .collect();
        let total: usize = suites.iter().map(|(_, cases)| cases.len()).sum();
        let total_failures: usize = suites.iter().map(|(_, cases)| Self::failures(cases)).sum();

        output.push_str(&format!(
            "<testsuites tests=\"{}\" failures=\"{}\" errors=\"0\">\n",
            total, total_failures
        ));

        for (product, cases) in &suites {
            output.push_str(&format!(
                "  <testsuite name=\"{}\" tests=\"{}\" failures=\"{}\" errors=\"0\">\n",
                Self::escape_xml(&product.product),
                cases.len(),
                Self::failures(cases)
            ));
            for (name, issues) in cases {
                Self::write_case(name, &product.product, issues, &mut output);
            }
            output.push_str("  </testsuite>\n");
        }

        output.push_str("</testsuites>");
        output
    }
}

/// Get a formatter based on the output format
pub fn get_formatter(
    format: OutputFormat,
    color: bool,
    verbose: bool,
    quiet: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TerminalFormatter::new(color, verbose, quiet)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
        OutputFormat::Junit => Box::new(JunitFormatter::new()),
    }
}

/// Format a Unix timestamp as ISO 8601
fn format_timestamp(timestamp: u64) -> String {
    let days_since_epoch = timestamp / 86400;
    let time_of_day = timestamp % 86400;

    let hours = time_of_day / 3600;
    let minutes = (time_of_day % 3600) / 60;
    let seconds = time_of_day % 60;

    let mut year = 1970;
    let mut remaining_days = days_since_epoch;
    loop {
        let days_in_year = if is_leap_year(year) { 366 } else { 365 };
        if remaining_days < days_in_year {
            break;
        }
        remaining_days -= days_in_year;
        year += 1;
    }

    let mut month = 1;
    while remaining_days >= days_in_month(year, month) {
        remaining_days -= days_in_month(year, month);
        month += 1;
    }

    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
        year,
        month,
        remaining_days + 1,
        hours,
        minutes,
        seconds
    )
}

fn is_leap_year(year: u64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: u64, month: u64) -> u64 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}
