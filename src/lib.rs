//! msds-check library
//!
//! Rule-based data-quality checks for MSDS (Material Safety Data Sheet)
//! product and ingredient records.
//!
//! This library provides:
//! - Field validators for CAS numbers, ingredient names, content percentages and hazard text
//! - A per-ingredient issue detector and product-level aggregation
//! - Status rollup from issues to a single product status
//! - Auto-fix collection and application
//! - Built-in reference tables (known substances, hazard thresholds, name aliases)
//!
//! The engine is pure: it never performs I/O and never fails on bad data.
//! Malformed records come back as [`ValidationIssue`]s.
//!
//! # Example
//!
//! ```
//! use msds_check::{validate_product, Engine, IngredientRecord, ProductRecord, StatusKind};
//!
//! let engine = Engine::builtin();
//! let product = ProductRecord {
//!     name: "Cleaner A".to_string(),
//!     hazard_text: None,
//!     ingredients: vec![IngredientRecord {
//!         id: "1".to_string(),
//!         name: "에탄올".to_string(),
//!         cas_number: Some("64-17-5".to_string()),
//!         percentage_text: Some("100%".to_string()),
//!         ..Default::default()
//!     }],
//! };
//!
//! let report = validate_product(&product, &engine);
//! assert_eq!(report.status.status, StatusKind::Completed);
//! ```

pub mod checks;
pub mod cli;
pub mod commands;
pub mod config;
pub mod data;
pub mod engine;
pub mod version;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use config::{EngineConfig, Limits};
pub use data::ReferenceData;
pub use engine::aggregate::product_level_issues;
pub use engine::detector::detect_ingredient_issues;
pub use engine::fix::{apply_fixes, collect_fixes, FieldFix};
pub use engine::result::{ProductReport, ProductStatus, ResultSummary, StatusKind, ValidationReport};

/// Severity of a validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Blocks approval until corrected
    Error,
    /// Likely wrong, needs review
    Warning,
    /// Improvement that does not affect correctness
    Suggestion,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Suggestion => write!(f, "suggestion"),
        }
    }
}

/// Record field a finding refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueField {
    /// Ingredient name
    MainIngredient,
    CasNumber,
    ContentPercentage,
    HazardClassification,
    /// Sum of ingredient contents (product level)
    TotalContent,
    /// The ingredient list itself (product level)
    Ingredients,
}

impl IssueField {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueField::MainIngredient => "main_ingredient",
            IssueField::CasNumber => "cas_number",
            IssueField::ContentPercentage => "content_percentage",
            IssueField::HazardClassification => "hazard_classification",
            IssueField::TotalContent => "total_content",
            IssueField::Ingredients => "ingredients",
        }
    }
}

impl fmt::Display for IssueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single data-quality finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Stable identifier, e.g. "3-cas-checksum" or "total-over-100"
    pub id: String,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub field: IssueField,
    pub original_value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_value: Option<String>,
    pub auto_fixable: bool,
    /// None for product-level findings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredient_id: Option<String>,
}

impl ValidationIssue {
    /// Product-level issue without a suggestion
    pub fn new(
        id: impl Into<String>,
        severity: Severity,
        field: IssueField,
        title: impl Into<String>,
        description: impl Into<String>,
        original_value: impl Into<String>,
    ) -> Self {
        ValidationIssue {
            id: id.into(),
            severity,
            title: title.into(),
            description: description.into(),
            field,
            original_value: original_value.into(),
            suggested_value: None,
            auto_fixable: false,
            ingredient_id: None,
        }
    }

    /// Attach the issue to an ingredient
    pub fn for_ingredient(mut self, ingredient_id: &str) -> Self {
        self.ingredient_id = Some(ingredient_id.to_string());
        self
    }

    /// Attach a replacement value
    pub fn with_suggestion(mut self, value: impl Into<String>, auto_fixable: bool) -> Self {
        self.suggested_value = Some(value.into());
        self.auto_fixable = auto_fixable;
        self
    }

    /// True when the suggestion can be applied without review
    pub fn is_applicable(&self) -> bool {
        self.auto_fixable && self.suggested_value.is_some()
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.severity, self.title, self.description)?;
        if let Some(ref suggested) = self.suggested_value {
            write!(f, " -> {}", suggested)?;
        }
        Ok(())
    }
}

/// One chemical component of a product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngredientRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cas_number: Option<String>,
    /// Free-text content such as "10-20%", "<5%" or "12.5%"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hazard_text: Option<String>,
}

/// A product and its ingredients.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    /// Product-level hazard classification text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hazard_text: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<IngredientRecord>,
}

/// Error types for msds-check operations.
///
/// Data problems in records are never errors; these cover the I/O and
/// configuration around the engine.
#[derive(Debug, thiserror::Error)]
pub enum MsdsError {
    #[error("I/O error in {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration in {context}: {source}")]
    Toml {
        context: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Immutable validation context: reference tables plus limits.
///
/// Built once at startup and shared by reference with every call.
#[derive(Debug, Clone)]
pub struct Engine {
    pub reference: ReferenceData,
    pub limits: Limits,
}

impl Engine {
    /// Engine with the built-in reference tables and default limits
    pub fn builtin() -> Self {
        Engine {
            reference: ReferenceData::load(),
            limits: Limits::default(),
        }
    }

    /// Engine from a loaded configuration (built-in tables extended by config entries)
    pub fn from_config(config: &EngineConfig) -> Result<Self, MsdsError> {
        config.validate()?;
        let mut reference = ReferenceData::load();
        config.extend_reference(&mut reference);
        Ok(Engine {
            reference,
            limits: config.limits.clone(),
        })
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Validate one product: per-ingredient issues in input order, then
/// product-level issues, rolled up into a status.
pub fn validate_product(product: &ProductRecord, engine: &Engine) -> ProductReport {
    let span = tracing::debug_span!("validate_product", product = %product.name);
    let _guard = span.enter();

    let mut issues = Vec::new();
    for ingredient in &product.ingredients {
        issues.extend(detect_ingredient_issues(
            ingredient,
            ingredient.hazard_text.as_deref(),
            engine,
        ));
    }
    issues.extend(product_level_issues(product, engine));

    let status = ProductStatus::from_issues(&issues);
    tracing::debug!(
        ingredients = product.ingredients.len(),
        issues = issues.len(),
        status = %status.status,
        "product validated"
    );

    ProductReport {
        product: product.name.clone(),
        issues,
        status,
    }
}

/// Validate a batch of products into a report.
pub fn validate_products(products: &[ProductRecord], engine: &Engine) -> ValidationReport {
    let products = products
        .iter()
        .map(|p| validate_product(p, engine))
        .collect();
    ValidationReport::new(products)
}
