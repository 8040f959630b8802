//! Command handlers for msds-check
//!
//! This module contains implementations for all msds-check commands:
//! - `check`: Validate products and print a report
//! - `fix`: Apply auto-fixable suggestions and write corrected JSON
//! - `lookup`: Validate a CAS number and show its reference data
//! - `rules`: List the rules the engine reports
//!
//! Handlers return their rendered output and exit code; printing is left
//! to `main`.

pub mod check;
pub mod fix;
pub mod lookup;
pub mod rules;

use crate::{Engine, EngineConfig, MsdsError, ProductRecord};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Rendered command output and the process exit code it maps to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub exit_code: u8,
}

impl CommandOutput {
    pub fn success(text: impl Into<String>) -> Self {
        CommandOutput {
            text: text.into(),
            exit_code: 0,
        }
    }
}

/// Input files hold one product object or an array of them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductInput {
    Many(Vec<ProductRecord>),
    One(ProductRecord),
}

impl ProductInput {
    /// Transform every product, keeping the object/array shape
    pub fn map<F>(self, mut f: F) -> Self
    where
        F: FnMut(ProductRecord) -> ProductRecord,
    {
        match self {
            ProductInput::Many(products) => ProductInput::Many(products.into_iter().map(f).collect()),
            ProductInput::One(product) => ProductInput::One(f(product)),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ProductInput::Many(products) => products.len(),
            ProductInput::One(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_products(self) -> Vec<ProductRecord> {
        match self {
            ProductInput::Many(products) => products,
            ProductInput::One(product) => vec![product],
        }
    }
}

/// Build the engine, from a config file when one is given
pub fn load_engine(config: Option<&Path>) -> Result<Engine, MsdsError> {
    match config {
        Some(path) => Engine::from_config(&EngineConfig::load_from(path)?),
        None => Ok(Engine::builtin()),
    }
}

/// Read products from a JSON file
pub fn load_products(path: &Path) -> Result<Vec<ProductRecord>, MsdsError> {
    load_input(path).map(ProductInput::into_products)
}

/// Read a JSON file, keeping whether it held one product or an array
pub fn load_input(path: &Path) -> Result<ProductInput, MsdsError> {
    let context = path.display().to_string();
    let raw = fs::read_to_string(path).map_err(|source| MsdsError::Io {
        context: context.clone(),
        source,
    })?;
    parse_input(&raw, &context)
}

/// Parse products from JSON text
pub fn parse_products(raw: &str, context: &str) -> Result<Vec<ProductRecord>, MsdsError> {
    parse_input(raw, context).map(ProductInput::into_products)
}

fn parse_input(raw: &str, context: &str) -> Result<ProductInput, MsdsError> {
    let input: ProductInput = serde_json::from_str(raw).map_err(|source| MsdsError::Json {
        context: context.to_string(),
        source,
    })?;
    tracing::debug!(products = input.len(), source = context, "products loaded");
    Ok(input)
}
