//! Engine configuration.
//!
//! Limits default to the built-in constants and can be overridden from a TOML
//! file, which may also register additional substances, hazard thresholds and
//! name aliases:
//!
//! ```toml
//! [limits]
//! high_concentration = 70.0
//!
//! [[substances]]
//! cas = "7440-50-8"
//! name = "구리"
//!
//! [[hazards]]
//! cas = "7440-50-8"
//! max_safe_percentage = 1.0
//! warning_text = "구리 1% 초과 시 수생환경 유해성 표시를 확인하세요"
//!
//! [[aliases]]
//! alias = "copper"
//! canonical = "구리"
//! ```

use crate::data::{HazardThreshold, ReferenceData};
use crate::MsdsError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Numeric thresholds used by the validators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Contents above this are flagged as high concentration
    pub high_concentration: f64,
    /// Product totals above this are errors
    pub total_max: f64,
    /// Positive product totals below this are flagged as incomplete disclosure
    pub total_min_disclosed: f64,
    /// Maximum fractional digits in a content value
    pub max_decimal_places: usize,
    /// Minimum ingredient name length in characters
    pub name_min_chars: usize,
    /// Maximum ingredient name length in characters
    pub name_max_chars: usize,
    /// Hazard text shorter than this is too terse
    pub hazard_min_chars: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            high_concentration: 80.0,
            total_max: 100.0,
            total_min_disclosed: 95.0,
            max_decimal_places: 2,
            name_min_chars: 2,
            name_max_chars: 100,
            hazard_min_chars: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstanceEntry {
    pub cas: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardEntry {
    pub cas: String,
    pub max_safe_percentage: f64,
    pub warning_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AliasEntry {
    pub alias: String,
    pub canonical: String,
}

/// Configuration file contents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub limits: Limits,
    pub substances: Vec<SubstanceEntry>,
    pub hazards: Vec<HazardEntry>,
    pub aliases: Vec<AliasEntry>,
}

impl EngineConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(s: &str) -> Result<Self, MsdsError> {
        toml::from_str(s).map_err(|source| MsdsError::Toml {
            context: "configuration".to_string(),
            source,
        })
    }

    /// Load configuration from a TOML file
    pub fn load_from(path: &Path) -> Result<Self, MsdsError> {
        let s = std::fs::read_to_string(path).map_err(|source| MsdsError::Io {
            context: format!("read {}", path.display()),
            source,
        })?;
        let config: EngineConfig = toml::from_str(&s).map_err(|source| MsdsError::Toml {
            context: path.display().to_string(),
            source,
        })?;
        tracing::debug!(
            path = %path.display(),
            substances = config.substances.len(),
            hazards = config.hazards.len(),
            aliases = config.aliases.len(),
            "configuration loaded"
        );
        Ok(config)
    }

    /// Reject limits that would make every record fail or pass trivially
    pub fn validate(&self) -> Result<(), MsdsError> {
        let l = &self.limits;

        if !(0.0..=100.0).contains(&l.high_concentration) {
            return Err(MsdsError::Config(format!(
                "limits.high_concentration must be within 0-100, got {}",
                l.high_concentration
            )));
        }
        if l.total_max <= 0.0 {
            return Err(MsdsError::Config(format!(
                "limits.total_max must be positive, got {}",
                l.total_max
            )));
        }
        if l.total_min_disclosed < 0.0 || l.total_min_disclosed > l.total_max {
            return Err(MsdsError::Config(format!(
                "limits.total_min_disclosed must be within 0-{}, got {}",
                l.total_max, l.total_min_disclosed
            )));
        }
        if l.name_min_chars > l.name_max_chars {
            return Err(MsdsError::Config(format!(
                "limits.name_min_chars ({}) exceeds limits.name_max_chars ({})",
                l.name_min_chars, l.name_max_chars
            )));
        }

        for entry in &self.hazards {
            if entry.max_safe_percentage < 0.0 {
                return Err(MsdsError::Config(format!(
                    "hazard threshold for {} is negative",
                    entry.cas
                )));
            }
        }

        Ok(())
    }

    /// Add configured entries to the reference tables. Entries override
    /// built-in ones with the same key.
    pub fn extend_reference(&self, data: &mut ReferenceData) {
        for entry in &self.substances {
            data.substances
                .insert(entry.cas.trim().to_string(), entry.name.clone());
        }
        for entry in &self.hazards {
            data.hazards.insert(
                entry.cas.trim().to_string(),
                HazardThreshold {
                    max_safe_percentage: entry.max_safe_percentage,
                    warning_text: entry.warning_text.clone(),
                },
            );
        }
        for entry in &self.aliases {
            data.add_alias(&entry.alias, &entry.canonical);
        }
    }
}
