//! Reference data for msds-check
//!
//! Contains the known-substance table, hazard thresholds, and the ingredient
//! name alias table. All tables are immutable once loaded.

pub mod aliases;
pub mod substances;

use std::collections::BTreeMap;

pub use substances::HazardThreshold;

/// Read-only lookup tables used by the validators.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    /// CAS number -> canonical ingredient name
    pub substances: BTreeMap<String, String>,
    /// CAS number -> concentration threshold
    pub hazards: BTreeMap<String, HazardThreshold>,
    /// Lower-cased alias -> canonical ingredient name
    pub aliases: BTreeMap<String, String>,
}

impl ReferenceData {
    /// Load the embedded reference tables
    pub fn load() -> Self {
        let substances = substances::KNOWN_SUBSTANCES
            .iter()
            .map(|(cas, name)| (cas.to_string(), name.to_string()))
            .collect();

        let hazards = substances::HAZARDOUS_SUBSTANCES
            .iter()
            .map(|(cas, max, text)| {
                (
                    cas.to_string(),
                    HazardThreshold {
                        max_safe_percentage: *max,
                        warning_text: text.to_string(),
                    },
                )
            })
            .collect();

        let mut data = ReferenceData {
            substances,
            hazards,
            aliases: BTreeMap::new(),
        };
        for (alias, canonical) in aliases::NAME_ALIASES {
            data.add_alias(alias, canonical);
        }
        data
    }

    /// Canonical name registered for a CAS number
    pub fn canonical_name(&self, cas: &str) -> Option<&str> {
        self.substances.get(cas.trim()).map(String::as_str)
    }

    /// Hazard threshold registered for a CAS number
    pub fn hazard_threshold(&self, cas: &str) -> Option<&HazardThreshold> {
        self.hazards.get(cas.trim())
    }

    /// Canonical form for an ingredient name, if the name is a known alias
    pub fn alias_target(&self, name: &str) -> Option<&str> {
        self.aliases
            .get(&alias_key(name))
            .map(String::as_str)
    }

    /// Register an alias; keys are matched case- and whitespace-insensitively
    pub fn add_alias(&mut self, alias: &str, canonical: &str) {
        self.aliases.insert(alias_key(alias), canonical.to_string());
    }
}

fn alias_key(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
