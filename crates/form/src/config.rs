//! Form configuration.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::engine::ValidationMode;
use crate::error::ConfigError;
use crate::record::Gender;
use crate::store::StoreMode;

/// Built-in country catalog.
pub const DEFAULT_COUNTRIES: [&str; 10] = [
    "United States",
    "Canada",
    "Mexico",
    "United Kingdom",
    "Germany",
    "France",
    "Australia",
    "Japan",
    "India",
    "China",
];

/// Tunable behavior of a form.
///
/// Every key is optional; missing keys take their default.
///
/// ```
/// use signup_form::{FormConfig, StoreMode, ValidationMode};
///
/// let config = FormConfig::from_json_str(r#"{ "store_mode": "history" }"#).unwrap();
/// assert_eq!(config.store_mode, StoreMode::History);
/// assert_eq!(config.validation_mode, ValidationMode::Deferred);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    /// When field rules run.
    pub validation_mode: ValidationMode,
    /// How the record store keeps submitted records.
    pub store_mode: StoreMode,
    /// Gender used when none is selected.
    pub default_gender: Gender,
    /// Country catalog for autocomplete, in display order.
    pub countries: Vec<String>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            validation_mode: ValidationMode::default(),
            store_mode: StoreMode::default(),
            default_gender: Gender::default(),
            countries: DEFAULT_COUNTRIES.iter().map(|c| (*c).to_string()).collect(),
        }
    }
}

impl FormConfig {
    /// Parses and checks a JSON config document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    /// Rejects blank or duplicated catalog entries. An empty catalog is fine.
    pub fn check(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::with_capacity(self.countries.len());
        for country in &self.countries {
            if country.trim().is_empty() || !seen.insert(country.as_str()) {
                return Err(ConfigError::InvalidCountry {
                    entry: country.clone(),
                });
            }
        }
        Ok(())
    }

    /// The catalog as a shared, immutable list.
    pub fn catalog(&self) -> Arc<[String]> {
        self.countries.iter().cloned().collect()
    }
}
