use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Display settings used when formatting amounts and percentages.
///
/// Every field has a default, so a settings file only needs the keys it
/// wants to change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Symbol printed before every amount (e.g., "£", "$", "€").
    pub currency_symbol: String,

    /// Character inserted between groups of three integer digits.
    pub thousands_separator: char,

    /// Text shown in place of an undefined percentage (no income yet).
    pub undefined_percentage: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: "£".to_string(),
            thousands_separator: ',',
            undefined_percentage: "---".to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing keys fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize settings: {e}")))
    }

    /// Override the currency symbol (builder style).
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }
}
