use serde::{Deserialize, Serialize};

use super::entry::EntryKind;
use crate::errors::CoreError;

/// Form values exactly as captured from the add form, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInput {
    /// Kind selector value (`"inc"` / `"exp"`)
    pub kind: String,
    pub description: String,
    /// Amount text as typed
    pub value: String,
}

impl RawInput {
    pub fn new(
        kind: impl Into<String>,
        description: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            description: description.into(),
            value: value.into(),
        }
    }
}

/// A validated add request, safe to hand to the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryInput {
    pub kind: EntryKind,
    pub description: String,
    pub amount: f64,
}

impl TryFrom<RawInput> for EntryInput {
    type Error = CoreError;

    fn try_from(raw: RawInput) -> Result<Self, Self::Error> {
        let kind: EntryKind = raw.kind.parse()?;

        let description = raw.description.trim();
        if description.is_empty() {
            return Err(CoreError::EmptyDescription);
        }

        let amount = parse_amount(&raw.value)?;

        Ok(Self {
            kind,
            description: description.to_string(),
            amount,
        })
    }
}

fn parse_amount(value: &str) -> Result<f64, CoreError> {
    let amount: f64 = value
        .trim()
        .parse()
        .map_err(|_| CoreError::InvalidAmount(value.to_string()))?;
    if !amount.is_finite() {
        return Err(CoreError::InvalidAmount(value.to_string()));
    }
    if amount < 0.0 {
        return Err(CoreError::NegativeAmount(amount));
    }
    Ok(amount)
}
