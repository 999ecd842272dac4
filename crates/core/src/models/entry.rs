use serde::{Deserialize, Serialize};

use super::percentage::Percentage;
use crate::errors::CoreError;

/// Kind of ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryKind {
    /// Money coming in
    Income,
    /// Money going out
    Expense,
}

impl EntryKind {
    /// Short selector code (`"inc"` / `"exp"`), as used by the add form.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            EntryKind::Income => "inc",
            EntryKind::Expense => "exp",
        }
    }

    /// Prefix of rendered element ids (`"income"` / `"expense"`).
    #[must_use]
    pub fn element_prefix(self) -> &'static str {
        match self {
            EntryKind::Income => "income",
            EntryKind::Expense => "expense",
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryKind::Income => write!(f, "Income"),
            EntryKind::Expense => write!(f, "Expense"),
        }
    }
}

impl std::str::FromStr for EntryKind {
    type Err = CoreError;

    /// Accepts the selector codes and the long names, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "inc" | "income" => Ok(EntryKind::Income),
            "exp" | "expense" => Ok(EntryKind::Expense),
            _ => Err(CoreError::InvalidKind(s.to_string())),
        }
    }
}

/// A single income or expense line item.
///
/// `amount` is always non-negative; the sign comes from `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Sequential id, unique within its kind
    pub id: u64,

    /// Income or Expense
    pub kind: EntryKind,

    /// Free-text label entered by the user
    pub description: String,

    /// Amount of money (never negative)
    pub amount: f64,

    /// Share of total income. Always `None` for income entries;
    /// recomputed wholesale for expenses on every percentage pass.
    #[serde(default)]
    pub percentage: Option<Percentage>,
}

impl Entry {
    pub fn new(kind: EntryKind, id: u64, description: impl Into<String>, amount: f64) -> Self {
        let percentage = match kind {
            EntryKind::Income => None,
            EntryKind::Expense => Some(Percentage::Undefined),
        };
        Self {
            id,
            kind,
            description: description.into(),
            amount,
            percentage,
        }
    }

    /// Recompute this entry's share of `total_income`. No-op for income.
    pub fn calc_percentage(&mut self, total_income: f64) {
        if self.kind == EntryKind::Expense {
            self.percentage = Some(Percentage::of(self.amount, total_income));
        }
    }

    /// Current percentage; income entries report `Undefined`.
    #[must_use]
    pub fn get_percentage(&self) -> Percentage {
        self.percentage.unwrap_or_default()
    }
}
