use serde::{Deserialize, Serialize};

use super::entry::EntryKind;
use crate::errors::CoreError;

/// Identifier a display surface attaches to each rendered entry, so a delete
/// trigger can be resolved back to the ledger entry.
///
/// String form is `"<prefix>-<id>"`, e.g. `"income-0"` or `"expense-12"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId {
    pub kind: EntryKind,
    pub id: u64,
}

impl ElementId {
    pub fn new(kind: EntryKind, id: u64) -> Self {
        Self { kind, id }
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.kind.element_prefix(), self.id)
    }
}

impl std::str::FromStr for ElementId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidElementId(s.to_string());

        let (prefix, id) = s.trim().split_once('-').ok_or_else(invalid)?;
        let kind = match prefix {
            "income" => EntryKind::Income,
            "expense" => EntryKind::Expense,
            _ => return Err(invalid()),
        };
        if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let id = id.parse::<u64>().map_err(|_| invalid())?;

        Ok(Self { kind, id })
    }
}
