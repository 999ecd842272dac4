use serde::{Deserialize, Serialize};

use super::percentage::Percentage;

/// Read-only view of the ledger aggregates after the last recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BudgetSnapshot {
    /// total_income - total_expense
    pub budget: f64,

    /// Total expense as a share of total income
    pub percentage: Percentage,

    /// Sum of all income amounts
    pub total_income: f64,

    /// Sum of all expense amounts
    pub total_expense: f64,
}
