use serde::{Deserialize, Serialize};

use super::entry::{Entry, EntryKind};
use super::percentage::Percentage;
use super::snapshot::BudgetSnapshot;
use crate::errors::CoreError;

/// Per-kind sums, refreshed by [`Ledger::recompute_budget`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub income: f64,
    pub expense: f64,
}

/// The authoritative list of income and expense entries plus the aggregates
/// derived from them.
///
/// Aggregates are never updated incrementally. After any add or delete, call
/// [`recompute_budget`](Self::recompute_budget) and then
/// [`recompute_expense_percentages`](Self::recompute_expense_percentages)
/// before reading [`snapshot`](Self::snapshot).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    /// Income entries, in insertion order
    incomes: Vec<Entry>,

    /// Expense entries, in insertion order
    expenses: Vec<Entry>,

    totals: Totals,
    budget: f64,
    percentage: Percentage,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Mutation ────────────────────────────────────────────────────

    /// Append a new entry and return it.
    ///
    /// The id is one past the id of the last entry of the same kind, or 0 if
    /// there is none. Nothing is validated here. A new expense gets its
    /// percentage computed against the current income sum straight away.
    pub fn add_entry(
        &mut self,
        kind: EntryKind,
        description: impl Into<String>,
        amount: f64,
    ) -> &Entry {
        let income_sum = sum(&self.incomes);
        let items = self.items_mut(kind);
        let id = items.last().map_or(0, |last| last.id + 1);

        let mut entry = Entry::new(kind, id, description, amount);
        entry.calc_percentage(income_sum);
        items.push(entry);

        let stored = &items[items.len() - 1];
        tracing::trace!(kind = %kind, id, amount, "entry added");
        stored
    }

    /// Remove the entry with `id` from the `kind` collection.
    /// Returns the removed entry, or `None` (and changes nothing) if absent.
    pub fn delete_entry(&mut self, kind: EntryKind, id: u64) -> Option<Entry> {
        let items = self.items_mut(kind);
        let idx = items.iter().position(|e| e.id == id)?;
        let removed = items.remove(idx);
        tracing::trace!(kind = %kind, id, "entry deleted");
        Some(removed)
    }

    // ── Aggregates ──────────────────────────────────────────────────

    /// Recompute both totals, the budget, and the overall expense percentage.
    pub fn recompute_budget(&mut self) {
        self.totals = Totals {
            income: sum(&self.incomes),
            expense: sum(&self.expenses),
        };
        self.budget = self.totals.income - self.totals.expense;
        self.percentage = Percentage::of(self.totals.expense, self.totals.income);
        tracing::trace!(
            income = self.totals.income,
            expense = self.totals.expense,
            budget = self.budget,
            "budget recomputed"
        );
    }

    /// Recompute every expense's share of total income.
    /// Relies on the income total from the last [`recompute_budget`](Self::recompute_budget).
    pub fn recompute_expense_percentages(&mut self) {
        let total_income = self.totals.income;
        for expense in &mut self.expenses {
            expense.calc_percentage(total_income);
        }
    }

    /// Expense percentages in expense-collection order.
    ///
    /// The iterator borrows the ledger; call again (or clone it) to restart.
    pub fn expense_percentages(
        &self,
    ) -> impl ExactSizeIterator<Item = Percentage> + Clone + '_ {
        self.expenses.iter().map(Entry::get_percentage)
    }

    /// Aggregates as of the last recomputation.
    #[must_use]
    pub fn snapshot(&self) -> BudgetSnapshot {
        BudgetSnapshot {
            budget: self.budget,
            percentage: self.percentage,
            total_income: self.totals.income,
            total_expense: self.totals.expense,
        }
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// All entries of one kind, in insertion order.
    #[must_use]
    pub fn entries(&self, kind: EntryKind) -> &[Entry] {
        match kind {
            EntryKind::Income => &self.incomes,
            EntryKind::Expense => &self.expenses,
        }
    }

    #[must_use]
    pub fn get_entry(&self, kind: EntryKind, id: u64) -> Option<&Entry> {
        self.entries(kind).iter().find(|e| e.id == id)
    }

    /// Number of entries across both kinds.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.incomes.len() + self.expenses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }

    /// Pretty JSON dump of the whole ledger (entries and aggregates).
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize ledger: {e}")))
    }

    fn items_mut(&mut self, kind: EntryKind) -> &mut Vec<Entry> {
        match kind {
            EntryKind::Income => &mut self.incomes,
            EntryKind::Expense => &mut self.expenses,
        }
    }
}

fn sum(items: &[Entry]) -> f64 {
    items.iter().map(|e| e.amount).sum()
}
