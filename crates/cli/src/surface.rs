use std::fmt;

use budget_tracker_core::models::element::ElementId;
use budget_tracker_core::models::entry::EntryKind;
use budget_tracker_core::presenter::{BudgetView, DisplaySurface, EntryView};

/// Text rendition of the budget page. Keeps the rows and labels it was
/// given and draws them on demand via `Display`.
#[derive(Debug)]
pub struct TerminalSurface {
    month: String,
    budget: Option<BudgetView>,
    incomes: Vec<EntryView>,
    expenses: Vec<EntryView>,
    selected: EntryKind,
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self {
            month: String::new(),
            budget: None,
            incomes: Vec::new(),
            expenses: Vec::new(),
            selected: EntryKind::Income,
        }
    }
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Kind used by `add` when the command names none.
    pub fn selected(&self) -> EntryKind {
        self.selected
    }
}

impl DisplaySurface for TerminalSurface {
    fn insert_entry(&mut self, view: &EntryView) {
        match view.element.kind {
            EntryKind::Income => self.incomes.push(view.clone()),
            EntryKind::Expense => self.expenses.push(view.clone()),
        }
    }

    fn remove_entry(&mut self, element: &ElementId) {
        let rows = match element.kind {
            EntryKind::Income => &mut self.incomes,
            EntryKind::Expense => &mut self.expenses,
        };
        rows.retain(|r| &r.element != element);
    }

    fn show_budget(&mut self, view: &BudgetView) {
        self.budget = Some(view.clone());
    }

    fn show_expense_percentages(&mut self, labels: &[String]) {
        for (row, label) in self.expenses.iter_mut().zip(labels) {
            row.percentage = Some(label.clone());
        }
    }

    fn show_month(&mut self, label: &str) {
        self.month = label.to_string();
    }

    fn highlight_kind(&mut self, kind: EntryKind) {
        self.selected = kind;
    }
}

impl fmt::Display for TerminalSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Available budget in {}:", self.month)?;
        if let Some(budget) = &self.budget {
            writeln!(f, "  {}", budget.budget)?;
            writeln!(f, "  INCOME    {}", budget.income)?;
            writeln!(f, "  EXPENSES  {}  {}", budget.expense, budget.percentage)?;
        }

        writeln!(f, "INCOME")?;
        for row in &self.incomes {
            writeln!(f, "  [{}] {}  {}", row.element, row.description, row.value)?;
        }

        writeln!(f, "EXPENSES")?;
        for row in &self.expenses {
            write!(f, "  [{}] {}  {}", row.element, row.description, row.value)?;
            if let Some(pct) = &row.percentage {
                write!(f, "  {pct}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(kind: EntryKind, id: u64, desc: &str) -> EntryView {
        EntryView {
            element: ElementId::new(kind, id),
            description: desc.into(),
            value: "+ £1.00".into(),
            percentage: None,
        }
    }

    #[test]
    fn remove_only_matching_row() {
        let mut s = TerminalSurface::new();
        s.insert_entry(&row(EntryKind::Income, 0, "a"));
        s.insert_entry(&row(EntryKind::Expense, 0, "b"));
        s.remove_entry(&ElementId::new(EntryKind::Expense, 0));
        assert_eq!(s.incomes.len(), 1);
        assert!(s.expenses.is_empty());
    }

    #[test]
    fn percentages_applied_in_order() {
        let mut s = TerminalSurface::new();
        s.insert_entry(&row(EntryKind::Expense, 0, "a"));
        s.insert_entry(&row(EntryKind::Expense, 3, "b"));
        s.show_expense_percentages(&["10%".into(), "---".into()]);
        let text = s.to_string();
        assert!(text.contains("[expense-0] a  + £1.00  10%"));
        assert!(text.contains("[expense-3] b  + £1.00  ---"));
    }

    #[test]
    fn highlight_changes_selected() {
        let mut s = TerminalSurface::new();
        assert_eq!(s.selected(), EntryKind::Income);
        s.highlight_kind(EntryKind::Expense);
        assert_eq!(s.selected(), EntryKind::Expense);
    }
}
