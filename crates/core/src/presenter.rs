use serde::{Deserialize, Serialize};

use crate::models::element::ElementId;
use crate::models::entry::{Entry, EntryKind};
use crate::models::percentage::Percentage;
use crate::models::settings::Settings;
use crate::models::snapshot::BudgetSnapshot;
use crate::services::format_service::FormatService;

/// One rendered ledger row, already formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryView {
    /// Id the surface must attach to the row so deletes can be resolved
    pub element: ElementId,
    pub description: String,
    /// Signed, formatted amount (e.g. `- £300.00`)
    pub value: String,
    /// Percentage label; expenses only
    pub percentage: Option<String>,
}

/// The summary header, already formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetView {
    pub budget: String,
    pub income: String,
    pub expense: String,
    pub percentage: String,
}

/// Capability to write to a display (a page, a terminal, a test recorder).
///
/// Implementations only place strings; every number they receive has
/// already been computed and formatted.
pub trait DisplaySurface {
    /// Add a row to the income or expense list (`view.element.kind` says which).
    fn insert_entry(&mut self, view: &EntryView);

    /// Remove the row carrying `element`. Unknown ids are ignored.
    fn remove_entry(&mut self, element: &ElementId);

    /// Replace the summary header.
    fn show_budget(&mut self, view: &BudgetView);

    /// Replace the percentage label of each expense row, in list order.
    fn show_expense_percentages(&mut self, labels: &[String]);

    /// Reset the add form after a successful add.
    fn clear_fields(&mut self) {}

    /// Show the current month in the header.
    fn show_month(&mut self, _label: &str) {}

    /// Reflect the kind selected in the add form (e.g. switch accent colour).
    fn highlight_kind(&mut self, _kind: EntryKind) {}
}

/// Formats ledger output and pushes it to a [`DisplaySurface`].
/// Holds no ledger state of its own.
pub struct Presenter<S: DisplaySurface> {
    surface: S,
    format: FormatService,
}

impl<S: DisplaySurface> Presenter<S> {
    pub fn new(surface: S, settings: Settings) -> Self {
        Self {
            surface,
            format: FormatService::new(settings),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn format(&self) -> &FormatService {
        &self.format
    }

    #[must_use]
    pub fn entry_view(&self, entry: &Entry) -> EntryView {
        EntryView {
            element: ElementId::new(entry.kind, entry.id),
            description: entry.description.clone(),
            value: self.format.format_amount(entry.amount, entry.kind),
            percentage: entry
                .percentage
                .map(|p| self.format.format_percentage(p)),
        }
    }

    #[must_use]
    pub fn budget_view(&self, snapshot: &BudgetSnapshot) -> BudgetView {
        BudgetView {
            budget: self.format.format_budget(snapshot.budget),
            income: self
                .format
                .format_amount(snapshot.total_income, EntryKind::Income),
            expense: self
                .format
                .format_amount(snapshot.total_expense, EntryKind::Expense),
            percentage: self.format.format_percentage(snapshot.percentage),
        }
    }

    pub fn render_entry(&mut self, entry: &Entry) {
        let view = self.entry_view(entry);
        self.surface.insert_entry(&view);
    }

    pub fn remove_entry(&mut self, element: &ElementId) {
        self.surface.remove_entry(element);
    }

    pub fn render_aggregates(&mut self, snapshot: &BudgetSnapshot) {
        let view = self.budget_view(snapshot);
        self.surface.show_budget(&view);
    }

    pub fn render_percentages(&mut self, percentages: impl IntoIterator<Item = Percentage>) {
        let labels: Vec<String> = percentages
            .into_iter()
            .map(|p| self.format.format_percentage(p))
            .collect();
        self.surface.show_expense_percentages(&labels);
    }

    pub fn clear_fields(&mut self) {
        self.surface.clear_fields();
    }

    pub fn render_month(&mut self, date: chrono::NaiveDate) {
        let label = self.format.month_label(date);
        self.surface.show_month(&label);
    }

    pub fn highlight_kind(&mut self, kind: EntryKind) {
        self.surface.highlight_kind(kind);
    }
}
