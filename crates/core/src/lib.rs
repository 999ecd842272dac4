pub mod errors;
pub mod models;
pub mod presenter;
pub mod services;

use chrono::NaiveDate;
use models::{
    element::ElementId,
    entry::{Entry, EntryKind},
    input::{EntryInput, RawInput},
    ledger::Ledger,
    settings::Settings,
    snapshot::BudgetSnapshot,
};
use presenter::{DisplaySurface, Presenter};

use errors::CoreError;

/// Main entry point for the Budget Tracker core library.
/// Owns the ledger and the presenter, and sequences every user action:
/// validate, mutate the ledger, recompute, redraw.
#[must_use]
pub struct BudgetTracker<S: DisplaySurface> {
    ledger: Ledger,
    presenter: Presenter<S>,
}

impl<S: DisplaySurface> std::fmt::Debug for BudgetTracker<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BudgetTracker")
            .field("incomes", &self.ledger.entries(EntryKind::Income).len())
            .field("expenses", &self.ledger.entries(EntryKind::Expense).len())
            .field("snapshot", &self.ledger.snapshot())
            .field("settings", self.presenter.format().settings())
            .finish()
    }
}

impl<S: DisplaySurface> BudgetTracker<S> {
    /// Create a tracker with an empty ledger drawing onto `surface`.
    pub fn new(surface: S, settings: Settings) -> Self {
        Self {
            ledger: Ledger::new(),
            presenter: Presenter::new(surface, settings),
        }
    }

    /// Initial draw: month label plus the aggregates of the empty ledger.
    pub fn init(&mut self, today: NaiveDate) {
        tracing::info!("Budget tracker started");
        self.presenter.render_month(today);
        self.ledger.recompute_budget();
        self.presenter.render_aggregates(&self.ledger.snapshot());
    }

    /// [`init`](Self::init) with today's date (UTC).
    pub fn start(&mut self) {
        self.init(chrono::Utc::now().date_naive());
    }

    // ── User actions ────────────────────────────────────────────────

    /// Handle an add-form submission.
    ///
    /// Invalid input is dropped silently: nothing is added and the surface is
    /// not touched. Returns the stored entry on success.
    pub fn add_item(&mut self, raw: RawInput) -> Option<Entry> {
        match self.try_add_item(raw) {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!("add rejected: {e}");
                None
            }
        }
    }

    /// Like [`add_item`](Self::add_item) but reports why the input was rejected.
    pub fn try_add_item(&mut self, raw: RawInput) -> Result<Entry, CoreError> {
        let input = EntryInput::try_from(raw)?;
        let entry = self
            .ledger
            .add_entry(input.kind, input.description, input.amount)
            .clone();

        self.presenter.render_entry(&entry);
        self.presenter.clear_fields();
        self.update_budget();
        self.update_percentages();
        Ok(entry)
    }

    /// Handle a delete trigger on the element carrying `element_id`
    /// (e.g. `"expense-3"`).
    ///
    /// Returns `false` when the id cannot be resolved; nothing changes then.
    pub fn delete_item(&mut self, element_id: &str) -> bool {
        let element: ElementId = match element_id.parse() {
            Ok(element) => element,
            Err(e) => {
                tracing::debug!("delete ignored: {e}");
                return false;
            }
        };

        if self.ledger.delete_entry(element.kind, element.id).is_none() {
            tracing::debug!(element = %element, "delete of unknown entry");
        }

        self.presenter.remove_entry(&element);
        self.update_budget();
        self.update_percentages();
        true
    }

    /// The add form switched between income and expense.
    pub fn change_type(&mut self, kind: EntryKind) {
        self.presenter.highlight_kind(kind);
    }

    // ── Accessors ───────────────────────────────────────────────────

    #[must_use]
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Aggregates as of the last action.
    #[must_use]
    pub fn snapshot(&self) -> BudgetSnapshot {
        self.ledger.snapshot()
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        self.presenter.surface()
    }

    pub fn surface_mut(&mut self) -> &mut S {
        self.presenter.surface_mut()
    }

    /// Tear down the tracker, handing the surface back.
    pub fn into_surface(self) -> S {
        self.presenter.into_surface()
    }

    /// Pretty JSON dump of the ledger (entries and aggregates).
    pub fn to_json(&self) -> Result<String, CoreError> {
        self.ledger.to_json()
    }

    // ── Internal ────────────────────────────────────────────────────

    fn update_budget(&mut self) {
        self.ledger.recompute_budget();
        self.presenter.render_aggregates(&self.ledger.snapshot());
    }

    fn update_percentages(&mut self) {
        self.ledger.recompute_expense_percentages();
        self.presenter
            .render_percentages(self.ledger.expense_percentages());
    }
}
