// ═══════════════════════════════════════════════════════════════════
// Service Tests — FormatService, Presenter view models
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;

use budget_tracker_core::models::element::ElementId;
use budget_tracker_core::models::entry::{Entry, EntryKind};
use budget_tracker_core::models::percentage::Percentage;
use budget_tracker_core::models::settings::Settings;
use budget_tracker_core::models::snapshot::BudgetSnapshot;
use budget_tracker_core::presenter::{BudgetView, DisplaySurface, EntryView, Presenter};
use budget_tracker_core::services::format_service::FormatService;

// ═══════════════════════════════════════════════════════════════════
// Recording surface
// ═══════════════════════════════════════════════════════════════════

#[derive(Default)]
struct Recorder {
    calls: Vec<String>,
}

impl DisplaySurface for Recorder {
    fn insert_entry(&mut self, view: &EntryView) {
        self.calls.push(format!("insert {} {}", view.element, view.value));
    }

    fn remove_entry(&mut self, element: &ElementId) {
        self.calls.push(format!("remove {element}"));
    }

    fn show_budget(&mut self, view: &BudgetView) {
        self.calls.push(format!("budget {} {}", view.budget, view.percentage));
    }

    fn show_expense_percentages(&mut self, labels: &[String]) {
        self.calls.push(format!("percentages {}", labels.join(",")));
    }
}

// ═══════════════════════════════════════════════════════════════════
// FormatService
// ═══════════════════════════════════════════════════════════════════

mod format_service {
    use super::*;

    #[test]
    fn income_and_expense_signs() {
        let svc = FormatService::default();
        assert_eq!(svc.format_amount(1000.0, EntryKind::Income), "+ £1,000.00");
        assert_eq!(svc.format_amount(300.0, EntryKind::Expense), "- £300.00");
    }

    #[test]
    fn sign_ignores_number_sign() {
        let svc = FormatService::default();
        assert_eq!(svc.format_amount(-300.0, EntryKind::Income), "+ £300.00");
    }

    #[test]
    fn groups_thousands() {
        let svc = FormatService::default();
        assert_eq!(svc.format_amount(0.0, EntryKind::Income), "+ £0.00");
        assert_eq!(svc.format_amount(999.0, EntryKind::Income), "+ £999.00");
        assert_eq!(svc.format_amount(1234.5, EntryKind::Income), "+ £1,234.50");
        assert_eq!(
            svc.format_amount(1_234_567.0, EntryKind::Expense),
            "- £1,234,567.00"
        );
    }

    #[test]
    fn rounds_to_two_decimals() {
        let svc = FormatService::default();
        assert_eq!(svc.format_amount(3.14159, EntryKind::Expense), "- £3.14");
        assert_eq!(svc.format_amount(2.499, EntryKind::Income), "+ £2.50");
    }

    #[test]
    fn budget_sign_follows_value() {
        let svc = FormatService::default();
        assert_eq!(svc.format_budget(700.0), "+ £700.00");
        assert_eq!(svc.format_budget(-50.0), "- £50.00");
        assert_eq!(svc.format_budget(0.0), "+ £0.00");
    }

    #[test]
    fn custom_separator_and_symbol() {
        let settings = Settings {
            currency_symbol: "€".into(),
            thousands_separator: '.',
            ..Settings::default()
        };
        let svc = FormatService::new(settings);
        assert_eq!(svc.format_amount(12345.0, EntryKind::Income), "+ €12.345.00");
    }

    #[test]
    fn percentage_labels() {
        let svc = FormatService::default();
        assert_eq!(svc.format_percentage(Percentage::Undefined), "---");
        assert_eq!(svc.format_percentage(Percentage::Of(0)), "0%");
        assert_eq!(svc.format_percentage(Percentage::Of(30)), "30%");
    }

    #[test]
    fn large_numbers_grouped() {
        let svc = FormatService::default();
        assert_eq!(
            svc.format_amount(9_876_543_210.5, EntryKind::Income),
            "+ £9,876,543,210.50"
        );
        assert_eq!(svc.format_amount(100_000.0, EntryKind::Income), "+ £100,000.00");
    }

    #[test]
    fn custom_undefined_marker() {
        let settings = Settings {
            undefined_percentage: "n/a".into(),
            ..Settings::default()
        };
        let svc = FormatService::new(settings);
        assert_eq!(svc.format_percentage(Percentage::Undefined), "n/a");
    }

    #[test]
    fn month_labels() {
        let svc = FormatService::default();
        let jan = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let dec = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(svc.month_label(jan), "January 2025");
        assert_eq!(svc.month_label(dec), "December 2024");
    }
}

// ═══════════════════════════════════════════════════════════════════
// Presenter
// ═══════════════════════════════════════════════════════════════════

mod presenter {
    use super::*;

    fn presenter() -> Presenter<Recorder> {
        Presenter::new(Recorder::default(), Settings::default())
    }

    #[test]
    fn income_view_has_no_percentage() {
        let p = presenter();
        let view = p.entry_view(&Entry::new(EntryKind::Income, 2, "Salary", 2500.0));
        assert_eq!(view.element, ElementId::new(EntryKind::Income, 2));
        assert_eq!(view.description, "Salary");
        assert_eq!(view.value, "+ £2,500.00");
        assert_eq!(view.percentage, None);
    }

    #[test]
    fn expense_view_carries_percentage_label() {
        let p = presenter();
        let mut rent = Entry::new(EntryKind::Expense, 0, "Rent", 300.0);
        assert_eq!(p.entry_view(&rent).percentage.as_deref(), Some("---"));
        rent.calc_percentage(1000.0);
        assert_eq!(p.entry_view(&rent).percentage.as_deref(), Some("30%"));
    }

    #[test]
    fn budget_view() {
        let p = presenter();
        let snap = BudgetSnapshot {
            budget: 700.0,
            percentage: Percentage::Of(30),
            total_income: 1000.0,
            total_expense: 300.0,
        };
        assert_eq!(
            p.budget_view(&snap),
            BudgetView {
                budget: "+ £700.00".into(),
                income: "+ £1,000.00".into(),
                expense: "- £300.00".into(),
                percentage: "30%".into(),
            }
        );
    }

    #[test]
    fn undefined_overall_percentage_is_not_zero() {
        let p = presenter();
        let snap = BudgetSnapshot {
            budget: -50.0,
            percentage: Percentage::Undefined,
            total_income: 0.0,
            total_expense: 50.0,
        };
        let view = p.budget_view(&snap);
        assert_eq!(view.budget, "- £50.00");
        assert_eq!(view.percentage, "---");
        assert_ne!(view.percentage, "0%");
    }

    #[test]
    fn render_calls_reach_surface() {
        let mut p = presenter();
        let entry = Entry::new(EntryKind::Income, 0, "Salary", 10.0);
        p.render_entry(&entry);
        p.remove_entry(&ElementId::new(EntryKind::Income, 0));
        p.render_aggregates(&BudgetSnapshot::default());
        p.render_percentages(vec![Percentage::Of(5), Percentage::Undefined]);

        assert_eq!(
            p.surface().calls,
            vec![
                "insert income-0 + £10.00",
                "remove income-0",
                "budget + £0.00 ---",
                "percentages 5%,---",
            ]
        );
    }

    #[test]
    fn default_hooks_are_noops() {
        let mut p = presenter();
        p.clear_fields();
        p.highlight_kind(EntryKind::Expense);
        p.render_month(NaiveDate::from_ymd_opt(2026, 10, 1).unwrap());
        assert!(p.into_surface().calls.is_empty());
    }
}
