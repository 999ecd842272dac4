use chrono::NaiveDate;

use crate::models::entry::EntryKind;
use crate::models::percentage::Percentage;
use crate::models::settings::Settings;

/// Turns ledger numbers into display strings.
///
/// - Amounts: sign prefix, currency symbol, thousands grouping, two decimals
///   (`+ £1,234.50`, `- £300.00`)
/// - Percentages: `30%`, or the configured marker when undefined
/// - Month label: `October 2026`
#[derive(Debug, Clone, Default)]
pub struct FormatService {
    settings: Settings,
}

impl FormatService {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Format an entry amount; the sign comes from the kind, never from the number.
    #[must_use]
    pub fn format_amount(&self, amount: f64, kind: EntryKind) -> String {
        let sign = match kind {
            EntryKind::Income => '+',
            EntryKind::Expense => '-',
        };
        format!(
            "{sign} {}{}",
            self.settings.currency_symbol,
            self.group_digits(amount.abs())
        )
    }

    /// Format the net budget: `+` for zero or surplus, `-` for a deficit.
    #[must_use]
    pub fn format_budget(&self, budget: f64) -> String {
        let kind = if budget >= 0.0 {
            EntryKind::Income
        } else {
            EntryKind::Expense
        };
        self.format_amount(budget, kind)
    }

    #[must_use]
    pub fn format_percentage(&self, percentage: Percentage) -> String {
        match percentage {
            Percentage::Of(value) => format!("{value}%"),
            Percentage::Undefined => self.settings.undefined_percentage.clone(),
        }
    }

    #[must_use]
    pub fn month_label(&self, date: NaiveDate) -> String {
        date.format("%B %Y").to_string()
    }

    /// `1234567.891` → `"1,234,567.89"`
    fn group_digits(&self, value: f64) -> String {
        let fixed = format!("{value:.2}");
        let (int, dec) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

        let mut grouped = String::with_capacity(int.len() + int.len() / 3);
        for (i, ch) in int.chars().enumerate() {
            if i > 0 && (int.len() - i) % 3 == 0 {
                grouped.push(self.settings.thousands_separator);
            }
            grouped.push(ch);
        }

        format!("{grouped}.{dec}")
    }
}
