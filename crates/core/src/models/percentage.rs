use serde::{Deserialize, Serialize};

/// Share of total income, as a whole-number percent.
///
/// `Undefined` is produced whenever the income total is zero. It is distinct
/// from `Of(0)` and must be rendered differently. On the wire it is the bare
/// integer `-1`; a defined percentage is never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum Percentage {
    /// A computed percentage (rounded to the nearest whole number)
    Of(i64),
    /// Income total was zero
    #[default]
    Undefined,
}

impl Percentage {
    /// Sentinel integer used for `Undefined`.
    pub const SENTINEL: i64 = -1;

    /// `round(part / whole * 100)`, or `Undefined` when `whole` is not positive.
    ///
    /// Rounds half away from zero. This is the only rounding rule in the
    /// crate: per-expense and overall percentages both go through here.
    /// `part` is expected to be non-negative; a negative share is clamped to
    /// 0 so a defined value never collides with the sentinel.
    #[must_use]
    pub fn of(part: f64, whole: f64) -> Self {
        if whole > 0.0 {
            Percentage::Of((((part / whole) * 100.0).round() as i64).max(0))
        } else {
            Percentage::Undefined
        }
    }

    /// The percentage as an integer, with `-1` standing for `Undefined`.
    #[must_use]
    pub fn sentinel(self) -> i64 {
        match self {
            Percentage::Of(value) => value,
            Percentage::Undefined => Self::SENTINEL,
        }
    }

    #[must_use]
    pub fn value(self) -> Option<i64> {
        match self {
            Percentage::Of(value) => Some(value),
            Percentage::Undefined => None,
        }
    }

    #[must_use]
    pub fn is_defined(self) -> bool {
        matches!(self, Percentage::Of(_))
    }
}

impl From<i64> for Percentage {
    fn from(raw: i64) -> Self {
        if raw < 0 {
            Percentage::Undefined
        } else {
            Percentage::Of(raw)
        }
    }
}

impl From<Percentage> for i64 {
    fn from(p: Percentage) -> Self {
        p.sentinel()
    }
}
