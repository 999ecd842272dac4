use thiserror::Error;

/// Unified error type for the budget-tracker-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Input capture ───────────────────────────────────────────────
    #[error("Unknown entry kind: {0:?} (expected \"inc\" or \"exp\")")]
    InvalidKind(String),

    #[error("Description must not be empty")]
    EmptyDescription,

    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),

    #[error("Amount must not be negative: {0}")]
    NegativeAmount(f64),

    // ── Display surface ─────────────────────────────────────────────
    #[error("Invalid element id: {0:?}")]
    InvalidElementId(String),

    // ── Serialization ───────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
