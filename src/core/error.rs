use thiserror::Error;

/// Errors that can occur while editing, finalizing, or rendering an invoice.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BeejakError {
    /// Amount cannot be spelled out (negative, NaN, infinite, or out of range).
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Draft edit rejected (bad line index, field too long, too many lines).
    #[error("draft error: {0}")]
    Draft(String),

    /// Operation not allowed in the current session state.
    #[error("session error: {0}")]
    Session(String),

    /// Preview or HTML generation error.
    #[error("render error: {0}")]
    Render(String),

    /// JSON import/export error.
    #[error("JSON error: {0}")]
    Json(String),
}
