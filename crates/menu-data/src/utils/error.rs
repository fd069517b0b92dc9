use thiserror::Error;

use crate::services::SheetKind;

/// Failures of a single sheet fetch. Caught once, at the aggregator,
/// where any of them selects the fallback dataset.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SheetError {
    #[error("Transport failure for {url}: {reason}")]
    Transport { url: String, reason: String },

    #[error("Failed to read response body from {url}: {reason}")]
    Body { url: String, reason: String },

    #[error("{sheet} sheet returned HTTP {status}")]
    Status { sheet: SheetKind, status: u16 },

    #[error("{sheet} sheet is missing required columns: {}", .columns.join(", "))]
    MissingColumns { sheet: SheetKind, columns: Vec<String> },
}

impl SheetError {
    pub fn transport(url: impl Into<String>, err: impl std::fmt::Display) -> Self {
        SheetError::Transport {
            url: url.into(),
            reason: err.to_string(),
        }
    }

    /// Short label for structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            SheetError::Transport { .. } => "transport",
            SheetError::Body { .. } => "body",
            SheetError::Status { .. } => "status",
            SheetError::MissingColumns { .. } => "missing_columns",
        }
    }
}

pub type SheetResult<T> = Result<T, SheetError>;
