//! Shared error type across mcsreg crates.

use thiserror::Error;

/// Integer status codes spoken by legacy callers (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// Call succeeded.
    Success,
    /// Generic failure.
    Error,
}

impl StatusCode {
    /// Numeric value (`0` success, negative failure).
    pub fn as_i32(self) -> i32 {
        match self {
            StatusCode::Success => 0,
            StatusCode::Error => -1,
        }
    }

    /// Status of a `Result`, for callers that only understand integers.
    pub fn of<T>(res: &Result<T>) -> Self {
        match res {
            Ok(_) => StatusCode::Success,
            Err(e) => e.status_code(),
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, McsError>;

/// Unified error type used by core, registry, and backends.
#[derive(Debug, Error)]
pub enum McsError {
    /// Backend could not be resolved or its constructor failed.
    #[error("cannot create mcs context for {plugin}: {reason}")]
    Load { plugin: String, reason: String },
    /// Configuration source unreadable or invalid.
    #[error("config: {0}")]
    Config(String),
    /// Backend refused the label.
    #[error("label rejected: {0}")]
    LabelRejected(String),
    /// Registry invariant broken or process-level misuse.
    #[error("internal: {0}")]
    Internal(String),
}

impl McsError {
    pub fn load(plugin: impl Into<String>, reason: impl Into<String>) -> Self {
        McsError::Load {
            plugin: plugin.into(),
            reason: reason.into(),
        }
    }

    /// Map any error to the legacy status code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            McsError::Load { .. }
            | McsError::Config(_)
            | McsError::LabelRejected(_)
            | McsError::Internal(_) => StatusCode::Error,
        }
    }
}
