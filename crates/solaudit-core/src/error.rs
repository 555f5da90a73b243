//! Centralized error types for solaudit.

use thiserror::Error;

/// Main error type for audit operations.
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to launch {program}: {source}")]
    ToolLaunch {
        program: String,
        source: std::io::Error,
    },

    #[error("output is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("timed out after {0}s")]
    Timeout(u64),

    #[error("expected a JSON object, got {0}")]
    UnexpectedOutput(&'static str),

    #[error("failed to write report {path}: {source}")]
    ReportWrite {
        path: String,
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for audit operations.
pub type AuditResult<T> = Result<T, AuditError>;

impl AuditError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
