//! Application error types

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Advice Submission Errors
    // ─────────────────────────────────────────────────────────────
    /// Any failure to obtain advice. Transport and endpoint failures are
    /// deliberately not distinguished.
    #[error("Advice submission failed: {message}")]
    Submission { message: String },

    #[error("Symptom record is incomplete: {field} has no answer")]
    IncompleteRecord { field: &'static str },

    #[error("Invalid {field} value: {value}")]
    InvalidAnswer { field: &'static str, value: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Unknown language: {code}")]
    UnknownLanguage { code: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn submission(message: impl Into<String>) -> Self {
        Self::Submission {
            message: message.into(),
        }
    }

    pub fn invalid_answer(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidAnswer {
            field,
            value: value.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    pub fn unknown_language(code: impl Into<String>) -> Self {
        Self::UnknownLanguage { code: code.into() }
    }
}
