//! Headless mode - JSON event output instead of the TUI
//!
//! Submits one symptom record given on the command line and reports the
//! outcome as NDJSON (newline-delimited JSON) on stdout, one event per line.
//!
//! # Example Output
//!
//! ```json
//! {"event":"submitted","record":{"orthopnea":1,"cough":0,"edema":2,"dizziness":0,"syncope":"yes"},"timestamp":1704700001000}
//! {"event":"advice","advice":"Contact your heart failure nurse today.","timestamp":1704700001250}
//! ```

pub mod runner;

use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

use aidhf_core::SymptomRecord;

pub use runner::{run_headless, HeadlessOutcome};

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// The record was sent to the advice endpoint
    Submitted {
        record: SymptomRecord,
        timestamp: i64,
    },

    /// The record is incomplete and was not sent
    Rejected {
        field: String,
        message: String,
        timestamp: i64,
    },

    /// Advice received
    Advice { advice: String, timestamp: i64 },

    /// The advice request failed
    Error { message: String, timestamp: i64 },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn submitted(record: SymptomRecord) -> Self {
        Self::Submitted {
            record,
            timestamp: Self::now(),
        }
    }

    pub fn rejected(field: &str, message: String) -> Self {
        Self::Rejected {
            field: field.to_string(),
            message,
            timestamp: Self::now(),
        }
    }

    pub fn advice(advice: String) -> Self {
        Self::Advice {
            advice,
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String) -> Self {
        Self::Error {
            message,
            timestamp: Self::now(),
        }
    }
}
