//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless runner turns them into NDJSON.

use aidhf_core::SymptomRecord;

use crate::banner::BannerId;

/// Domain events emitted by the Engine for external consumers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// A record passed validation and was handed to the advice service
    SubmissionStarted { record: SymptomRecord },

    /// Advice arrived and the result view replaced the form
    AdviceReady { advice: String },

    /// The advice request failed and an error banner was raised
    SubmissionFailed { banner_id: BannerId, reason: String },

    /// The error banner was closed, manually or by timeout
    ErrorDismissed { banner_id: BannerId },

    /// Display language switched
    LanguageChanged { code: String },

    /// Engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Short type label for logging.
    pub fn event_type(&self) -> &'static str {
        match self {
            EngineEvent::SubmissionStarted { .. } => "submission_started",
            EngineEvent::AdviceReady { .. } => "advice_ready",
            EngineEvent::SubmissionFailed { .. } => "submission_failed",
            EngineEvent::ErrorDismissed { .. } => "error_dismissed",
            EngineEvent::LanguageChanged { .. } => "language_changed",
            EngineEvent::Shutdown => "shutdown",
        }
    }
}
