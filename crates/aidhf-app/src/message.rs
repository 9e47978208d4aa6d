//! Message types for the application (TEA pattern)

use aidhf_core::YesNo;

use crate::banner::BannerId;
use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit immediately (Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Form Navigation
    // ─────────────────────────────────────────────────────────
    /// Move focus to the next question or button
    FocusNext,
    /// Move focus to the previous question or button
    FocusPrevious,
    /// Step the focused question to its next option
    IncreaseValue,
    /// Step the focused question to its previous option
    DecreaseValue,
    /// Pick a grade for the focused graded question
    SetGrade(u8),
    /// Answer the syncope question
    AnswerSyncope(YesNo),
    /// Expand or collapse the info panel of the focused question
    ToggleInfo,

    // ─────────────────────────────────────────────────────────
    // Submission Workflow
    // ─────────────────────────────────────────────────────────
    /// Submit the form for advice
    Submit,
    /// Restore default answers and clear the error banner
    ResetForm,
    /// User closed the error banner
    DismissError,
    /// Advice request completed
    AdviceReceived { advice: String },
    /// Advice request failed
    AdviceFailed { reason: String },
    /// Auto-dismiss timer for a banner elapsed
    ErrorDismissTimeout { banner_id: BannerId },

    // ─────────────────────────────────────────────────────────
    // Shell
    // ─────────────────────────────────────────────────────────
    /// Leave the advice view and start a new form
    Restart,
    /// Switch to the next available display language
    CycleLanguage,
    /// Switch to a specific display language
    SetLanguage { code: String },
}
