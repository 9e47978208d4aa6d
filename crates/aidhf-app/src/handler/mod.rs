//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per screen

pub(crate) mod keys;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use aidhf_core::SymptomRecord;

use crate::banner::BannerId;
use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Send the record to the advice service in the background
    RequestAdvice { record: SymptomRecord },

    /// Start the auto-dismiss countdown for a freshly raised banner
    ScheduleErrorDismiss { banner_id: BannerId },

    /// Abort any pending auto-dismiss countdown
    CancelErrorDismiss,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
