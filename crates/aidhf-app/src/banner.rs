//! Transient error banner and its auto-dismiss timer
//!
//! Each time a submission fails, a new [`ErrorBanner`] is raised with a fresh
//! [`BannerId`]. A [`DismissTimer`] delivers [`Message::ErrorDismissTimeout`]
//! for that id after [`ERROR_DISMISS_DELAY`]. The update function only acts
//! on a timeout whose id matches the banner still on screen, so a timer
//! that fires after a manual dismissal or a newer failure has no effect.

use std::fmt;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::message::Message;

/// How long an error banner stays up without user action.
pub const ERROR_DISMISS_DELAY: Duration = Duration::from_millis(5000);

/// Identifies one appearance of the error banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BannerId(u64);

impl BannerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BannerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A visible submission-failure notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBanner {
    pub id: BannerId,
    /// Failure detail for logs and headless output; not shown in the TUI.
    pub reason: String,
}

/// Owns the pending auto-dismiss task, if any.
///
/// Scheduling replaces any pending task. Cancelling, or dropping the timer,
/// aborts the task so it can never deliver its message.
#[derive(Debug, Default)]
pub struct DismissTimer {
    pending: Option<(BannerId, JoinHandle<()>)>,
}

impl DismissTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting down for `banner_id`, replacing any pending countdown.
    pub fn schedule(&mut self, banner_id: BannerId, delay: Duration, msg_tx: mpsc::Sender<Message>) {
        self.cancel();

        debug!("Scheduling dismissal of error banner {} in {:?}", banner_id, delay);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if msg_tx
                .send(Message::ErrorDismissTimeout { banner_id })
                .await
                .is_err()
            {
                trace!("Dismiss timer for {} fired after shutdown", banner_id);
            }
        });

        self.pending = Some((banner_id, handle));
    }

    /// Abort the pending countdown, if any.
    pub fn cancel(&mut self) {
        if let Some((banner_id, handle)) = self.pending.take() {
            if !handle.is_finished() {
                debug!("Cancelled dismiss timer for error banner {}", banner_id);
            }
            handle.abort();
        }
    }

    /// Banner id of the most recently scheduled countdown still held.
    pub fn pending(&self) -> Option<BannerId> {
        self.pending.as_ref().map(|(id, _)| *id)
    }
}

impl Drop for DismissTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
