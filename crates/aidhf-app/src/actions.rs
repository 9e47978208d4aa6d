//! Action handlers: execute side effects requested by the update function

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use aidhf_client::AdviceService;
use aidhf_core::SymptomRecord;

use crate::banner::{DismissTimer, ERROR_DISMISS_DELAY};
use crate::handler::UpdateAction;
use crate::message::Message;

/// Execute an action returned by `update()`
pub fn handle_action<S>(
    action: UpdateAction,
    msg_tx: &mpsc::Sender<Message>,
    service: &Arc<S>,
    dismiss_timer: &mut DismissTimer,
) where
    S: AdviceService + Sync + 'static,
{
    match action {
        UpdateAction::RequestAdvice { record } => {
            spawn_advice_request(service.clone(), record, msg_tx.clone());
        }

        UpdateAction::ScheduleErrorDismiss { banner_id } => {
            dismiss_timer.schedule(banner_id, ERROR_DISMISS_DELAY, msg_tx.clone());
        }

        UpdateAction::CancelErrorDismiss => dismiss_timer.cancel(),
    }
}

/// Run one advice request in the background and report the outcome.
fn spawn_advice_request<S>(service: Arc<S>, record: SymptomRecord, msg_tx: mpsc::Sender<Message>)
where
    S: AdviceService + Sync + 'static,
{
    tokio::spawn(async move {
        let msg = match service.get_advice(&record).await {
            Ok(advice) => Message::AdviceReceived { advice },
            Err(e) => {
                warn!("Advice request failed: {}", e);
                Message::AdviceFailed {
                    reason: e.to_string(),
                }
            }
        };

        if msg_tx.send(msg).await.is_err() {
            debug!("Advice result dropped: engine already shut down");
        }
    });
}
