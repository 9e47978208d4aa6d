//! Message processing loop (TEA)

use std::sync::Arc;

use tokio::sync::mpsc;

use aidhf_client::AdviceService;

use crate::actions::handle_action;
use crate::banner::DismissTimer;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function, running any actions
/// and follow-up messages it produces.
pub fn process_message<S>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    service: &Arc<S>,
    dismiss_timer: &mut DismissTimer,
) where
    S: AdviceService + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx, service, dismiss_timer);
        }

        msg = result.message;
    }
}
