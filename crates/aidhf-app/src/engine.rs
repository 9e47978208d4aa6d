//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the TEA state, the unified message channel, the advice
//! service and the error banner's dismiss timer. Frontends feed it messages
//! and render `engine.state`; external consumers can subscribe to
//! [`EngineEvent`]s.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info};

use aidhf_client::AdviceService;

use crate::banner::{BannerId, DismissTimer};
use crate::config::Settings;
use crate::engine_event::EngineEvent;
use crate::i18n::Labels;
use crate::message::Message;
use crate::process;
use crate::shell::Screen;
use crate::state::AppState;

const MESSAGE_CHANNEL_CAPACITY: usize = 256;
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Lightweight snapshot of state for change detection.
#[derive(Debug, Clone, PartialEq, Eq)]
struct StateSnapshot {
    screen: Screen,
    submitting: bool,
    banner: Option<BannerId>,
    language: String,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            screen: state.screen(),
            submitting: state.form.is_submitting(),
            banner: state.form.error_banner().map(|b| b.id),
            language: state.labels().language().to_string(),
        }
    }
}

/// Orchestration engine for the advice client.
pub struct Engine<S> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, key reader).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    service: Arc<S>,
    dismiss_timer: DismissTimer,
    event_tx: broadcast::Sender<EngineEvent>,
}

impl<S> Engine<S>
where
    S: AdviceService + Sync + 'static,
{
    /// Create an engine around an advice service.
    pub fn new(settings: Settings, service: S, labels: Box<dyn Labels>) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel(MESSAGE_CHANNEL_CAPACITY);
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        let state = AppState::with_settings(settings, labels);
        info!("Engine ready (language {})", state.labels().language());

        Self {
            state,
            msg_tx,
            msg_rx,
            service: Arc::new(service),
            dismiss_timer: DismissTimer::new(),
            event_tx,
        }
    }

    /// Subscribe to domain events.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// The advice service shared with background requests.
    pub fn service(&self) -> &Arc<S> {
        &self.service
    }

    /// Process one message and broadcast resulting events.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        process::process_message(
            &mut self.state,
            msg,
            &self.msg_tx,
            &self.service,
            &mut self.dismiss_timer,
        );

        let post = StateSnapshot::capture(&self.state);
        if pre != post {
            self.emit_events(&pre, &post);
        }
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message and process it.
    ///
    /// Returns `false` if every sender is gone.
    pub async fn process_next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    /// Get a sender for the message channel.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Stop the dismiss timer and notify subscribers.
    pub fn shutdown(&mut self) {
        self.emit(EngineEvent::Shutdown);
        self.dismiss_timer.cancel();
        info!("Engine shut down");
    }

    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if !pre.submitting && post.submitting {
            self.emit(EngineEvent::SubmissionStarted {
                record: self.state.form.record(),
            });
        }

        if pre.banner != post.banner {
            if let Some(banner_id) = pre.banner {
                self.emit(EngineEvent::ErrorDismissed { banner_id });
            }
            if let Some(banner) = self.state.form.error_banner() {
                self.emit(EngineEvent::SubmissionFailed {
                    banner_id: banner.id,
                    reason: banner.reason.clone(),
                });
            }
        }

        if pre.screen == Screen::Collecting && post.screen == Screen::Reviewing {
            if let Some(advice) = self.state.shell.advice() {
                self.emit(EngineEvent::AdviceReady {
                    advice: advice.to_string(),
                });
            }
        }

        if pre.language != post.language {
            self.emit(EngineEvent::LanguageChanged {
                code: post.language.clone(),
            });
        }
    }

    fn emit(&self, event: EngineEvent) {
        debug!("Engine event: {}", event.event_type());
        // No subscribers is fine
        let _ = self.event_tx.send(event);
    }
}
