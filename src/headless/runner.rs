//! Headless mode runner - one submission through the engine, no TUI

use tokio::sync::broadcast;

use aidhf_app::config::Settings;
use aidhf_app::{signals, Engine, EngineEvent, Labels, Message};
use aidhf_client::AdviceService;
use aidhf_core::prelude::*;
use aidhf_core::SymptomRecord;

use super::HeadlessEvent;

/// How a headless run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadlessOutcome {
    Advice(String),
    Rejected,
    Failed(String),
    Interrupted,
}

impl HeadlessOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, HeadlessOutcome::Advice(_))
    }
}

/// Submit `record` and report the outcome as JSON events on stdout.
pub async fn run_headless<S>(
    settings: Settings,
    service: S,
    labels: Box<dyn Labels>,
    record: SymptomRecord,
) -> Result<HeadlessOutcome>
where
    S: AdviceService + Sync + 'static,
{
    info!("═══════════════════════════════════════════════════════");
    info!("AID-HF starting in HEADLESS mode");
    info!("═══════════════════════════════════════════════════════");

    let mut engine = Engine::new(settings, service, labels);
    signals::spawn_signal_handler(engine.msg_sender());

    let outcome = submit(&mut engine, record).await;

    engine.shutdown();
    info!("AID-HF headless mode exiting: {:?}", outcome);
    Ok(outcome)
}

/// Drive one submission to completion.
pub(crate) async fn submit<S>(engine: &mut Engine<S>, record: SymptomRecord) -> HeadlessOutcome
where
    S: AdviceService + Sync + 'static,
{
    if let Err(e) = record.validate() {
        warn!("Not submitting: {}", e);
        let field = match &e {
            Error::IncompleteRecord { field } => *field,
            _ => "record",
        };
        HeadlessEvent::rejected(field, e.to_string()).emit();
        return HeadlessOutcome::Rejected;
    }

    let mut events = engine.subscribe();
    engine.state.form.write_record(&record);
    engine.process_message(Message::Submit);

    loop {
        if let Some(outcome) = drain_events(&mut events) {
            return outcome;
        }
        if engine.should_quit() {
            info!("Quit requested before advice arrived");
            return HeadlessOutcome::Interrupted;
        }
        if !engine.process_next().await {
            return HeadlessOutcome::Interrupted;
        }
    }
}

/// Emit JSON for pending engine events; `Some` once the submission settled.
fn drain_events(events: &mut broadcast::Receiver<EngineEvent>) -> Option<HeadlessOutcome> {
    while let Ok(event) = events.try_recv() {
        match event {
            EngineEvent::SubmissionStarted { record } => {
                HeadlessEvent::submitted(record).emit();
            }
            EngineEvent::AdviceReady { advice } => {
                HeadlessEvent::advice(advice.clone()).emit();
                return Some(HeadlessOutcome::Advice(advice));
            }
            EngineEvent::SubmissionFailed { reason, .. } => {
                HeadlessEvent::error(reason.clone()).emit();
                return Some(HeadlessOutcome::Failed(reason));
            }
            _ => {}
        }
    }
    None
}
