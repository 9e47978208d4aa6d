//! Main TUI runner - entry point and event loop

use aidhf_app::config::Settings;
use aidhf_app::signals;
use aidhf_app::{Engine, Labels};
use aidhf_client::AdviceService;
use aidhf_core::prelude::*;

use crate::{event, render, terminal};

/// Run the interactive questionnaire until the user quits.
pub async fn run<S>(settings: Settings, service: S, labels: Box<dyn Labels>) -> Result<()>
where
    S: AdviceService + Sync + 'static,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut engine = Engine::new(settings, service, labels);

    // Sends Message::Quit on SIGINT/SIGTERM
    signals::spawn_signal_handler(engine.msg_sender());

    let mut term = ratatui::init();
    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop<S>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<S>) -> Result<()>
where
    S: AdviceService + Sync + 'static,
{
    while !engine.should_quit() {
        // Advice responses, dismiss timeouts and signals
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    debug!("Event loop finished");
    Ok(())
}
