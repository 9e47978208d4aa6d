//! Turns OS termination signals into [`Message::Quit`]

use std::fmt;
use std::future::Future;

use tokio::sync::mpsc;

use aidhf_core::prelude::*;

use crate::message::Message;

/// Which signal ended the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShutdownSignal::Interrupt => write!(f, "interrupt"),
            ShutdownSignal::Terminate => write!(f, "terminate"),
        }
    }
}

/// Listen for SIGINT/SIGTERM (Ctrl+C elsewhere) in the background
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(forward_shutdown(next_shutdown_signal(), tx));
}

/// Wait for `signal` and ask the app to quit. Listener failures only log.
async fn forward_shutdown<F>(signal: F, tx: mpsc::Sender<Message>)
where
    F: Future<Output = Result<ShutdownSignal>>,
{
    match signal.await {
        Ok(signal) => {
            info!("Shutting down on {} signal", signal);
            if tx.send(Message::Quit).await.is_err() {
                debug!("Engine already gone, nothing to stop");
            }
        }
        Err(e) => error!("Signal listener failed: {}", e),
    }
}

#[cfg(unix)]
async fn next_shutdown_signal() -> Result<ShutdownSignal> {
    use tokio::signal::unix::{signal, SignalKind};

    let listen = |kind: SignalKind, name: &str| {
        signal(kind).map_err(|e| Error::terminal(format!("cannot listen for {name}: {e}")))
    };
    let mut interrupt = listen(SignalKind::interrupt(), "SIGINT")?;
    let mut terminate = listen(SignalKind::terminate(), "SIGTERM")?;

    Ok(tokio::select! {
        _ = interrupt.recv() => ShutdownSignal::Interrupt,
        _ = terminate.recv() => ShutdownSignal::Terminate,
    })
}

#[cfg(not(unix))]
async fn next_shutdown_signal() -> Result<ShutdownSignal> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("cannot listen for Ctrl+C: {e}")))?;
    Ok(ShutdownSignal::Interrupt)
}
