//! File logging for the client
//!
//! The TUI owns stdout, so all diagnostics go to a daily rolling file under
//! `<data_local_dir>/aidhf/logs/`. Verbosity comes from `AIDHF_LOG`:
//!
//! ```bash
//! AIDHF_LOG=debug aidhf
//! AIDHF_LOG=aidhf_client=trace,aidhf=info aidhf
//! ```

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable holding filter directives
pub const LOG_ENV: &str = "AIDHF_LOG";

/// Target prefix match covers every `aidhf_*` crate
const DEFAULT_DIRECTIVES: &str = "aidhf=info,warn";

const LOG_FILE_PREFIX: &str = "aidhf.log";

/// Install the global subscriber. Returns the directory logs are written to.
pub fn init() -> Result<PathBuf> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);
    let filter = build_filter(std::env::var(LOG_ENV).ok().as_deref());

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        dir = %log_dir.display(),
        "AID-HF advice client starting"
    );

    Ok(log_dir)
}

/// Filter from user directives, or the default when they are absent or invalid
fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}

fn log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("aidhf")
        .join("logs")
}
