//! AID-HF - Terminal client for heart failure symptom advice
//!
//! This is the binary entry point: argument parsing, logging and settings
//! bootstrap. The questionnaire itself lives in the workspace crates.

mod headless;

use std::path::PathBuf;

use clap::Parser;

use aidhf_app::config::{self, Settings};
use aidhf_app::{Catalog, Labels};
use aidhf_client::AdviceClient;
use aidhf_core::prelude::*;
use aidhf_core::{Grade, SymptomRecord, YesNo};

use headless::HeadlessOutcome;

/// AID-HF - Heart failure symptom questionnaire with remote advice
#[derive(Parser, Debug)]
#[command(name = "aidhf")]
#[command(about = "Report heart failure symptoms and get advice", long_about = None)]
struct Args {
    /// Advice API base URL (requests go to <URL>/advice)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Display language, e.g. nl-NL or en-US
    #[arg(long, value_name = "CODE")]
    lang: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Submit the answers given on the command line and print JSON events
    #[arg(long)]
    headless: bool,

    /// Shortness of breath when lying flat (0-3)
    #[arg(long, default_value = "0", value_parser = parse_grade, requires = "headless")]
    orthopnea: Grade,

    /// Coughing (0-3)
    #[arg(long, default_value = "0", value_parser = parse_grade, requires = "headless")]
    cough: Grade,

    /// Swollen legs or ankles (0-3)
    #[arg(long, default_value = "0", value_parser = parse_grade, requires = "headless")]
    edema: Grade,

    /// Dizziness (0-3)
    #[arg(long, default_value = "0", value_parser = parse_grade, requires = "headless")]
    dizziness: Grade,

    /// Fainted since the last check-in (yes/no)
    #[arg(long, value_parser = parse_yes_no, requires = "headless")]
    syncope: Option<YesNo>,
}

impl Args {
    fn record(&self) -> SymptomRecord {
        SymptomRecord {
            orthopnea: self.orthopnea,
            cough: self.cough,
            edema: self.edema,
            dizziness: self.dizziness,
            syncope: self.syncope,
        }
    }
}

fn parse_grade(value: &str) -> std::result::Result<Grade, String> {
    let n: u8 = value.parse().map_err(|_| format!("{value} is not a number"))?;
    Grade::try_from(n).map_err(|e| e.to_string())
}

fn parse_yes_no(value: &str) -> std::result::Result<YesNo, String> {
    value.parse().map_err(|e: Error| e.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Logs go to a file since the TUI owns stdout
    aidhf_core::logging::init()?;

    let settings = resolve_settings(&args)?;
    info!(
        "Using advice API {} (timeout {}s)",
        settings.api.base_url, settings.api.timeout_secs
    );

    let labels = build_labels(&settings);
    let client = AdviceClient::with_timeout(&settings.api.base_url, settings.api.timeout())?;

    if args.headless {
        let outcome = headless::run_headless(settings, client, labels, args.record()).await?;
        match &outcome {
            HeadlessOutcome::Advice(advice) => debug!("Advice delivered ({} bytes)", advice.len()),
            HeadlessOutcome::Failed(reason) => error!("Headless submission failed: {}", reason),
            HeadlessOutcome::Rejected | HeadlessOutcome::Interrupted => {}
        }
        if !outcome.is_success() {
            std::process::exit(1);
        }
        return Ok(());
    }

    let result = aidhf_tui::run(settings, client, labels).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("AID-HF exiting");
    result
}

/// Command line flags override the config file, which overrides defaults.
fn resolve_settings(args: &Args) -> Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => config::load_settings_strict(path)?,
        None => match config::default_config_path() {
            Some(path) => {
                if let Err(e) = config::init_config_file(&path) {
                    warn!("{}", e);
                }
                config::load_settings(&path)
            }
            None => Settings::default(),
        },
    };

    if let Some(url) = &args.api_url {
        settings.api.base_url = url.clone();
    }
    if let Some(lang) = &args.lang {
        settings.ui.language = lang.clone();
    }

    Ok(settings)
}

fn build_labels(settings: &Settings) -> Box<dyn Labels> {
    let mut catalog = Catalog::bundled();

    if let Some(dir) = &settings.ui.translations_dir {
        match catalog.load_dir(dir) {
            Ok(count) => info!("Loaded {} translation files from {}", count, dir.display()),
            Err(e) => warn!("Ignoring translations in {}: {}", dir.display(), e),
        }
    }

    Box::new(catalog)
}
