//! Application state (Model in TEA pattern)

use aidhf_core::AppPhase;
use tracing::warn;

use crate::banner::BannerId;
use crate::config::Settings;
use crate::form::SymptomForm;
use crate::i18n::{Catalog, Labels};
use crate::shell::{RootShell, Screen};

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Running or quitting
    pub phase: AppPhase,

    /// Advice slot deciding which screen is shown
    pub shell: RootShell,

    /// Questionnaire and submission workflow
    pub form: SymptomForm,

    /// Settings the session was started with
    pub settings: Settings,

    /// Spinner animation frame, advanced on tick while submitting
    pub spinner_frame: usize,

    labels: Box<dyn Labels>,
    next_banner_id: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Default settings with the bundled translations.
    pub fn new() -> Self {
        Self::with_settings(Settings::default(), Box::new(Catalog::bundled()))
    }

    /// State for the given settings; applies the configured language.
    pub fn with_settings(settings: Settings, mut labels: Box<dyn Labels>) -> Self {
        if let Err(e) = labels.use_language(&settings.ui.language) {
            warn!("{}; keeping {}", e, labels.language());
        }

        Self {
            phase: AppPhase::Running,
            shell: RootShell::new(),
            form: SymptomForm::new(),
            settings,
            spinner_frame: 0,
            labels,
            next_banner_id: 0,
        }
    }

    pub fn screen(&self) -> Screen {
        self.shell.screen()
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Translate a display key in the active language.
    pub fn t(&self, key: &str) -> String {
        self.labels.translate(key)
    }

    pub fn labels(&self) -> &dyn Labels {
        self.labels.as_ref()
    }

    pub fn labels_mut(&mut self) -> &mut dyn Labels {
        self.labels.as_mut()
    }

    /// Show advice; the form is discarded and the next one starts fresh.
    pub fn show_advice(&mut self, advice: String) {
        self.shell.set_advice(advice);
        self.form = SymptomForm::new();
    }

    /// Id for the next error banner; never reused within a run.
    pub fn allocate_banner_id(&mut self) -> BannerId {
        self.next_banner_id += 1;
        BannerId::new(self.next_banner_id)
    }
}
