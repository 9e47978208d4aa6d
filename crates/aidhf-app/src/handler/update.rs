//! Main update function - handles state transitions (TEA pattern)

use aidhf_core::AppPhase;
use tracing::{debug, info, trace, warn};

use crate::i18n::next_language;
use crate::message::Message;
use crate::state::AppState;

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Number of frames in the submitting spinner
pub const SPINNER_FRAMES: usize = 10;

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            if state.form.is_submitting() {
                state.spinner_frame = (state.spinner_frame + 1) % SPINNER_FRAMES;
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Form Navigation
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            state.form.focus_next();
            UpdateResult::none()
        }

        Message::FocusPrevious => {
            state.form.focus_previous();
            UpdateResult::none()
        }

        Message::IncreaseValue => {
            state.form.increase();
            UpdateResult::none()
        }

        Message::DecreaseValue => {
            state.form.decrease();
            UpdateResult::none()
        }

        Message::SetGrade(value) => {
            state.form.set_grade(value);
            UpdateResult::none()
        }

        Message::AnswerSyncope(answer) => {
            state.form.answer_syncope(answer);
            UpdateResult::none()
        }

        Message::ToggleInfo => {
            if let Some(expanded) = state.form.toggle_info() {
                trace!("Info panel expanded: {}", expanded);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Submission Workflow
        // ─────────────────────────────────────────────────────────
        Message::Submit => handle_submit(state),

        Message::ResetForm => {
            let cleared = state.form.reset();
            debug!("Form reset");
            match cleared {
                Some(_) => UpdateResult::action(UpdateAction::CancelErrorDismiss),
                None => UpdateResult::none(),
            }
        }

        Message::DismissError => match state.form.dismiss_error() {
            Some(banner_id) => {
                debug!("Error banner {} dismissed by user", banner_id);
                UpdateResult::action(UpdateAction::CancelErrorDismiss)
            }
            None => UpdateResult::none(),
        },

        Message::AdviceReceived { advice } => handle_advice_received(state, advice),

        Message::AdviceFailed { reason } => {
            if !state.form.is_submitting() {
                debug!("Dropping failure for a request no longer pending: {}", reason);
                return UpdateResult::none();
            }
            let banner_id = state.allocate_banner_id();
            state.form.submission_failed(banner_id, reason);
            UpdateResult::action(UpdateAction::ScheduleErrorDismiss { banner_id })
        }

        Message::ErrorDismissTimeout { banner_id } => {
            let active = state.form.error_banner().map(|banner| banner.id);
            if active != Some(banner_id) {
                trace!("Ignoring stale dismiss timeout for banner {}", banner_id);
                return UpdateResult::none();
            }
            state.form.dismiss_error();
            debug!("Error banner {} dismissed after timeout", banner_id);
            UpdateResult::action(UpdateAction::CancelErrorDismiss)
        }

        // ─────────────────────────────────────────────────────────
        // Shell
        // ─────────────────────────────────────────────────────────
        Message::Restart => {
            if state.shell.advice().is_some() {
                info!("Starting a new symptom form");
                state.shell.clear_advice();
            }
            UpdateResult::none()
        }

        Message::CycleLanguage => {
            let labels = state.labels();
            match next_language(&labels.available_languages(), labels.language()) {
                Some(code) => UpdateResult::message(Message::SetLanguage { code }),
                None => UpdateResult::none(),
            }
        }

        Message::SetLanguage { code } => {
            if let Err(e) = state.labels_mut().use_language(&code) {
                warn!("{}", e);
            }
            UpdateResult::none()
        }
    }
}

fn handle_submit(state: &mut AppState) -> UpdateResult {
    match state.form.begin_submission() {
        Some(record) => {
            info!("Submitting symptoms for advice");
            state.spinner_frame = 0;
            UpdateResult::action(UpdateAction::RequestAdvice { record })
        }
        None => UpdateResult::none(),
    }
}

fn handle_advice_received(state: &mut AppState, advice: String) -> UpdateResult {
    if !state.form.is_submitting() {
        debug!("Dropping advice for a request no longer pending");
        return UpdateResult::none();
    }

    let cleared = state.form.submission_succeeded();
    state.show_advice(advice);

    match cleared {
        Some(_) => UpdateResult::action(UpdateAction::CancelErrorDismiss),
        None => UpdateResult::none(),
    }
}
