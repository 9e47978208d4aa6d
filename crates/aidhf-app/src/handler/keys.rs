//! Key event handlers for each screen

use aidhf_core::YesNo;

use crate::form::FormFocus;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::shell::Screen;
use crate::state::AppState;

/// Convert key events to messages based on the active screen
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Global keys
    match key {
        InputKey::CharCtrl('c') | InputKey::Char('q') => return Some(Message::Quit),
        InputKey::Char('l') | InputKey::F(2) => return Some(Message::CycleLanguage),
        _ => {}
    }

    match state.screen() {
        Screen::Collecting => handle_key_form(state, key),
        Screen::Reviewing => handle_key_result(key),
    }
}

/// Handle key events while the symptom form is shown
fn handle_key_form(state: &AppState, key: InputKey) -> Option<Message> {
    if let Some(value) = key.digit() {
        return Some(Message::SetGrade(value));
    }

    match key {
        // Navigation
        InputKey::Tab | InputKey::Down | InputKey::Char('j') => Some(Message::FocusNext),
        InputKey::BackTab | InputKey::Up | InputKey::Char('k') => Some(Message::FocusPrevious),

        // Editing
        InputKey::Right | InputKey::Char('+') | InputKey::Char(' ') => Some(Message::IncreaseValue),
        InputKey::Left | InputKey::Char('-') => Some(Message::DecreaseValue),
        InputKey::Char('y') => Some(Message::AnswerSyncope(YesNo::Yes)),
        InputKey::Char('n') => Some(Message::AnswerSyncope(YesNo::No)),
        InputKey::Char('i') | InputKey::Char('?') => Some(Message::ToggleInfo),

        // Workflow
        InputKey::Enter => match state.form.focus() {
            FormFocus::Reset => Some(Message::ResetForm),
            _ => Some(Message::Submit),
        },
        InputKey::CharCtrl('s') => Some(Message::Submit),
        InputKey::Char('r') | InputKey::CharCtrl('r') => Some(Message::ResetForm),
        InputKey::Esc | InputKey::Char('x') if state.form.error_state() => {
            Some(Message::DismissError)
        }

        _ => None,
    }
}

/// Handle key events while the advice is shown
fn handle_key_result(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Esc | InputKey::Char('r') | InputKey::Backspace => {
            Some(Message::Restart)
        }
        _ => None,
    }
}
