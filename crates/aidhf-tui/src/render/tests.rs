//! Full-screen render tests

use aidhf_app::handler::update;
use aidhf_app::{AppState, FormFocus, Message};
use aidhf_core::{SymptomField, YesNo};

use super::view;
use crate::test_utils::{create_test_state, TestTerminal};

fn send(state: &mut AppState, msg: Message) {
    let mut next = Some(msg);
    while let Some(msg) = next {
        next = update(state, msg).message;
    }
}

fn render(state: &AppState, width: u16, height: u16) -> TestTerminal {
    let mut term = TestTerminal::with_size(width, height);
    term.draw_with(|frame| view(frame, state));
    term
}

fn fail_submission(state: &mut AppState) {
    send(state, Message::AnswerSyncope(YesNo::No));
    send(state, Message::Submit);
    send(
        state,
        Message::AdviceFailed {
            reason: "HTTP 500".to_string(),
        },
    );
}

#[test]
fn test_initial_form_in_dutch() {
    let state = create_test_state("nl-NL");
    let term = render(&state, 80, 24);

    assert!(term.line_contains(1, "AID-HF"));
    assert!(term.line_contains(1, "nl-NL"));
    assert!(term.buffer_contains("Hoe gaat het vandaag?"));
    assert!(term.buffer_contains("Kortademig bij plat liggen"));
    assert!(term.buffer_contains("Flauwgevallen"));
    assert!(term.buffer_contains("[0 Geen]"));
    assert!(term.buffer_contains("Advies opvragen"));
    // Syncope is unanswered and nothing is selected yet
    assert!(!term.buffer_contains("[Ja]"));
    assert!(!term.buffer_contains("[Nee]"));
}

#[test]
fn test_language_switch_changes_every_label() {
    let mut state = create_test_state("nl-NL");
    send(&mut state, Message::CycleLanguage);
    let term = render(&state, 80, 24);

    assert!(term.buffer_contains("How are you feeling today?"));
    assert!(term.buffer_contains("Coughing"));
    assert!(term.buffer_contains("[0 None]"));
    assert!(term.buffer_contains("Get advice"));
    assert!(!term.buffer_contains("Hoesten"));
}

#[test]
fn test_selected_answers_are_marked() {
    let mut state = create_test_state("en-US");
    send(&mut state, Message::SetGrade(2));
    send(&mut state, Message::AnswerSyncope(YesNo::Yes));
    let term = render(&state, 80, 24);

    assert!(term.buffer_contains("[2 Moderate]"));
    assert!(term.buffer_contains("[Yes]"));
}

#[test]
fn test_required_hint_after_failed_validation() {
    let mut state = create_test_state("en-US");
    send(&mut state, Message::Submit);
    let term = render(&state, 80, 30);

    assert!(term.buffer_contains("! Please answer this question"));
}

#[test]
fn test_info_panel_expands() {
    let mut state = create_test_state("en-US");
    let collapsed = render(&state, 100, 30);
    assert!(!collapsed.buffer_contains("more pillows"));
    assert!(collapsed.buffer_contains("(i) More information"));

    send(&mut state, Message::ToggleInfo);
    let expanded = render(&state, 100, 30);
    assert!(expanded.buffer_contains("more pillows"));
    assert!(expanded.buffer_contains("(i) Less information"));
    assert!(!expanded.buffer_contains("More information"));
}

#[test]
fn test_submitting_shows_spinner_text() {
    let mut state = create_test_state("en-US");
    send(&mut state, Message::AnswerSyncope(YesNo::No));
    send(&mut state, Message::Submit);
    let term = render(&state, 80, 24);

    assert!(term.buffer_contains("Sending"));
    assert!(!term.buffer_contains("[ Get advice ]"));
}

#[test]
fn test_error_banner_shown_and_dismissed() {
    let mut state = create_test_state("en-US");
    fail_submission(&mut state);

    let term = render(&state, 100, 30);
    assert!(term.buffer_contains("Something went wrong"));
    assert!(term.buffer_contains("[Esc] Dismiss"));
    assert_eq!(term.find_line("Something went wrong"), Some(4));

    send(&mut state, Message::DismissError);
    let term = render(&state, 100, 30);
    assert!(!term.buffer_contains("Something went wrong"));
}

#[test]
fn test_advice_screen_replaces_form() {
    let mut state = create_test_state("en-US");
    send(&mut state, Message::AnswerSyncope(YesNo::No));
    send(&mut state, Message::Submit);
    send(
        &mut state,
        Message::AdviceReceived {
            advice: "Contact your heart failure nurse today.".to_string(),
        },
    );
    let term = render(&state, 80, 24);

    assert!(term.buffer_contains("Your advice"));
    assert!(term.buffer_contains("Contact your heart failure nurse today."));
    assert!(term.buffer_contains("Start again"));
    assert!(!term.buffer_contains("Coughing"));
}

#[test]
fn test_focus_on_buttons_scrolls_small_terminal() {
    let mut state = create_test_state("en-US");
    state.form.set_focus(FormFocus::Reset);
    let term = render(&state, 60, 12);

    assert!(term.buffer_contains("[ Start over ]"));
    assert!(!term.buffer_contains("Short of breath"));
}

#[test]
fn test_focused_question_has_marker() {
    let mut state = create_test_state("en-US");
    state
        .form
        .set_focus(FormFocus::Question(SymptomField::Dizziness));
    let term = render(&state, 80, 24);

    assert!(term.buffer_contains("› Dizziness"));
    assert!(!term.buffer_contains("› Coughing"));
}

#[test]
fn test_reset_hint_only_after_an_answer_changes() {
    let mut state = create_test_state("en-US");
    let clean = render(&state, 160, 24);
    assert!(!clean.buffer_contains("r clear"));

    send(&mut state, Message::SetGrade(2));
    let dirty = render(&state, 160, 24);
    assert!(dirty.buffer_contains("r clear"));

    send(&mut state, Message::ResetForm);
    let reset = render(&state, 160, 24);
    assert!(!reset.buffer_contains("r clear"));
}
