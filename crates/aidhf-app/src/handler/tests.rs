//! Tests for the update function and key handling

use aidhf_core::{Grade, SymptomField, SymptomRecord, YesNo};

use super::keys::handle_key;
use super::*;
use crate::banner::BannerId;
use crate::form::FormFocus;
use crate::input_key::InputKey;
use crate::shell::Screen;
use crate::state::AppState;

fn run(state: &mut AppState, msg: Message) -> Option<UpdateAction> {
    let mut msg = Some(msg);
    let mut last_action = None;
    while let Some(m) = msg {
        let result = update(state, m);
        if result.action.is_some() {
            last_action = result.action;
        }
        msg = result.message;
    }
    last_action
}

fn press(state: &mut AppState, key: InputKey) -> Option<UpdateAction> {
    run(state, Message::Key(key))
}

fn submit_answered(state: &mut AppState) -> SymptomRecord {
    run(state, Message::AnswerSyncope(YesNo::No));
    match run(state, Message::Submit) {
        Some(UpdateAction::RequestAdvice { record }) => record,
        other => panic!("expected RequestAdvice, got {:?}", other),
    }
}

fn fail(state: &mut AppState) -> BannerId {
    match run(
        state,
        Message::AdviceFailed {
            reason: "HTTP 500".to_string(),
        },
    ) {
        Some(UpdateAction::ScheduleErrorDismiss { banner_id }) => banner_id,
        other => panic!("expected ScheduleErrorDismiss, got {:?}", other),
    }
}

// ─────────────────────────────────────────────────────────
// Submission
// ─────────────────────────────────────────────────────────

#[test]
fn test_default_form_cannot_submit() {
    let mut state = AppState::new();

    assert_eq!(run(&mut state, Message::Submit), None);

    assert!(!state.form.is_submitting());
    assert!(state.form.syncope_missing());
}

#[test]
fn test_submit_sends_every_answer() {
    let mut state = AppState::new();
    // Scenario: orthopnea 1, edema 2, syncope yes
    run(&mut state, Message::SetGrade(1));
    run(&mut state, Message::FocusNext);
    run(&mut state, Message::FocusNext);
    run(&mut state, Message::SetGrade(2));
    run(&mut state, Message::AnswerSyncope(YesNo::Yes));

    let action = run(&mut state, Message::Submit);

    assert_eq!(
        action,
        Some(UpdateAction::RequestAdvice {
            record: SymptomRecord {
                orthopnea: Grade::Grade1,
                cough: Grade::Grade0,
                edema: Grade::Grade2,
                dizziness: Grade::Grade0,
                syncope: Some(YesNo::Yes),
            }
        })
    );
}

#[test]
fn test_submit_while_pending_is_ignored() {
    let mut state = AppState::new();
    submit_answered(&mut state);

    assert_eq!(run(&mut state, Message::Submit), None);
}

#[test]
fn test_success_shows_advice_and_hides_form() {
    let mut state = AppState::new();
    submit_answered(&mut state);

    run(
        &mut state,
        Message::AdviceReceived {
            advice: "Contact your nurse today.".to_string(),
        },
    );

    assert_eq!(state.screen(), Screen::Reviewing);
    assert_eq!(state.shell.advice(), Some("Contact your nurse today."));
    assert!(!state.form.error_state());
}

#[test]
fn test_restart_returns_to_fresh_form() {
    let mut state = AppState::new();
    run(&mut state, Message::SetGrade(3));
    submit_answered(&mut state);
    run(
        &mut state,
        Message::AdviceReceived {
            advice: "ok".to_string(),
        },
    );

    run(&mut state, Message::Restart);

    assert_eq!(state.screen(), Screen::Collecting);
    assert_eq!(state.form.record(), SymptomRecord::default());
}

#[test]
fn test_late_response_after_success_is_dropped() {
    let mut state = AppState::new();
    submit_answered(&mut state);
    run(
        &mut state,
        Message::AdviceReceived {
            advice: "first".to_string(),
        },
    );

    run(
        &mut state,
        Message::AdviceReceived {
            advice: "second".to_string(),
        },
    );

    assert_eq!(state.shell.advice(), Some("first"));
}

// ─────────────────────────────────────────────────────────
// Error Banner
// ─────────────────────────────────────────────────────────

#[test]
fn test_failure_raises_banner_and_keeps_answers() {
    let mut state = AppState::new();
    run(&mut state, Message::SetGrade(2));
    let record = submit_answered(&mut state);

    fail(&mut state);

    assert!(state.form.error_state());
    assert!(!state.form.is_submitting());
    assert_eq!(state.screen(), Screen::Collecting);
    assert_eq!(state.form.record(), record);
}

#[test]
fn test_manual_dismiss_cancels_timer() {
    let mut state = AppState::new();
    submit_answered(&mut state);
    fail(&mut state);

    let action = run(&mut state, Message::DismissError);

    assert_eq!(action, Some(UpdateAction::CancelErrorDismiss));
    assert!(!state.form.error_state());
}

#[test]
fn test_timeout_dismisses_matching_banner() {
    let mut state = AppState::new();
    submit_answered(&mut state);
    let banner_id = fail(&mut state);

    run(&mut state, Message::ErrorDismissTimeout { banner_id });

    assert!(!state.form.error_state());
}

#[test]
fn test_stale_timeout_after_manual_dismiss_is_noop() {
    let mut state = AppState::new();
    submit_answered(&mut state);
    let first = fail(&mut state);
    run(&mut state, Message::DismissError);

    // Submit and fail again: the old timeout must not close the new banner
    run(&mut state, Message::Submit);
    let second = fail(&mut state);
    assert_ne!(first, second);

    assert_eq!(
        run(&mut state, Message::ErrorDismissTimeout { banner_id: first }),
        None
    );
    assert!(state.form.error_state());

    run(&mut state, Message::ErrorDismissTimeout { banner_id: second });
    assert!(!state.form.error_state());
}

#[test]
fn test_repeated_failure_replaces_banner() {
    let mut state = AppState::new();
    submit_answered(&mut state);
    let first = fail(&mut state);
    run(&mut state, Message::Submit);
    let second = fail(&mut state);

    assert_eq!(state.form.error_banner().map(|b| b.id), Some(second));
    assert_ne!(first, second);
}

#[test]
fn test_success_after_failure_clears_banner() {
    let mut state = AppState::new();
    submit_answered(&mut state);
    fail(&mut state);
    run(&mut state, Message::Submit);

    let action = run(
        &mut state,
        Message::AdviceReceived {
            advice: "fine".to_string(),
        },
    );

    assert_eq!(action, Some(UpdateAction::CancelErrorDismiss));
    assert!(!state.form.error_state());
    assert_eq!(state.screen(), Screen::Reviewing);
}

#[test]
fn test_failure_without_pending_request_is_dropped() {
    let mut state = AppState::new();

    let action = run(
        &mut state,
        Message::AdviceFailed {
            reason: "late".to_string(),
        },
    );

    assert_eq!(action, None);
    assert!(!state.form.error_state());
}

#[test]
fn test_reset_clears_banner_and_answers() {
    let mut state = AppState::new();
    run(&mut state, Message::SetGrade(3));
    submit_answered(&mut state);
    fail(&mut state);

    let action = run(&mut state, Message::ResetForm);

    assert_eq!(action, Some(UpdateAction::CancelErrorDismiss));
    assert!(!state.form.error_state());
    assert_eq!(state.form.record(), SymptomRecord::default());
}

// ─────────────────────────────────────────────────────────
// Language and Ticks
// ─────────────────────────────────────────────────────────

#[test]
fn test_cycle_language_round_trips() {
    let mut state = AppState::new();
    assert_eq!(state.t("ANSWER.YES"), "Ja");

    run(&mut state, Message::CycleLanguage);
    assert_eq!(state.labels().language(), "en-US");
    assert_eq!(state.t("ANSWER.YES"), "Yes");

    run(&mut state, Message::CycleLanguage);
    assert_eq!(state.labels().language(), "nl-NL");
}

#[test]
fn test_set_unknown_language_keeps_current() {
    let mut state = AppState::new();
    run(
        &mut state,
        Message::SetLanguage {
            code: "xx-XX".to_string(),
        },
    );
    assert_eq!(state.labels().language(), "nl-NL");
}

#[test]
fn test_tick_animates_only_while_submitting() {
    let mut state = AppState::new();
    run(&mut state, Message::Tick);
    assert_eq!(state.spinner_frame, 0);

    submit_answered(&mut state);
    run(&mut state, Message::Tick);
    run(&mut state, Message::Tick);
    assert_eq!(state.spinner_frame, 2);
}

#[test]
fn test_quit_sets_phase() {
    let mut state = AppState::new();
    run(&mut state, Message::Quit);
    assert!(state.should_quit());
}

// ─────────────────────────────────────────────────────────
// Key Handling
// ─────────────────────────────────────────────────────────

#[test]
fn test_keys_edit_focused_question() {
    let mut state = AppState::new();
    press(&mut state, InputKey::Right);
    press(&mut state, InputKey::Right);
    press(&mut state, InputKey::Tab);
    press(&mut state, InputKey::Char('3'));
    press(&mut state, InputKey::Left);

    let record = state.form.record();
    assert_eq!(record.orthopnea, Grade::Grade2);
    assert_eq!(record.cough, Grade::Grade2);
}

#[test]
fn test_keys_answer_and_submit() {
    let mut state = AppState::new();
    press(&mut state, InputKey::Char('y'));

    let action = press(&mut state, InputKey::Enter);

    assert!(matches!(action, Some(UpdateAction::RequestAdvice { .. })));
    assert_eq!(
        state.form.focus(),
        FormFocus::Question(SymptomField::Syncope)
    );
}

#[test]
fn test_enter_on_reset_button_resets() {
    let mut state = AppState::new();
    press(&mut state, InputKey::Char('2'));
    state.form.set_focus(FormFocus::Reset);

    assert_eq!(
        handle_key(&state, InputKey::Enter),
        Some(Message::ResetForm)
    );
}

#[test]
fn test_esc_dismisses_only_when_banner_shown() {
    let mut state = AppState::new();
    assert_eq!(handle_key(&state, InputKey::Esc), None);

    submit_answered(&mut state);
    fail(&mut state);
    assert_eq!(
        handle_key(&state, InputKey::Esc),
        Some(Message::DismissError)
    );
}

#[test]
fn test_info_key_toggles_panel() {
    let mut state = AppState::new();
    press(&mut state, InputKey::Char('i'));
    assert!(state.form.info(SymptomField::Orthopnea).is_expanded());
}

#[test]
fn test_result_screen_keys() {
    let mut state = AppState::new();
    state.shell.set_advice("advice");

    assert_eq!(handle_key(&state, InputKey::Enter), Some(Message::Restart));
    assert_eq!(handle_key(&state, InputKey::Char('1')), None);
    assert_eq!(handle_key(&state, InputKey::Char('q')), Some(Message::Quit));
}

#[test]
fn test_ctrl_c_quits_everywhere() {
    let state = AppState::new();
    assert_eq!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    );
}
