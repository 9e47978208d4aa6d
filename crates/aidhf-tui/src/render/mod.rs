//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use aidhf_app::controls::FormControl;
use aidhf_app::{AppState, FormFocus, Screen};
use aidhf_core::{SymptomField, YesNo};

use crate::layout::{self, ScreenAreas};
use crate::theme::palette;
use crate::widgets::{self, text::spinner_frame, FormButtons, OptionChip, QuestionView};

/// Render the complete UI (View function in TEA)
///
/// Pure rendering: every visible string is looked up through the state's
/// labels so a language switch takes effect on the next frame.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let show_banner = state.screen() == Screen::Collecting && state.form.error_state();
    let areas = layout::create(area, show_banner);

    let title = state.t("APP.TITLE");
    let subtitle = state.t("APP.SUBTITLE");
    frame.render_widget(
        widgets::MainHeader::new(&title, &subtitle, state.labels().language()),
        areas.header,
    );

    match (state.screen(), state.shell.advice()) {
        (Screen::Reviewing, Some(advice)) => render_advice(frame, &areas, state, advice),
        _ => render_form(frame, &areas, state, show_banner),
    }
}

fn render_advice(frame: &mut Frame, areas: &ScreenAreas, state: &AppState, advice: &str) {
    let title = state.t("RESULT.TITLE");
    let restart = state.t("RESULT.RESTART");
    frame.render_widget(widgets::AdviceView::new(&title, advice, &restart), areas.body);

    let hints = widgets::KeyHints::new()
        .hint("Enter", state.t("HINTS.RESTART"))
        .hint("l", state.t("HINTS.LANGUAGE"))
        .hint("q", state.t("HINTS.QUIT"));
    frame.render_widget(hints, areas.footer);
}

/// Translated texts of one question, owned for the duration of a frame.
struct QuestionText {
    label: String,
    info: String,
}

fn render_form(frame: &mut Frame, areas: &ScreenAreas, state: &AppState, show_banner: bool) {
    if show_banner {
        let message = state.t("ERROR.MESSAGE");
        let dismiss = state.t("ERROR.DISMISS");
        frame.render_widget(widgets::ErrorBannerView::new(&message, &dismiss), areas.banner);
    }

    let form = &state.form;
    let texts: Vec<QuestionText> = SymptomField::ALL
        .iter()
        .map(|field| {
            let key = field.name().to_uppercase();
            QuestionText {
                label: state.t(&format!("QUESTIONS.{key}.LABEL")),
                info: state.t(&format!("QUESTIONS.{key}.INFO")),
            }
        })
        .collect();
    let show_info = state.t("INFO.SHOW");
    let hide_info = state.t("INFO.HIDE");
    let required = state.t("FORM.REQUIRED");

    let questions = SymptomField::ALL
        .iter()
        .zip(&texts)
        .map(|(&field, text)| {
            let expanded = form.info(field).is_expanded();
            QuestionView::new(&text.label, option_chips(state, field))
                .focused(form.focus() == FormFocus::Question(field))
                .info(expanded.then_some(text.info.as_str()), &show_info, &hide_info)
                .required(
                    (field == SymptomField::Syncope && form.syncope_missing())
                        .then_some(required.as_str()),
                )
        })
        .collect();

    let title = state.t("FORM.TITLE");
    let submit = state.t("FORM.SUBMIT");
    let reset = state.t("FORM.RESET");
    let buttons = FormButtons {
        submit: &submit,
        reset: &reset,
        pending: form.is_submitting().then(|| {
            format!(
                "{} {}",
                spinner_frame(state.spinner_frame),
                state.t("FORM.SUBMITTING")
            )
        }),
        reset_enabled: form.is_dirty(),
    };

    frame.render_widget(
        widgets::FormView::new(&title, questions, buttons, focus_index(form.focus())),
        areas.body,
    );

    let mut hints = widgets::KeyHints::new()
        .hint("Tab", state.t("HINTS.NAVIGATE"))
        .hint("←/→", state.t("HINTS.CHANGE"))
        .hint("i", state.t("HINTS.INFO"))
        .hint("Enter", state.t("HINTS.SUBMIT"));
    if form.is_dirty() {
        hints = hints.hint("r", state.t("HINTS.RESET"));
    }
    if show_banner {
        hints = hints.hint("Esc", state.t("HINTS.DISMISS"));
    }
    let hints = hints
        .hint("l", state.t("HINTS.LANGUAGE"))
        .hint("q", state.t("HINTS.QUIT"));
    frame.render_widget(hints, areas.footer);
}

fn option_chips(state: &AppState, field: SymptomField) -> Vec<OptionChip> {
    match state.form.grade_question(field) {
        Some(question) => question
            .options()
            .into_iter()
            .map(|grade| {
                let text = format!("{} {}", grade, state.t(&format!("GRADE.{grade}")));
                OptionChip::new(text, grade == *question.value())
            })
            .collect(),
        None => {
            let syncope = state.form.syncope();
            syncope
                .options()
                .into_iter()
                .flatten()
                .map(|answer| {
                    let key = match answer {
                        YesNo::Yes => "ANSWER.YES",
                        YesNo::No => "ANSWER.NO",
                    };
                    OptionChip::new(state.t(key), Some(answer) == *syncope.value())
                })
                .collect()
        }
    }
}

/// Position of `focus` among the questions and buttons, in render order.
fn focus_index(focus: FormFocus) -> usize {
    match focus {
        FormFocus::Question(field) => field.index(),
        FormFocus::Submit => SymptomField::ALL.len(),
        FormFocus::Reset => SymptomField::ALL.len() + 1,
    }
}
