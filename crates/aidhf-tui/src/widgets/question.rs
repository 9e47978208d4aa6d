//! One question of the symptom form
//!
//! Renders the label, the selectable options, the optional explanatory text
//! and the "answer required" hint. Works for both graded and yes/no
//! questions: callers supply the option chips already labelled.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

use super::text::wrap_words;

/// A selectable option as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionChip {
    pub text: String,
    pub selected: bool,
}

impl OptionChip {
    pub fn new(text: impl Into<String>, selected: bool) -> Self {
        Self {
            text: text.into(),
            selected,
        }
    }
}

pub struct QuestionView<'a> {
    label: &'a str,
    options: Vec<OptionChip>,
    focused: bool,
    info: Option<&'a str>,
    show_info: &'a str,
    hide_info: &'a str,
    required: Option<&'a str>,
}

impl<'a> QuestionView<'a> {
    pub fn new(label: &'a str, options: Vec<OptionChip>) -> Self {
        Self {
            label,
            options,
            focused: false,
            info: None,
            show_info: "",
            hide_info: "",
            required: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Show `text` below the options. The focused question offers `show`
    /// while collapsed and `hide` while expanded.
    pub fn info(mut self, text: Option<&'a str>, show: &'a str, hide: &'a str) -> Self {
        self.info = text;
        self.show_info = show;
        self.hide_info = hide;
        self
    }

    /// Show a required-answer hint.
    pub fn required(mut self, hint: Option<&'a str>) -> Self {
        self.required = hint;
        self
    }

    /// Lines for this question at the given content width.
    pub fn lines(&self, width: u16) -> Vec<Line<'a>> {
        let marker = if self.focused { "› " } else { "  " };
        let label_style = if self.focused {
            styles::accent_bold()
        } else {
            styles::text_primary()
        };

        let mut label = vec![
            Span::styled(marker, styles::accent()),
            Span::styled(self.label, label_style),
        ];
        let toggle = if self.info.is_some() {
            self.hide_info
        } else {
            self.show_info
        };
        if self.focused && !toggle.is_empty() {
            label.push(Span::styled(format!("  (i) {}", toggle), styles::text_muted()));
        }

        let mut chips = vec![Span::raw("    ")];
        for option in &self.options {
            let style = match (option.selected, self.focused) {
                (true, true) => styles::focused_selected(),
                (true, false) => styles::accent_bold(),
                (false, _) => styles::text_secondary(),
            };
            let text = if option.selected {
                format!("[{}]", option.text)
            } else {
                format!(" {} ", option.text)
            };
            chips.push(Span::styled(text, style));
            chips.push(Span::raw(" "));
        }

        let mut lines = vec![Line::from(label), Line::from(chips)];

        if let Some(info) = self.info {
            let indent = 4usize;
            let wrap_width = (width as usize).saturating_sub(indent).max(1);
            for row in wrap_words(info, wrap_width) {
                lines.push(Line::from(vec![
                    Span::raw(" ".repeat(indent)),
                    Span::styled(row, styles::text_muted()),
                ]));
            }
        }

        if let Some(hint) = self.required {
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(format!("! {}", hint), styles::status_red()),
            ]));
        }

        lines
    }
}

impl Widget for QuestionView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines(area.width);
        Paragraph::new(lines).render(area, buf);
    }
}
