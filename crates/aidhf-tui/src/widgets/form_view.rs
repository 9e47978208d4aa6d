//! The symptom form: all questions plus the submit and reset buttons
//!
//! Content taller than the available area scrolls so the focused element
//! stays visible.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

use super::question::QuestionView;

/// Submit/reset button row.
pub struct FormButtons<'a> {
    pub submit: &'a str,
    pub reset: &'a str,
    /// Replaces the submit label while a request is in flight
    pub pending: Option<String>,
    /// False while nothing has been answered; the reset button is dimmed
    pub reset_enabled: bool,
}

pub struct FormView<'a> {
    title: &'a str,
    questions: Vec<QuestionView<'a>>,
    buttons: FormButtons<'a>,
    /// Index into questions followed by submit, then reset
    focus: usize,
}

impl<'a> FormView<'a> {
    pub fn new(
        title: &'a str,
        questions: Vec<QuestionView<'a>>,
        buttons: FormButtons<'a>,
        focus: usize,
    ) -> Self {
        Self {
            title,
            questions,
            buttons,
            focus,
        }
    }

    fn button_line(&self) -> Line<'a> {
        let submit_index = self.questions.len();
        let reset_index = submit_index + 1;

        let button = |label: String, focused: bool, enabled: bool| {
            let style = if focused {
                styles::focused_selected()
            } else if enabled {
                styles::text_primary()
            } else {
                styles::text_muted()
            };
            Span::styled(format!("[ {} ]", label), style)
        };

        let submit = match &self.buttons.pending {
            Some(pending) => Span::styled(format!("  {}  ", pending), styles::status_yellow()),
            None => button(self.buttons.submit.to_string(), self.focus == submit_index, true),
        };

        Line::from(vec![
            Span::raw("  "),
            submit,
            Span::raw("   "),
            button(
                self.buttons.reset.to_string(),
                self.focus == reset_index,
                self.buttons.reset_enabled,
            ),
        ])
    }
}

/// First row to show so that rows `start..end` are visible in `height` rows.
pub(crate) fn scroll_offset(start: usize, end: usize, height: usize) -> usize {
    if height == 0 || end <= height {
        return 0;
    }
    let offset = end - height;
    offset.min(start)
}

impl Widget for FormView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true).title(Span::styled(
            format!(" {} ", self.title),
            styles::text_bright_bold(),
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut lines: Vec<Line> = Vec::new();
        let mut focus_span = (0, 0);

        for (i, question) in self.questions.iter().enumerate() {
            let start = lines.len();
            lines.extend(question.lines(inner.width));
            if i == self.focus {
                focus_span = (start, lines.len());
            }
            lines.push(Line::default());
        }

        let buttons_at = lines.len();
        lines.push(self.button_line());
        if self.focus >= self.questions.len() {
            focus_span = (buttons_at, buttons_at + 1);
        }

        let offset = scroll_offset(focus_span.0, focus_span.1, inner.height as usize);
        let offset = u16::try_from(offset).unwrap_or(u16::MAX);

        Paragraph::new(lines)
            .scroll((offset, 0))
            .render(inner, buf);
    }
}
