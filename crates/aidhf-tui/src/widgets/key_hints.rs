//! Footer line of key bindings

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

/// `key label` pairs rendered on one line
pub struct KeyHints<'a> {
    hints: Vec<(&'a str, String)>,
}

impl<'a> KeyHints<'a> {
    pub fn new() -> Self {
        Self { hints: Vec::new() }
    }

    pub fn hint(mut self, key: &'a str, label: impl Into<String>) -> Self {
        self.hints.push((key, label.into()));
        self
    }
}

impl Default for KeyHints<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for KeyHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let mut spans = vec![Span::raw(" ")];
        for (i, (key, label)) in self.hints.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", styles::text_muted()));
            }
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(label, styles::text_muted()));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
