//! Header bar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

/// Title bar with the app name, a subtitle and the active language
pub struct MainHeader<'a> {
    title: &'a str,
    subtitle: &'a str,
    language: &'a str,
}

impl<'a> MainHeader<'a> {
    pub fn new(title: &'a str, subtitle: &'a str, language: &'a str) -> Self {
        Self {
            title,
            subtitle,
            language,
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::styled(format!(" {} ", self.title), styles::accent_bold()),
            Span::styled(self.subtitle, styles::text_secondary()),
        ]);
        buf.set_line(inner.x, inner.y, &title, inner.width);

        let language = format!("{} ", self.language);
        let width = language.chars().count() as u16;
        if width < inner.width {
            let x = inner.x + inner.width - width;
            buf.set_string(x, inner.y, language, styles::text_muted());
        }
    }
}
