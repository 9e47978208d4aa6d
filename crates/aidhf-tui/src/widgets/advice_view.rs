//! Result screen showing the returned advice

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

pub struct AdviceView<'a> {
    title: &'a str,
    advice: &'a str,
    restart_label: &'a str,
}

impl<'a> AdviceView<'a> {
    pub fn new(title: &'a str, advice: &'a str, restart_label: &'a str) -> Self {
        Self {
            title,
            advice,
            restart_label,
        }
    }
}

impl Widget for AdviceView<'_> {
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

        let [text_area, button_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        let paragraphs: Vec<Line> = self
            .advice
            .lines()
            .map(|line| Line::styled(line, styles::status_green()))
            .collect();
        Paragraph::new(paragraphs)
            .wrap(Wrap { trim: false })
            .render(text_area, buf);

        let button = Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("[ {} ]", self.restart_label), styles::focused_selected()),
        ]);
        buf.set_line(button_area.x, button_area.y, &button, button_area.width);
    }
}
