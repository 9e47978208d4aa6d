//! Error banner shown after a failed submission

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

pub struct ErrorBannerView<'a> {
    message: &'a str,
    dismiss_hint: &'a str,
}

impl<'a> ErrorBannerView<'a> {
    pub fn new(message: &'a str, dismiss_hint: &'a str) -> Self {
        Self {
            message,
            dismiss_hint,
        }
    }
}

impl Widget for ErrorBannerView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::alert_block();
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let hint = format!("[Esc] {} ", self.dismiss_hint);
        let hint_width = hint.chars().count() as u16;
        let message_width = inner.width.saturating_sub(hint_width + 1);

        let message = Line::from(vec![
            Span::styled(" ✖ ", styles::status_red()),
            Span::styled(self.message, styles::text_primary()),
        ]);
        buf.set_line(inner.x, inner.y, &message, message_width);

        if hint_width < inner.width {
            let x = inner.x + inner.width - hint_width;
            buf.set_string(x, inner.y, hint, styles::text_muted());
        }
    }
}
