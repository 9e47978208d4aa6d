//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the bordered header (border + title row + border)
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the bordered error banner
pub const BANNER_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title bar
    pub header: Rect,

    /// Error banner; zero height when no banner is shown
    pub banner: Rect,

    /// Form or advice view
    pub body: Rect,

    /// Key hints
    pub footer: Rect,
}

/// Create the main screen layout
///
/// # Arguments
/// * `area` - Total screen area
/// * `show_banner` - Reserve rows for the error banner
pub fn create(area: Rect, show_banner: bool) -> ScreenAreas {
    let banner_height = if show_banner { BANNER_HEIGHT } else { 0 };

    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(banner_height),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        banner: chunks[1],
        body: chunks[2],
        footer: chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_without_banner() {
        let layout = create(Rect::new(0, 0, 80, 24), false);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.banner.height, 0);
        assert_eq!(layout.body.y, 3);
        assert_eq!(layout.body.height, 20); // 24 - 3 - 1
        assert_eq!(layout.footer.y, 23);
    }

    #[test]
    fn test_layout_with_banner() {
        let layout = create(Rect::new(0, 0, 80, 24), true);

        assert_eq!(layout.banner.y, 3);
        assert_eq!(layout.banner.height, 3);
        assert_eq!(layout.body.y, 6);
        assert_eq!(layout.body.height, 17);
    }

    #[test]
    fn test_layout_fills_width() {
        let layout = create(Rect::new(0, 0, 120, 40), true);
        assert_eq!(layout.header.width, 120);
        assert_eq!(layout.body.width, 120);
        assert_eq!(layout.footer.width, 120);
    }
}
