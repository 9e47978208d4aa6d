//! Collapsible explanatory text attached to a question

/// Expand/collapse state of a question's info panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InfoPanel {
    expanded: bool,
}

impl InfoPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Flip between expanded and collapsed. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    pub fn collapse(&mut self) {
        self.expanded = false;
    }
}
