//! Application lifecycle types

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    /// Event loop is running
    #[default]
    Running,
    /// Quit requested, event loop will exit after the current iteration
    Quitting,
}
