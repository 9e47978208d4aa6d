//! Top-level screen selection
//!
//! The shell holds at most one advice text. Which screen is visible follows
//! from that alone, so the form and the advice view are never shown together.

/// Which top-level view is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Filling in the symptom form
    Collecting,
    /// Reading the returned advice
    Reviewing,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootShell {
    advice: Option<String>,
}

impl RootShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_advice(&mut self, advice: impl Into<String>) {
        self.advice = Some(advice.into());
    }

    pub fn clear_advice(&mut self) {
        self.advice = None;
    }

    pub fn advice(&self) -> Option<&str> {
        self.advice.as_deref()
    }

    pub fn screen(&self) -> Screen {
        match self.advice {
            Some(_) => Screen::Reviewing,
            None => Screen::Collecting,
        }
    }
}
