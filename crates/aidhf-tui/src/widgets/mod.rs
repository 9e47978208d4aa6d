//! Widget components for the TUI

mod advice_view;
mod error_banner;
mod form_view;
mod header;
mod key_hints;
mod question;
pub mod text;

pub use advice_view::AdviceView;
pub use error_banner::ErrorBannerView;
pub use form_view::{FormButtons, FormView};
pub use header::MainHeader;
pub use key_hints::KeyHints;
pub use question::{OptionChip, QuestionView};
