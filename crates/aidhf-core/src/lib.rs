//! # aidhf-core - Core Domain Types
//!
//! Foundation crate for the AID-HF advice client. Provides the symptom record
//! model, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Symptoms (`symptoms`)
//! - [`SymptomRecord`] - Payload submitted to the advice endpoint
//! - [`Grade`] - Ordinal 0..=3 severity score
//! - [`YesNo`] - Binary answer
//! - [`SymptomField`] - The five questions, in display order
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum with one variant family per layer
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use aidhf_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod prelude;
pub mod symptoms;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result};
pub use symptoms::{Grade, SymptomField, SymptomRecord, YesNo};
pub use types::AppPhase;
