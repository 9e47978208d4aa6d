//! aidhf-client - Remote advice endpoint access for the AID-HF client
//!
//! Provides the reqwest-backed [`AdviceClient`] and the [`AdviceService`]
//! capability trait the app layer is written against.

pub mod advice;
pub mod service;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use advice::{advice_endpoint, AdviceClient, ADVICE_ROUTE, DEFAULT_TIMEOUT};
pub use service::{AdviceService, LocalAdviceService};
