//! Advice service capability
//!
//! The app layer depends on this trait rather than on [`AdviceClient`] so the
//! HTTP client can be swapped for a scripted fake in tests.

use aidhf_core::prelude::*;
use aidhf_core::SymptomRecord;

use crate::advice::AdviceClient;

/// Obtain advice for a symptom record.
///
/// `AdviceService` is the `Send` variant used by the engine, which runs each
/// request on a spawned tokio task.
#[trait_variant::make(AdviceService: Send)]
pub trait LocalAdviceService {
    /// Exactly one request/response exchange per call.
    async fn get_advice(&self, record: &SymptomRecord) -> Result<String>;
}

impl AdviceService for AdviceClient {
    async fn get_advice(&self, record: &SymptomRecord) -> Result<String> {
        self.request_advice(record).await
    }
}
