//! Prelude for common imports used throughout all AID-HF crates

pub use crate::error::{Error, Result};
pub use tracing::{debug, error, info, instrument, trace, warn};
