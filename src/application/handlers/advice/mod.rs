//! Advice handlers - turning a validated answer set into five recommendations.

mod advice_client;

pub use advice_client::{AdviceClient, DEFAULT_TIMEOUT};
