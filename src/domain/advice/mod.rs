//! Advice module - the five-item result contract, its normalizer and the
//! deterministic fallback.

mod fallback;
mod normalizer;
mod result;

pub use fallback::{fallback_advice, monthly_savings_target, SAVINGS_RATE};
pub use normalizer::{normalize, normalize_list};
pub use result::{AdviceOrigin, AdviceResult, ADVICE_COUNT, FILLER_ADVICE};
