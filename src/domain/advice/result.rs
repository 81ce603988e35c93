//! The fixed-size advice list handed to the user.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Every result carries exactly this many recommendations.
pub const ADVICE_COUNT: usize = 5;

/// Filler used to pad short engine replies.
pub const FILLER_ADVICE: &str =
    "Consider consulting with a financial advisor for more personalized advice.";

/// Where a result's text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdviceOrigin {
    EngineDerived,
    Fallback,
}

/// Exactly [`ADVICE_COUNT`] recommendation strings plus their origin.
///
/// Deserialization re-checks the length, so a tampered payload is rejected
/// instead of producing a short list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AdviceResultRecord")]
pub struct AdviceResult {
    advice: Vec<String>,
    origin: AdviceOrigin,
}

impl AdviceResult {
    /// Builds a result from exactly five items.
    pub(crate) fn from_exact(
        advice: [String; ADVICE_COUNT],
        origin: AdviceOrigin,
    ) -> Self {
        Self {
            advice: advice.into(),
            origin,
        }
    }

    pub fn advice(&self) -> &[String] {
        &self.advice
    }

    pub fn origin(&self) -> AdviceOrigin {
        self.origin
    }

    pub fn is_fallback(&self) -> bool {
        self.origin == AdviceOrigin::Fallback
    }

    pub fn into_advice(self) -> Vec<String> {
        self.advice
    }
}

#[derive(Deserialize)]
struct AdviceResultRecord {
    advice: Vec<String>,
    origin: AdviceOrigin,
}

impl TryFrom<AdviceResultRecord> for AdviceResult {
    type Error = ValidationError;

    fn try_from(record: AdviceResultRecord) -> Result<Self, Self::Error> {
        let count = record.advice.len();
        let advice: [String; ADVICE_COUNT] = record.advice.try_into().map_err(|_| {
            ValidationError::invalid_format(
                "advice",
                format!("expected {} items, found {}", ADVICE_COUNT, count),
            )
        })?;
        Ok(Self::from_exact(advice, record.origin))
    }
}
