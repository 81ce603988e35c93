//! Forces whatever the engine produced into exactly five recommendations.

use serde_json::Value;

use super::fallback::fallback_advice;
use super::result::{AdviceOrigin, AdviceResult, ADVICE_COUNT, FILLER_ADVICE};
use crate::domain::quiz::ValidatedAnswerSet;

/// Normalizes a decoded engine payload.
///
/// `None` or anything that is not a JSON array of strings yields the
/// fallback list for `answers`; a proper list goes through
/// [`normalize_list`].
pub fn normalize(raw: Option<Value>, answers: &ValidatedAnswerSet) -> AdviceResult {
    match raw.and_then(into_string_list) {
        Some(list) => normalize_list(list),
        None => fallback_advice(answers),
    }
}

/// Truncates or pads an engine list to exactly [`ADVICE_COUNT`] items.
pub fn normalize_list(list: Vec<String>) -> AdviceResult {
    let mut items = list.into_iter();
    let advice: [String; ADVICE_COUNT] = std::array::from_fn(|_| {
        items.next().unwrap_or_else(|| FILLER_ADVICE.to_string())
    });
    AdviceResult::from_exact(advice, AdviceOrigin::EngineDerived)
}

fn into_string_list(value: Value) -> Option<Vec<String>> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(text) => Some(text),
                _ => None,
            })
            .collect(),
        _ => None,
    }
}
