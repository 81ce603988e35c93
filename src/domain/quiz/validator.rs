//! Input validation for single answers and complete answer sets.

use thiserror::Error;

use super::answers::{AnswerSet, ValidatedAnswerSet};
use super::field::FieldKey;

/// Why a complete answer set was rejected. Always names the first bad field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerSetError {
    #[error("Missing or empty value for {0}")]
    MissingField(FieldKey),

    #[error("Invalid numeric value for {field}")]
    InvalidValue { field: FieldKey, value: String },
}

impl AnswerSetError {
    /// The offending field.
    pub fn field(&self) -> FieldKey {
        match self {
            AnswerSetError::MissingField(field) => *field,
            AnswerSetError::InvalidValue { field, .. } => *field,
        }
    }
}

/// Parses a raw answer into a finite, non-negative number.
///
/// Surrounding whitespace is ignored. Anything else that does not parse is
/// rejected rather than coerced.
pub fn parse_field_value(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
        // "-0" parses to negative zero
        .map(|value| value + 0.0)
}

/// True iff `raw` is a usable answer for a numeric question.
pub fn is_valid_field_value(raw: &str) -> bool {
    parse_field_value(raw).is_some()
}

/// Checks every required field in question order.
pub fn validate_answer_set(set: &AnswerSet) -> Result<ValidatedAnswerSet, AnswerSetError> {
    let mut values = [0.0; 7];
    for key in FieldKey::ALL {
        let raw = match set.get(key) {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => return Err(AnswerSetError::MissingField(key)),
        };
        values[key.position()] =
            parse_field_value(raw).ok_or_else(|| AnswerSetError::InvalidValue {
                field: key,
                value: raw.to_string(),
            })?;
    }
    Ok(ValidatedAnswerSet::new(
        values,
        set.financial_goals().map(str::to_string),
    ))
}
