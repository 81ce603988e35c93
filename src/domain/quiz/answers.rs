//! Answer sets, raw and validated.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::field::FieldKey;

/// Answers as the user typed them, keyed by field.
///
/// Values stay text until [`validate_answer_set`](super::validate_answer_set)
/// turns the whole set into a [`ValidatedAnswerSet`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    values: BTreeMap<FieldKey, String>,
    financial_goals: Option<String>,
}

impl AnswerSet {
    /// Creates an empty answer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value for a field, if one was entered.
    pub fn get(&self, key: FieldKey) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    /// Stores a raw value without checking it.
    pub fn set(&mut self, key: FieldKey, value: impl Into<String>) {
        self.values.insert(key, value.into());
    }

    /// Removes a field's value.
    pub fn remove(&mut self, key: FieldKey) {
        self.values.remove(&key);
    }

    /// Optional free-text goal.
    pub fn financial_goals(&self) -> Option<&str> {
        self.financial_goals.as_deref()
    }

    /// Sets or clears the free-text goal. Blank text clears it.
    pub fn set_financial_goals(&mut self, goals: Option<String>) {
        self.financial_goals = goals
            .map(|g| g.trim().to_string())
            .filter(|g| !g.is_empty());
    }

    /// Iterates over the entered values in question order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &str)> {
        self.values.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.financial_goals.is_none()
    }

    pub fn clear(&mut self) {
        self.values.clear();
        self.financial_goals = None;
    }
}

/// A complete answer set whose required values are all finite and non-negative.
///
/// Only constructed by the validator; immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedAnswerSet {
    values: [f64; 7],
    financial_goals: Option<String>,
}

impl ValidatedAnswerSet {
    pub(super) fn new(values: [f64; 7], financial_goals: Option<String>) -> Self {
        Self {
            values,
            financial_goals,
        }
    }

    /// Numeric value of a required field.
    pub fn value(&self, key: FieldKey) -> f64 {
        self.values[key.position()]
    }

    pub fn age(&self) -> f64 {
        self.value(FieldKey::Age)
    }

    pub fn income(&self) -> f64 {
        self.value(FieldKey::Income)
    }

    pub fn savings(&self) -> f64 {
        self.value(FieldKey::Savings)
    }

    pub fn debt(&self) -> f64 {
        self.value(FieldKey::Debt)
    }

    pub fn expenses(&self) -> f64 {
        self.value(FieldKey::Expenses)
    }

    pub fn investment_risk(&self) -> f64 {
        self.value(FieldKey::InvestmentRisk)
    }

    pub fn dependents(&self) -> f64 {
        self.value(FieldKey::Dependents)
    }

    pub fn financial_goals(&self) -> Option<&str> {
        self.financial_goals.as_deref()
    }
}
