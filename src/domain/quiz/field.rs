//! The fixed catalogue of quiz questions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of required numeric questions.
pub const REQUIRED_FIELD_COUNT: usize = FieldKey::ALL.len();

/// Wire key of the optional free-text goal.
pub const FINANCIAL_GOALS_KEY: &str = "financialGoals";

/// A required numeric quiz field, in question order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    Age,
    Income,
    Savings,
    Debt,
    Expenses,
    InvestmentRisk,
    Dependents,
}

impl FieldKey {
    /// All required fields in the order the quiz asks them.
    pub const ALL: [FieldKey; 7] = [
        FieldKey::Age,
        FieldKey::Income,
        FieldKey::Savings,
        FieldKey::Debt,
        FieldKey::Expenses,
        FieldKey::InvestmentRisk,
        FieldKey::Dependents,
    ];

    /// Returns the field asked at `position`, if any.
    pub fn at(position: usize) -> Option<FieldKey> {
        Self::ALL.get(position).copied()
    }

    /// Zero-based position of this field in the quiz.
    pub fn position(&self) -> usize {
        // ALL is declared in discriminant order
        *self as usize
    }

    /// Key used on the wire and in engine requests.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::Age => "age",
            FieldKey::Income => "income",
            FieldKey::Savings => "savings",
            FieldKey::Debt => "debt",
            FieldKey::Expenses => "expenses",
            FieldKey::InvestmentRisk => "investmentRisk",
            FieldKey::Dependents => "dependents",
        }
    }

    /// Question text shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            FieldKey::Age => "What is your age?",
            FieldKey::Income => "What is your monthly income?",
            FieldKey::Savings => "How much do you have in savings?",
            FieldKey::Debt => "What is your total debt?",
            FieldKey::Expenses => "What are your monthly expenses?",
            FieldKey::InvestmentRisk => {
                "On a scale of 1-10, how comfortable are you with investment risk?"
            }
            FieldKey::Dependents => "How many dependents do you have?",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a key is not one of the required quiz fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown quiz field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for FieldKey {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}
