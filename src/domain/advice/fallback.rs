//! Deterministic advice used when the scoring engine cannot answer.

use super::result::{AdviceOrigin, AdviceResult};
use crate::domain::quiz::ValidatedAnswerSet;

/// Share of monthly income the fallback suggests putting aside.
pub const SAVINGS_RATE: f64 = 0.2;

/// Monthly savings target, rounded to a whole amount.
pub fn monthly_savings_target(income: f64) -> f64 {
    (income * SAVINGS_RATE).round()
}

/// Builds the fallback list from the answers alone.
///
/// No I/O, no clock, no randomness: equal inputs give equal output.
pub fn fallback_advice(answers: &ValidatedAnswerSet) -> AdviceResult {
    AdviceResult::from_exact(
        [
            "Build an emergency fund that covers three to six months of expenses.".to_string(),
            format!(
                "Aim to save {:.0} monthly",
                monthly_savings_target(answers.income())
            ),
            "Review your expenses and cut the ones you do not need.".to_string(),
            "Create a budget and track it every month.".to_string(),
            "Consider long-term financial planning for your goals.".to_string(),
        ],
        AdviceOrigin::Fallback,
    )
}
