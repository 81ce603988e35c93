//! QuizStatus enum for tracking the lifecycle of a quiz.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Lifecycle status of a quiz, without the per-state data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuizStatus {
    #[default]
    Asking,
    ReadyToSubmit,
    Submitting,
    ShowingResults,
    Failed,
}

impl QuizStatus {
    /// Returns true while answers may still be edited.
    pub fn accepts_answers(&self) -> bool {
        matches!(self, QuizStatus::Asking)
    }
}

impl StateMachine for QuizStatus {
    /// Restart is allowed from every state and bypasses this table.
    fn valid_transitions(&self) -> Vec<Self> {
        use QuizStatus::*;
        match self {
            Asking => vec![Asking, ReadyToSubmit],
            ReadyToSubmit => vec![Submitting],
            Submitting => vec![ShowingResults, Failed],
            ShowingResults => vec![],
            Failed => vec![],
        }
    }
}

impl fmt::Display for QuizStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QuizStatus::Asking => "asking",
            QuizStatus::ReadyToSubmit => "ready_to_submit",
            QuizStatus::Submitting => "submitting",
            QuizStatus::ShowingResults => "showing_results",
            QuizStatus::Failed => "failed",
        };
        write!(f, "{}", s)
    }
}
