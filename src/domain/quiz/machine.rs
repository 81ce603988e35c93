//! Quiz aggregate - the question-by-question state machine.
//!
//! The machine walks the user through [`FieldKey::ALL`] in order and only lets
//! the cursor pass a question once its answer validates. Submission is split
//! in two so the async advice call can live in the application layer:
//! [`QuizStateMachine::begin_submission`] hands out the validated answers and
//! [`QuizStateMachine::record_results`] closes the round.
//!
//! # Invariants
//!
//! - stored numeric answers are always empty-free and valid
//! - the cursor never passes a field whose answer does not validate
//! - `ReadyToSubmit` is only reached with a complete, valid answer set
//! - `restart` is accepted from every state and wipes the answers

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::answers::{AnswerSet, ValidatedAnswerSet};
use super::errors::{QuizError, ADVANCE_REJECTED_MESSAGE, INVALID_VALUE_MESSAGE};
use super::field::{FieldKey, REQUIRED_FIELD_COUNT};
use super::status::QuizStatus;
use super::validator::{is_valid_field_value, validate_answer_set};
use crate::domain::foundation::{QuizSessionId, StateMachine, Timestamp};

/// Where the quiz currently is, with per-state data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum QuizState {
    Asking { position: usize },
    ReadyToSubmit,
    Submitting,
    ShowingResults,
    Failed { message: String },
}

impl QuizState {
    pub fn status(&self) -> QuizStatus {
        match self {
            QuizState::Asking { .. } => QuizStatus::Asking,
            QuizState::ReadyToSubmit => QuizStatus::ReadyToSubmit,
            QuizState::Submitting => QuizStatus::Submitting,
            QuizState::ShowingResults => QuizStatus::ShowingResults,
            QuizState::Failed { .. } => QuizStatus::Failed,
        }
    }

    /// Cursor value: `0..N` while asking, `N` once every answer is in,
    /// `N + 1` while results are displayed.
    pub fn position(&self) -> usize {
        match self {
            QuizState::Asking { position } => *position,
            QuizState::ReadyToSubmit | QuizState::Submitting | QuizState::Failed { .. } => {
                REQUIRED_FIELD_COUNT
            }
            QuizState::ShowingResults => REQUIRED_FIELD_COUNT + 1,
        }
    }
}

impl Default for QuizState {
    fn default() -> Self {
        QuizState::Asking { position: 0 }
    }
}

/// One user's pass through the quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizStateMachine {
    id: QuizSessionId,
    answers: AnswerSet,
    state: QuizState,
    last_error: Option<String>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl QuizStateMachine {
    /// Starts a fresh quiz at the first question.
    pub fn new(id: QuizSessionId) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            answers: AnswerSet::new(),
            state: QuizState::default(),
            last_error: None,
            created_at: now,
            updated_at: now,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &QuizSessionId {
        &self.id
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn status(&self) -> QuizStatus {
        self.state.status()
    }

    pub fn position(&self) -> usize {
        self.state.position()
    }

    /// Error text to show next to the current question, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// The question being asked, while in `Asking`.
    pub fn current_field(&self) -> Option<FieldKey> {
        match self.state {
            QuizState::Asking { position } => FieldKey::at(position),
            _ => None,
        }
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Commands
    // ─────────────────────────────────────────────────────────────────────────

    /// Stores or clears an answer.
    ///
    /// Blank input clears the field. Anything else must validate; a rejected
    /// value leaves the stored answer untouched and records an error message.
    pub fn set_answer(&mut self, key: FieldKey, raw: &str) -> Result<(), QuizError> {
        self.ensure_accepts_answers()?;

        let value = raw.trim();
        if value.is_empty() {
            self.answers.remove(key);
        } else if is_valid_field_value(value) {
            self.answers.set(key, value);
        } else {
            self.last_error = Some(INVALID_VALUE_MESSAGE.to_string());
            self.touch();
            return Err(QuizError::InvalidValue {
                field: key,
                value: raw.to_string(),
            });
        }

        self.last_error = None;
        self.touch();
        Ok(())
    }

    /// Stores the optional free-text goal. Blank text clears it.
    pub fn set_financial_goals(&mut self, text: &str) -> Result<(), QuizError> {
        self.ensure_accepts_answers()?;
        self.answers.set_financial_goals(Some(text.to_string()));
        self.touch();
        Ok(())
    }

    /// Moves past the current question if its answer validates.
    ///
    /// A rejected advance keeps the cursor in place and records an error
    /// message; the machine itself stays usable. The last advance re-checks
    /// the whole answer set and sends the cursor back to the first field that
    /// no longer validates.
    pub fn advance(&mut self) -> Result<(), QuizError> {
        let position = match self.state {
            QuizState::Asking { position } => position,
            _ => {
                return Err(QuizError::invalid_state(format!(
                    "cannot advance while {}",
                    self.status()
                )))
            }
        };
        let field = FieldKey::at(position)
            .ok_or_else(|| QuizError::corrupted(format!("cursor {} out of range", position)))?;

        let answered = self
            .answers
            .get(field)
            .is_some_and(is_valid_field_value);
        if !answered {
            self.last_error = Some(ADVANCE_REJECTED_MESSAGE.to_string());
            self.touch();
            return Err(QuizError::IncompleteAnswer { field });
        }

        let next = if position + 1 == REQUIRED_FIELD_COUNT {
            // earlier answers may have been cleared after the cursor passed them
            if let Err(err) = validate_answer_set(&self.answers) {
                let field = err.field();
                self.state = QuizState::Asking {
                    position: field.position(),
                };
                self.last_error = Some(ADVANCE_REJECTED_MESSAGE.to_string());
                self.touch();
                return Err(QuizError::IncompleteAnswer { field });
            }
            QuizState::ReadyToSubmit
        } else {
            QuizState::Asking {
                position: position + 1,
            }
        };
        self.transition(next)?;
        self.last_error = None;
        Ok(())
    }

    /// ReadyToSubmit -> Submitting, handing out the validated answers.
    ///
    /// If the stored answers no longer validate the quiz moves to `Failed`
    /// and `CorruptedState` is returned.
    pub fn begin_submission(&mut self) -> Result<ValidatedAnswerSet, QuizError> {
        self.transition(QuizState::Submitting)?;
        match validate_answer_set(&self.answers) {
            Ok(validated) => Ok(validated),
            Err(err) => {
                let message = err.to_string();
                self.record_failure(message.clone())?;
                Err(QuizError::corrupted(message))
            }
        }
    }

    /// Submitting -> ShowingResults. Fallback advice counts as a result.
    pub fn record_results(&mut self) -> Result<(), QuizError> {
        self.transition(QuizState::ShowingResults)
    }

    /// Submitting -> Failed, for unrecoverable local errors only.
    pub fn record_failure(&mut self, message: impl Into<String>) -> Result<(), QuizError> {
        let message = message.into();
        self.transition(QuizState::Failed {
            message: message.clone(),
        })?;
        self.last_error = Some(message);
        Ok(())
    }

    /// Back to the first question with no answers. Valid from any state.
    pub fn restart(&mut self) {
        debug!(quiz_id = %self.id, from = %self.status(), "restarting quiz");
        self.answers.clear();
        self.state = QuizState::default();
        self.last_error = None;
        self.touch();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────────────────

    fn ensure_accepts_answers(&self) -> Result<(), QuizError> {
        if self.status().accepts_answers() {
            Ok(())
        } else {
            Err(QuizError::invalid_state(format!(
                "answers cannot change while {}",
                self.status()
            )))
        }
    }

    fn transition(&mut self, next: QuizState) -> Result<(), QuizError> {
        self.status()
            .transition_to(next.status())
            .map_err(|e| QuizError::invalid_state(e.to_string()))?;
        self.state = next;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}
