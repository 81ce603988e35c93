//! Quiz module - questions, answers, validation and the quiz state machine.

mod answers;
mod errors;
mod field;
mod machine;
mod status;
mod validator;

pub use answers::{AnswerSet, ValidatedAnswerSet};
pub use errors::{QuizError, ADVANCE_REJECTED_MESSAGE, INVALID_VALUE_MESSAGE};
pub use field::{FieldKey, UnknownField, FINANCIAL_GOALS_KEY, REQUIRED_FIELD_COUNT};
pub use machine::{QuizState, QuizStateMachine};
pub use status::QuizStatus;
pub use validator::{
    is_valid_field_value, parse_field_value, validate_answer_set, AnswerSetError,
};
