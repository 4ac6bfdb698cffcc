//! Transition errors

use thiserror::Error;

use super::Status;

/// A dispatched action the state machine cannot apply.
///
/// These indicate a bug in whatever drove the dispatch, never a player
/// mistake, so callers should treat them as fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("unknown action `{name}`")]
    UnknownAction { name: String },
    #[error("action `{action}` is not valid while the quiz is {status}")]
    NotAllowed {
        action: &'static str,
        status: Status,
    },
    #[error("cannot start a quiz with no questions")]
    NoQuestions,
    #[error("option {option} is out of range for a question with {count} options")]
    OptionOutOfRange { option: usize, count: usize },
    #[error("question {index} has not been answered yet")]
    Unanswered { index: usize },
    #[error("`{action}` is not valid on question {index} of {count}")]
    WrongQuestion {
        action: &'static str,
        index: usize,
        count: usize,
    },
}
