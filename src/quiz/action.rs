//! Actions accepted by the quiz state machine
//!
//! Every change to a [`QuizState`](super::QuizState) is expressed as one of
//! these. Side effects (fetching, ticking) happen elsewhere and report back
//! through `DataReceived`/`DataFailed`/`Tick`.

use std::str::FromStr;

use super::{Question, TransitionError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Questions arrived from the source
    DataReceived(Vec<Question>),
    /// The fetch failed; the quiz is unavailable
    DataFailed,
    /// Begin an attempt and arm the countdown
    Start,
    /// The player picked an option on the current question
    NewAnswer(usize),
    /// Advance to the following question
    NextQuestion,
    /// One second of the countdown elapsed
    Tick,
    /// The last question was answered and the player ended the attempt
    Finish,
    /// Go back to the start screen, keeping questions and high score
    Restart,
}

impl Action {
    /// Stable name used in logs and error messages
    pub fn name(&self) -> &'static str {
        match self {
            Action::DataReceived(_) => "data_received",
            Action::DataFailed => "data_failed",
            Action::Start => "start",
            Action::NewAnswer(_) => "new_answer",
            Action::NextQuestion => "next_question",
            Action::Tick => "tick",
            Action::Finish => "finish",
            Action::Restart => "restart",
        }
    }
}

impl Action {
    /// Parse an action from its [`name`](Action::name).
    ///
    /// `new_answer` takes its option as `new_answer:<index>`. `data_received`
    /// carries a question list and cannot be named.
    pub fn from_name(name: &str) -> Result<Self, TransitionError> {
        let unknown = || TransitionError::UnknownAction {
            name: name.to_string(),
        };

        match name {
            "data_failed" => Ok(Action::DataFailed),
            "start" => Ok(Action::Start),
            "next_question" => Ok(Action::NextQuestion),
            "tick" => Ok(Action::Tick),
            "finish" => Ok(Action::Finish),
            "restart" => Ok(Action::Restart),
            other => {
                let option = other.strip_prefix("new_answer:").ok_or_else(unknown)?;
                option
                    .parse()
                    .map(Action::NewAnswer)
                    .map_err(|_| unknown())
            }
        }
    }
}

impl FromStr for Action {
    type Err = TransitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::from_name(s)
    }
}
