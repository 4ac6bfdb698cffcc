//! Quiz progression state machine

use std::fmt;
use std::sync::Arc;

use super::question::max_possible_points;
use super::{Action, Question, QuizView, TransitionError};

/// Countdown budget per question, in seconds
pub const SECS_PER_QUESTION: u32 = 30;

/// Phase of the quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    /// Waiting for the question fetch to complete
    #[default]
    Loading,
    /// Questions loaded, waiting for the player to start
    Ready,
    /// The fetch failed; nothing else can happen in this session
    Error,
    /// An attempt is in progress and the countdown is running
    Active,
    /// The attempt is over, results are shown
    Finished,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Loading => "loading",
            Status::Ready => "ready",
            Status::Error => "error",
            Status::Active => "active",
            Status::Finished => "finished",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete state of one quiz session.
///
/// Values are never mutated in place: [`QuizState::apply`] builds the next
/// state from the current one. `questions` is shared so that producing a new
/// state per tick does not copy the question set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizState {
    pub questions: Arc<[Question]>,
    pub status: Status,
    /// Position of the current question (0-based)
    pub index: usize,
    /// Option chosen on the current question, if any
    pub answer: Option<usize>,
    /// Score of the current attempt
    pub points: u32,
    /// Best score seen this session
    pub highscore: u32,
    /// Countdown value; `None` until the first `Start`
    pub seconds_remaining: Option<u32>,
}

impl Default for QuizState {
    fn default() -> Self {
        Self {
            questions: Arc::from(Vec::new()),
            status: Status::Loading,
            index: 0,
            answer: None,
            points: 0,
            highscore: 0,
            seconds_remaining: None,
        }
    }
}

impl QuizState {
    /// Initial state: loading, nothing fetched yet
    pub fn new() -> Self {
        Self::default()
    }

    pub fn num_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn max_possible_points(&self) -> u32 {
        max_possible_points(&self.questions)
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.index)
    }

    pub fn is_last_question(&self) -> bool {
        self.index + 1 == self.questions.len()
    }

    /// Borrowed snapshot for the rendering layer
    pub fn view(&self) -> QuizView<'_> {
        QuizView {
            status: self.status,
            questions: &self.questions,
            index: self.index,
            answer: self.answer,
            points: self.points,
            highscore: self.highscore,
            seconds_remaining: self.seconds_remaining,
            num_questions: self.num_questions(),
            max_possible_points: self.max_possible_points(),
        }
    }

    /// Compute the state that follows `action`.
    ///
    /// Actions that are not legal in the current status are rejected rather
    /// than ignored. `Error` accepts nothing.
    pub fn apply(&self, action: Action) -> Result<Self, TransitionError> {
        match (self.status, action) {
            (Status::Loading, Action::DataReceived(questions)) => Ok(Self {
                questions: questions.into(),
                status: Status::Ready,
                ..self.clone()
            }),
            (Status::Loading, Action::DataFailed) => Ok(Self {
                status: Status::Error,
                ..self.clone()
            }),
            (Status::Ready, Action::Start) => self.start(),
            (Status::Active, Action::NewAnswer(option)) => self.answer_with(option),
            (Status::Active, Action::NextQuestion) => self.next_question(),
            (Status::Active, Action::Tick) => Ok(self.tick()),
            (Status::Active, Action::Finish) => self.finish(),
            (Status::Finished, Action::Restart) => Ok(Self {
                questions: Arc::clone(&self.questions),
                status: Status::Ready,
                highscore: self.highscore,
                ..Self::default()
            }),
            (status, action) => Err(TransitionError::NotAllowed {
                action: action.name(),
                status,
            }),
        }
    }

    fn start(&self) -> Result<Self, TransitionError> {
        if self.questions.is_empty() {
            return Err(TransitionError::NoQuestions);
        }
        let count = u32::try_from(self.questions.len()).unwrap_or(u32::MAX);
        Ok(Self {
            status: Status::Active,
            seconds_remaining: Some(count.saturating_mul(SECS_PER_QUESTION)),
            ..self.clone()
        })
    }

    fn answer_with(&self, option: usize) -> Result<Self, TransitionError> {
        let question = self
            .current_question()
            .ok_or(TransitionError::WrongQuestion {
                action: "new_answer",
                index: self.index,
                count: self.questions.len(),
            })?;
        if !question.has_option(option) {
            return Err(TransitionError::OptionOutOfRange {
                option,
                count: question.options.len(),
            });
        }

        // Re-answering replaces the earlier choice, so its credit is withdrawn first
        let withdrawn = self.answer.map(|prev| question.credit_for(prev)).unwrap_or(0);
        let points = self
            .points
            .saturating_sub(withdrawn)
            .saturating_add(question.credit_for(option));

        Ok(Self {
            answer: Some(option),
            points,
            ..self.clone()
        })
    }

    fn next_question(&self) -> Result<Self, TransitionError> {
        if self.answer.is_none() {
            return Err(TransitionError::Unanswered { index: self.index });
        }
        if self.index + 1 >= self.questions.len() {
            return Err(TransitionError::WrongQuestion {
                action: "next_question",
                index: self.index,
                count: self.questions.len(),
            });
        }
        Ok(Self {
            index: self.index + 1,
            answer: None,
            ..self.clone()
        })
    }

    fn tick(&self) -> Self {
        match self.seconds_remaining {
            Some(remaining) if remaining > 0 => Self {
                seconds_remaining: Some(remaining - 1),
                ..self.clone()
            },
            // Out of time: end the attempt without going below zero.
            // Only an explicit finish records a high score.
            _ => Self {
                status: Status::Finished,
                seconds_remaining: Some(0),
                ..self.clone()
            },
        }
    }

    fn finish(&self) -> Result<Self, TransitionError> {
        if !self.is_last_question() {
            return Err(TransitionError::WrongQuestion {
                action: "finish",
                index: self.index,
                count: self.questions.len(),
            });
        }
        if self.answer.is_none() {
            return Err(TransitionError::Unanswered { index: self.index });
        }
        Ok(Self {
            status: Status::Finished,
            highscore: self.highscore.max(self.points),
            ..self.clone()
        })
    }
}

/// Free-function form of [`QuizState::apply`]
pub fn reduce(state: &QuizState, action: Action) -> Result<QuizState, TransitionError> {
    state.apply(action)
}
