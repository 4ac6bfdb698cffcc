//! Side effects implied by a state transition

use super::{QuizState, Status};

/// Side effects that should be executed outside the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Request the question set (issued once per session)
    FetchQuestions,
    /// Arm the per-second countdown
    StartCountdown,
    /// Cancel the running countdown
    StopCountdown,
}

impl Effect {
    /// Effect implied by moving from `prev` to `next`, if any.
    ///
    /// The countdown lives exactly as long as the quiz is active.
    pub fn between(prev: &QuizState, next: &QuizState) -> Option<Effect> {
        match (prev.status, next.status) {
            (Status::Active, Status::Active) => None,
            (_, Status::Active) => Some(Effect::StartCountdown),
            (Status::Active, _) => Some(Effect::StopCountdown),
            _ => None,
        }
    }
}
