//! Read-only snapshot handed to the rendering layer

use super::{Question, Status};

/// Everything a screen needs to draw the quiz, and nothing it could use to
/// change it.
#[derive(Debug, Clone, Copy)]
pub struct QuizView<'a> {
    pub status: Status,
    pub questions: &'a [Question],
    pub index: usize,
    pub answer: Option<usize>,
    pub points: u32,
    pub highscore: u32,
    pub seconds_remaining: Option<u32>,
    pub num_questions: usize,
    pub max_possible_points: u32,
}

impl<'a> QuizView<'a> {
    pub fn current_question(&self) -> Option<&'a Question> {
        self.questions.get(self.index)
    }

    pub fn is_answered(&self) -> bool {
        self.answer.is_some()
    }

    pub fn is_last_question(&self) -> bool {
        self.index + 1 == self.num_questions
    }

    /// Score as a whole percentage of the maximum
    pub fn percentage(&self) -> u32 {
        if self.max_possible_points == 0 {
            return 0;
        }
        ((u64::from(self.points) * 100) / u64::from(self.max_possible_points)) as u32
    }

    /// Countdown formatted as MM:SS
    pub fn countdown_display(&self) -> String {
        let secs = self.seconds_remaining.unwrap_or(0);
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }
}
