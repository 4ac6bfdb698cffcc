//! Question records as served by the quiz endpoint

use serde::{Deserialize, Serialize};

/// A single multiple-choice question.
///
/// Field names follow the wire format (`correctOption`), so a fetched array
/// deserializes directly into `Vec<Question>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Question text shown to the player
    pub question: String,
    /// Answer options in display order
    pub options: Vec<String>,
    /// Index into `options` of the correct answer
    pub correct_option: usize,
    /// Points awarded for a correct answer
    pub points: u32,
}

impl Question {
    pub fn new(
        question: impl Into<String>,
        options: Vec<String>,
        correct_option: usize,
        points: u32,
    ) -> Self {
        Self {
            question: question.into(),
            options,
            correct_option,
            points,
        }
    }

    /// Whether `option` is the correct answer
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_option
    }

    /// Points earned by choosing `option`
    pub fn credit_for(&self, option: usize) -> u32 {
        if self.is_correct(option) {
            self.points
        } else {
            0
        }
    }

    pub fn has_option(&self, option: usize) -> bool {
        option < self.options.len()
    }
}

/// Sum of point values across all questions, saturating at `u32::MAX`.
pub fn max_possible_points(questions: &[Question]) -> u32 {
    questions
        .iter()
        .fold(0u32, |total, q| total.saturating_add(q.points))
}
