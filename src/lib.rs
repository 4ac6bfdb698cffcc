pub mod client;
pub mod config;
pub mod quiz;
pub mod ui;
pub mod util;

pub use client::{FetchError, HttpQuestionSource, QuestionSource};
pub use config::Config;
pub use quiz::{Action, Question, QuizSession, QuizState, QuizView, Status, TransitionError};
pub use ui::App;
