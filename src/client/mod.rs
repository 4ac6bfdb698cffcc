//! Question sources

mod error;
pub mod http;
pub mod mock;
mod source;

pub use error::FetchError;
pub use http::{questions_url, HttpQuestionSource};
pub use mock::MockQuestionSource;
pub use source::QuestionSource;
