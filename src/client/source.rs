use async_trait::async_trait;

use super::FetchError;
use crate::quiz::Question;

/// Somewhere the question set can be fetched from.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetch the full, ordered question set. Called once per session.
    async fn fetch_questions(&self) -> Result<Vec<Question>, FetchError>;

    /// Human-readable origin for logs
    fn describe(&self) -> String;
}
