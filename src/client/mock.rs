//! In-memory question source for tests and demos

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use super::{FetchError, QuestionSource};
use crate::quiz::Question;

/// Returns a fixed result and counts how often it was asked.
#[derive(Debug, Clone)]
pub struct MockQuestionSource {
    result: Result<Vec<Question>, FetchError>,
    calls: Arc<AtomicUsize>,
}

impl MockQuestionSource {
    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            result: Ok(questions),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(error: FetchError) -> Self {
        Self {
            result: Err(error),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of fetches performed so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QuestionSource for MockQuestionSource {
    async fn fetch_questions(&self) -> Result<Vec<Question>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}
