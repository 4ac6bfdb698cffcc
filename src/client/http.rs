//! HTTP question source

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::instrument;

use super::{FetchError, QuestionSource};
use crate::quiz::Question;

/// Fetches questions with a single `GET {base_url}/questions`.
#[derive(Clone)]
pub struct HttpQuestionSource {
    url: String,
    client: Client,
}

impl HttpQuestionSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| FetchError::Client(err.to_string()))?;

        Ok(Self {
            url: questions_url(base_url),
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Join the base URL and the questions path without doubling the slash
pub fn questions_url(base_url: &str) -> String {
    format!("{}/questions", base_url.trim_end_matches('/'))
}

#[async_trait]
impl QuestionSource for HttpQuestionSource {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch_questions(&self) -> Result<Vec<Question>, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;

        let questions: Vec<Question> =
            serde_json::from_str(&text).map_err(|err| FetchError::Decode(err.to_string()))?;
        tracing::info!(count = questions.len(), "Fetched questions");
        Ok(questions)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
