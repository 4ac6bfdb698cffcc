//! Question fetch errors.

use thiserror::Error;

/// Why the question set could not be obtained.
///
/// The quiz treats every variant the same way (it parks in the error
/// screen); the distinction only matters for the log.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(String),

    /// Connection, DNS or timeout failure.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    /// The body was not a JSON array of questions.
    #[error("invalid question payload: {0}")]
    Decode(String),
}
