mod settings;

pub use settings::{Config, ConfigError, DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS};
