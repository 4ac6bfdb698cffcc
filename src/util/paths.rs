//! Path utilities for quizterm data directories

use std::path::PathBuf;

/// Get the base data directory (~/.quizterm)
pub fn data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".quizterm"))
        .unwrap_or_else(|| PathBuf::from(".quizterm"))
}

/// Get the config file path (~/.quizterm/config.toml)
pub fn config_path() -> PathBuf {
    data_dir().join("config.toml")
}

/// Get the logs directory (~/.quizterm/logs)
pub fn logs_dir() -> PathBuf {
    data_dir().join("logs")
}

/// Get the default log file path (~/.quizterm/logs/quizterm.log)
pub fn log_file_path() -> PathBuf {
    logs_dir().join("quizterm.log")
}
