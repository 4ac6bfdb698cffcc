//! Shared test utilities for quizterm
//!
//! - Question fixtures and a helper to drive the state machine
//! - TUI terminal testing helpers
