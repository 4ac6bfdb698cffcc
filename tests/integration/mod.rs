//! Integration tests for quizterm
//!
//! These tests verify that multiple components work together correctly.

#[path = "../common/mod.rs"]
pub mod common;

pub mod question_fetch;
pub mod quiz_flow;
pub mod screens;
