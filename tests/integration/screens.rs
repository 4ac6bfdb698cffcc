//! Rendered screen content for each quiz status

use quizterm::quiz::{Action, QuizState};

use super::common::fixtures::{drive, two_questions};
use super::common::terminal::{assert_screen_contains, render_view, render_view_sized};

#[test]
fn test_loading_screen() {
    let state = QuizState::new();
    let screen = render_view(state.view(), 0);

    assert_screen_contains(&screen, "The Quiz");
    assert_screen_contains(&screen, "Loading questions...");
    assert_screen_contains(&screen, "Quit");
}

#[test]
fn test_error_screen() {
    let state = drive(vec![Action::DataFailed]);
    let screen = render_view(state.view(), 0);

    assert_screen_contains(&screen, "Something went wrong, the quiz is unavailable.");
    assert!(!screen.contains("Start"));
}

#[test]
fn test_start_screen() {
    let state = drive(vec![Action::DataReceived(two_questions())]);
    let screen = render_view(state.view(), 0);

    assert_screen_contains(&screen, "Welcome to the quiz!");
    assert_screen_contains(
        &screen,
        "2 questions to test your knowledge, 1 minutes on the clock",
    );
    assert_screen_contains(&screen, "Press Enter to start");
}

#[test]
fn test_active_screen_before_answer() {
    let state = drive(vec![Action::DataReceived(two_questions()), Action::Start]);
    let screen = render_view(state.view(), 0);

    assert_screen_contains(&screen, "Question 1 / 2");
    assert_screen_contains(&screen, "0 / 30 points");
    assert_screen_contains(&screen, "Which is the most popular JavaScript framework?");
    assert_screen_contains(&screen, "1. Angular");
    assert_screen_contains(&screen, "4. Vue");
    assert_screen_contains(&screen, "01:00");
    assert!(!screen.contains("Next"));
}

#[test]
fn test_active_screen_after_answer() {
    let state = drive(vec![
        Action::DataReceived(two_questions()),
        Action::Start,
        Action::NewAnswer(1),
    ]);
    let screen = render_view(state.view(), 0);

    assert_screen_contains(&screen, "10 / 30 points");
    assert_screen_contains(&screen, "Next");
    assert!(!screen.contains("Finish"));
}

#[test]
fn test_last_question_offers_finish() {
    let state = drive(vec![
        Action::DataReceived(two_questions()),
        Action::Start,
        Action::NewAnswer(1),
        Action::NextQuestion,
        Action::NewAnswer(2),
    ]);
    let screen = render_view(state.view(), 0);

    assert_screen_contains(&screen, "Question 2 / 2");
    assert_screen_contains(&screen, "Which company invented React?");
    assert_screen_contains(&screen, "Finish");
}

#[test]
fn test_countdown_display_counts_down() {
    let mut actions = vec![Action::DataReceived(two_questions()), Action::Start];
    actions.extend(std::iter::repeat(Action::Tick).take(35));
    let state = drive(actions);
    let screen = render_view(state.view(), 0);

    assert_screen_contains(&screen, "00:25");
}

#[test]
fn test_finished_screen() {
    let state = drive(vec![
        Action::DataReceived(two_questions()),
        Action::Start,
        Action::NewAnswer(1),
        Action::NextQuestion,
        Action::NewAnswer(1),
        Action::Finish,
    ]);
    let screen = render_view(state.view(), 0);

    assert_screen_contains(&screen, "You scored 10 out of 30 (33%)");
    assert_screen_contains(&screen, "Highscore: 10 points");
    assert_screen_contains(&screen, "Keep practising.");
    assert_screen_contains(&screen, "Restart");
}

#[test]
fn test_small_terminal_does_not_panic() {
    let state = drive(vec![Action::DataReceived(two_questions()), Action::Start]);
    let _ = render_view_sized(state.view(), 3, 20, 6);
}
