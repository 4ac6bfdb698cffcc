//! End-to-end quiz runs through the app and session

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use quizterm::client::{FetchError, MockQuestionSource};
use quizterm::quiz::{Action, QuizSession, SessionEvent, Status, TransitionError};
use quizterm::App;
use tokio::sync::mpsc;

use super::common::fixtures::{drive, two_questions};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

async fn loaded_app() -> App {
    let mut app = App::with_source(Arc::new(MockQuestionSource::with_questions(two_questions())));
    app.begin();
    assert!(app.pump_session_event().await.unwrap());
    assert_eq!(app.session().status(), Status::Ready);
    app
}

#[tokio::test]
async fn test_perfect_run_via_keys() {
    let mut app = loaded_app().await;

    app.handle_key(key(KeyCode::Enter)).unwrap();
    let state = app.session().state();
    assert_eq!(state.status, Status::Active);
    assert_eq!(state.seconds_remaining, Some(60));
    assert!(app.session().countdown_running());

    // Question 1: option 2 is correct
    app.handle_key(key(KeyCode::Char('2'))).unwrap();
    assert_eq!(app.session().state().points, 10);

    // Further option keys are ignored once answered
    app.handle_key(key(KeyCode::Char('1'))).unwrap();
    assert_eq!(app.session().state().answer, Some(1));
    assert_eq!(app.session().state().points, 10);

    app.handle_key(key(KeyCode::Enter)).unwrap();
    assert_eq!(app.session().state().index, 1);
    assert_eq!(app.session().state().answer, None);

    // Question 2: pick with the cursor
    app.handle_key(key(KeyCode::Down)).unwrap();
    app.handle_key(key(KeyCode::Up)).unwrap();
    assert_eq!(app.highlighted(), 0);
    app.handle_key(key(KeyCode::Enter)).unwrap();
    assert_eq!(app.session().state().points, 30);

    app.handle_key(key(KeyCode::Enter)).unwrap();
    let state = app.session().state();
    assert_eq!(state.status, Status::Finished);
    assert_eq!(state.highscore, 30);
    assert!(!app.session().countdown_running());
}

#[tokio::test]
async fn test_restart_keeps_questions_and_highscore() {
    let mut app = loaded_app().await;

    for code in [
        KeyCode::Enter,
        KeyCode::Char('2'),
        KeyCode::Enter,
        KeyCode::Char('2'),
        KeyCode::Enter,
        KeyCode::Char('r'),
    ] {
        app.handle_key(key(code)).unwrap();
    }

    let state = app.session().state();
    assert_eq!(state.status, Status::Ready);
    assert_eq!(state.num_questions(), 2);
    assert_eq!(state.points, 0);
    assert_eq!(state.highscore, 10);
    assert_eq!(state.index, 0);
    assert_eq!(state.answer, None);
    assert_eq!(state.seconds_remaining, None);
}

#[tokio::test]
async fn test_highscore_never_drops_across_runs() {
    let state = drive(vec![
        Action::DataReceived(two_questions()),
        Action::Start,
        Action::NewAnswer(1),
        Action::NextQuestion,
        Action::NewAnswer(0),
        Action::Finish,
        Action::Restart,
        Action::Start,
        Action::NewAnswer(0),
        Action::NextQuestion,
        Action::NewAnswer(1),
        Action::Finish,
    ]);

    assert_eq!(state.points, 0);
    assert_eq!(state.highscore, 30);
}

#[tokio::test]
async fn test_quit_key() {
    let mut app = loaded_app().await;
    assert!(!app.should_quit());
    app.handle_key(key(KeyCode::Char('q'))).unwrap();
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_fetch_failure_shows_error_and_ignores_keys() {
    let source = MockQuestionSource::failing(FetchError::Status {
        status: 503,
        url: "http://localhost:9000/questions".into(),
    });
    let mut app = App::with_source(Arc::new(source));
    app.begin();
    assert!(app.pump_session_event().await.unwrap());
    assert_eq!(app.session().status(), Status::Error);

    // Start is not offered in the error state
    app.handle_key(key(KeyCode::Enter)).unwrap();
    assert_eq!(app.session().status(), Status::Error);
}

#[tokio::test]
async fn test_empty_question_set_cannot_start() {
    let mut app = App::with_source(Arc::new(MockQuestionSource::with_questions(Vec::new())));
    app.begin();
    app.pump_session_event().await.unwrap();
    assert_eq!(app.session().status(), Status::Ready);

    // Start is not offered without questions
    app.handle_key(key(KeyCode::Enter)).unwrap();
    assert_eq!(app.session().status(), Status::Ready);
}

#[tokio::test]
async fn test_illegal_dispatch_is_rejected() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let source = Arc::new(MockQuestionSource::with_questions(Vec::new()));
    let mut session = QuizSession::new(source, tx);

    session.dispatch(Action::DataReceived(Vec::new())).unwrap();
    let err = session.dispatch(Action::Start).unwrap_err();
    assert_eq!(err, TransitionError::NoQuestions);
    assert_eq!(session.status(), Status::Ready);

    let err = session.dispatch(Action::Finish).unwrap_err();
    assert!(matches!(err, TransitionError::NotAllowed { .. }));
}

#[tokio::test(start_paused = true)]
async fn test_countdown_expiry_finishes_quiz() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let source = Arc::new(MockQuestionSource::with_questions(two_questions()));
    let mut session = QuizSession::new(source, tx).with_tick_period(Duration::from_millis(10));

    session.begin();
    let loaded = rx.recv().await.unwrap();
    session.handle_event(loaded).unwrap();
    session.dispatch(Action::Start).unwrap();
    session.dispatch(Action::NewAnswer(1)).unwrap();

    while session.status() == Status::Active {
        let event = rx.recv().await.unwrap();
        assert!(matches!(event, SessionEvent::CountdownTick { .. }));
        session.handle_event(event).unwrap();
    }

    let state = session.state();
    assert_eq!(state.status, Status::Finished);
    assert_eq!(state.seconds_remaining, Some(0));
    assert_eq!(state.points, 10);
    // Running out of time does not record a high score
    assert_eq!(state.highscore, 0);
    assert!(!session.countdown_running());
}

#[tokio::test(start_paused = true)]
async fn test_restarted_quiz_gets_a_fresh_clock() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let source = Arc::new(MockQuestionSource::with_questions(two_questions()));
    let mut session = QuizSession::new(source, tx).with_tick_period(Duration::from_millis(10));

    session.dispatch(Action::DataReceived(two_questions())).unwrap();
    session.dispatch(Action::Start).unwrap();
    for _ in 0..5 {
        let event = rx.recv().await.unwrap();
        session.handle_event(event).unwrap();
    }
    assert_eq!(session.state().seconds_remaining, Some(55));

    session.dispatch(Action::NewAnswer(1)).unwrap();
    session.dispatch(Action::NextQuestion).unwrap();
    session.dispatch(Action::NewAnswer(0)).unwrap();
    session.dispatch(Action::Finish).unwrap();

    // Ticks queued by the stopped countdown are dropped
    while let Ok(stale) = rx.try_recv() {
        session.handle_event(stale).unwrap();
    }
    assert_eq!(session.status(), Status::Finished);

    session.dispatch(Action::Restart).unwrap();
    session.dispatch(Action::Start).unwrap();
    assert_eq!(session.state().seconds_remaining, Some(60));

    let event = rx.recv().await.unwrap();
    session.handle_event(event).unwrap();
    assert_eq!(session.state().seconds_remaining, Some(59));
}
