//! Loading questions over HTTP into a running app

use std::sync::Arc;
use std::time::Duration;

use quizterm::quiz::Status;
use quizterm::{App, Config, HttpQuestionSource};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::common::fixtures::two_questions;
use super::common::terminal::{assert_screen_contains, render_view};

fn questions_body() -> serde_json::Value {
    json!([
        {
            "question": "Which is the most popular JavaScript framework?",
            "options": ["Angular", "React", "Svelte", "Vue"],
            "correctOption": 1,
            "points": 10
        },
        {
            "question": "Which company invented React?",
            "options": ["Facebook", "Google", "Apple"],
            "correctOption": 0,
            "points": 20
        }
    ])
}

#[tokio::test]
async fn test_app_loads_questions_from_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/questions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(questions_body()))
        .expect(1)
        .mount(&server)
        .await;

    let config = Config::default().with_base_url(server.uri());
    let mut app = App::new(&config).unwrap();
    app.begin();
    // A second begin must not hit the server again
    app.begin();
    assert!(app.pump_session_event().await.unwrap());

    let state = app.session().state();
    assert_eq!(state.status, Status::Ready);
    assert_eq!(&state.questions[..], &two_questions()[..]);
    assert_eq!(state.max_possible_points(), 30);

    let screen = render_view(app.session().view(), 0);
    assert_screen_contains(&screen, "Welcome to the quiz!");
}

#[tokio::test]
async fn test_server_error_moves_app_to_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/questions"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let source = HttpQuestionSource::new(&server.uri(), Duration::from_secs(5)).unwrap();
    let mut app = App::with_source(Arc::new(source));
    app.begin();
    assert!(app.pump_session_event().await.unwrap());
    assert_eq!(app.session().status(), Status::Error);

    let screen = render_view(app.session().view(), 0);
    assert_screen_contains(&screen, "Something went wrong");
}

#[tokio::test]
async fn test_malformed_payload_moves_app_to_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/questions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"questions": []})))
        .mount(&server)
        .await;

    let source = HttpQuestionSource::new(&server.uri(), Duration::from_secs(5)).unwrap();
    let mut app = App::with_source(Arc::new(source));
    app.begin();
    app.pump_session_event().await.unwrap();
    assert_eq!(app.session().status(), Status::Error);
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/questions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(questions_body())
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let source = HttpQuestionSource::new(&server.uri(), Duration::from_millis(200)).unwrap();
    let mut app = App::with_source(Arc::new(source));
    app.begin();
    app.pump_session_event().await.unwrap();
    assert_eq!(app.session().status(), Status::Error);
}
