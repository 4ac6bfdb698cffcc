//! Quiz session - the single owner of quiz state for one app run

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use super::countdown::{CountdownHandle, TICK_PERIOD};
use super::{Action, Effect, Question, QuizState, QuizView, Status, TransitionError};
use crate::client::{FetchError, QuestionSource};

/// Events produced by the session's background work, fed back through
/// [`QuizSession::handle_event`].
#[derive(Debug)]
pub enum SessionEvent {
    /// The one-time question fetch completed
    QuestionsLoaded(Result<Vec<Question>, FetchError>),
    /// A countdown tick from the countdown run identified by `generation`
    CountdownTick { generation: u64 },
}

/// Owns the quiz state, the question source and the live countdown.
///
/// State only changes through [`QuizSession::dispatch`]. The countdown runs
/// exactly while the quiz is active and is cancelled when the session is
/// dropped.
pub struct QuizSession {
    state: QuizState,
    source: Arc<dyn QuestionSource>,
    events: mpsc::UnboundedSender<SessionEvent>,
    countdown: Option<CountdownHandle>,
    /// Bumped for every countdown started
    generation: u64,
    tick_period: Duration,
    fetch_started: bool,
}

impl QuizSession {
    /// Create a session that reports background events on `events`
    pub fn new(
        source: Arc<dyn QuestionSource>,
        events: mpsc::UnboundedSender<SessionEvent>,
    ) -> Self {
        Self {
            state: QuizState::new(),
            source,
            events,
            countdown: None,
            generation: 0,
            tick_period: TICK_PERIOD,
            fetch_started: false,
        }
    }

    /// Override the countdown period (tests use short periods)
    pub fn with_tick_period(mut self, period: Duration) -> Self {
        self.tick_period = period;
        self
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn view(&self) -> QuizView<'_> {
        self.state.view()
    }

    pub fn status(&self) -> Status {
        self.state.status
    }

    pub fn countdown_running(&self) -> bool {
        self.countdown.is_some()
    }

    /// Kick off the question fetch. Only the first call has any effect.
    pub fn begin(&mut self) {
        if self.fetch_started {
            tracing::debug!("Question fetch already started");
            return;
        }
        self.fetch_started = true;
        self.run_effect(Effect::FetchQuestions);
    }

    /// Apply `action` and run whatever effect the transition implies.
    ///
    /// An error means the caller dispatched something the quiz cannot accept
    /// in its current state; the state is left untouched.
    pub fn dispatch(&mut self, action: Action) -> Result<(), TransitionError> {
        let name = action.name();
        let next = match self.state.apply(action) {
            Ok(next) => next,
            Err(err) => {
                tracing::error!(
                    action = name,
                    status = %self.state.status,
                    error = %err,
                    "Rejected quiz action"
                );
                return Err(err);
            }
        };

        if next.status != self.state.status {
            tracing::debug!(
                action = name,
                from = %self.state.status,
                to = %next.status,
                "Quiz status changed"
            );
        }

        let effect = Effect::between(&self.state, &next);
        self.state = next;
        if let Some(effect) = effect {
            self.run_effect(effect);
        }
        Ok(())
    }

    /// Translate a background event into the matching action
    pub fn handle_event(&mut self, event: SessionEvent) -> Result<(), TransitionError> {
        match event {
            SessionEvent::QuestionsLoaded(Ok(questions)) => {
                self.dispatch(Action::DataReceived(questions))
            }
            SessionEvent::QuestionsLoaded(Err(err)) => {
                tracing::warn!(
                    source = %self.source.describe(),
                    error = %err,
                    "Failed to load questions"
                );
                self.dispatch(Action::DataFailed)
            }
            SessionEvent::CountdownTick { generation } => {
                let current = self.countdown.as_ref().map(CountdownHandle::generation);
                if current == Some(generation) {
                    self.dispatch(Action::Tick)
                } else {
                    // Tick queued by a countdown that has since been stopped
                    tracing::debug!(generation, ?current, "Dropping stale countdown tick");
                    Ok(())
                }
            }
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::FetchQuestions => {
                let source = Arc::clone(&self.source);
                let events = self.events.clone();
                tracing::info!(source = %source.describe(), "Fetching questions");
                tokio::spawn(async move {
                    let result = source.fetch_questions().await;
                    if events.send(SessionEvent::QuestionsLoaded(result)).is_err() {
                        tracing::debug!("Session closed before questions arrived");
                    }
                });
            }
            Effect::StartCountdown => {
                self.stop_countdown();
                self.generation += 1;
                let events = self.events.clone();
                self.countdown = Some(CountdownHandle::spawn(
                    self.tick_period,
                    self.generation,
                    move |generation| {
                        events
                            .send(SessionEvent::CountdownTick { generation })
                            .is_ok()
                    },
                ));
            }
            Effect::StopCountdown => self.stop_countdown(),
        }
    }

    fn stop_countdown(&mut self) {
        if let Some(countdown) = self.countdown.take() {
            countdown.stop();
        }
    }
}
