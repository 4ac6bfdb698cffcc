use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use tokio::sync::mpsc;

use crate::client::{HttpQuestionSource, QuestionSource};
use crate::config::Config;
use crate::quiz::{Action, QuizSession, SessionEvent, Status};
use crate::ui::components::Spinner;
use crate::ui::input::{command_for_key, wrap_selection, Command};
use crate::ui::screen::QuizScreen;
use crate::ui::terminal_guard::TerminalGuard;

/// Spinner frame interval while loading
const SPINNER_INTERVAL: Duration = Duration::from_millis(100);

/// Main application state
pub struct App {
    /// Owner of the quiz state and its background work
    session: QuizSession,
    /// Fetch results and countdown ticks from the session
    session_rx: mpsc::UnboundedReceiver<SessionEvent>,
    /// Loading animation
    spinner: Spinner,
    /// Option under the cursor on the current question
    highlighted: usize,
    /// Whether the app should quit
    should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let source = HttpQuestionSource::new(&config.base_url, config.request_timeout)?;
        Ok(Self::with_source(Arc::new(source)))
    }

    pub fn with_source(source: Arc<dyn QuestionSource>) -> Self {
        let (event_tx, session_rx) = mpsc::unbounded_channel();
        Self {
            session: QuizSession::new(source, event_tx),
            session_rx,
            spinner: Spinner::new(),
            highlighted: 0,
            should_quit: false,
        }
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let mut guard = TerminalGuard::enter()?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let result = self.event_loop(&mut terminal).await;

        guard.cleanup()?;
        if let Err(e) = &result {
            tracing::error!(error = %e, "Quiz terminated");
        }
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let mut input = EventStream::new();
        let mut animation = tokio::time::interval(SPINNER_INTERVAL);

        self.begin();

        loop {
            terminal.draw(|f| self.draw(f))?;

            tokio::select! {
                maybe_event = input.next() => match maybe_event {
                    Some(Ok(Event::Key(key))) => self.handle_key(key)?,
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => self.should_quit = true,
                },

                // Fetch result and countdown ticks
                Some(event) = self.session_rx.recv() => {
                    self.session.handle_event(event)?;
                }

                _ = animation.tick(), if self.session.status() == Status::Loading => {
                    self.spinner.tick();
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Apply one key press. A rejected dispatch is a bug in the key mapping
    /// and is returned as an error, which ends the app.
    pub fn handle_key(&mut self, key: KeyEvent) -> anyhow::Result<()> {
        let view = self.session.view();
        let option_count = view.current_question().map_or(0, |q| q.options.len());
        let Some(command) = command_for_key(key, &view, self.highlighted) else {
            return Ok(());
        };

        match command {
            Command::Quit => self.should_quit = true,
            Command::MoveSelection(delta) => {
                self.highlighted = wrap_selection(self.highlighted, delta, option_count);
            }
            Command::Dispatch(action) => {
                let moves_on = matches!(
                    action,
                    Action::Start | Action::NextQuestion | Action::Restart
                );
                self.session.dispatch(action)?;
                if moves_on {
                    self.highlighted = 0;
                }
            }
        }

        Ok(())
    }

    /// Start the session's question fetch
    pub fn begin(&mut self) {
        self.session.begin();
    }

    /// Wait for the next background event and apply it.
    ///
    /// Returns `false` once no more events can arrive.
    pub async fn pump_session_event(&mut self) -> anyhow::Result<bool> {
        match self.session_rx.recv().await {
            Some(event) => {
                self.session.handle_event(event)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn draw(&self, f: &mut Frame) {
        let screen =
            QuizScreen::new(self.session.view(), &self.spinner).highlighted(self.highlighted);
        f.render_widget(screen, f.area());
    }
}
