//! Top-level quiz screen: header, status-specific body, key hints

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::quiz::{QuizView, Status};
use crate::ui::components::{
    render_key_hints, CountdownDisplay, ErrorScreen, FinishedScreen, Header, Loader, Progress,
    QuestionCard, Spinner, StartScreen, ACCENT_PRIMARY,
};

pub const TITLE: &str = "The Quiz";

/// Renders a [`QuizView`] for whatever status it is in
pub struct QuizScreen<'a> {
    view: QuizView<'a>,
    highlighted: usize,
    spinner: &'a Spinner,
}

impl<'a> QuizScreen<'a> {
    pub fn new(view: QuizView<'a>, spinner: &'a Spinner) -> Self {
        Self {
            view,
            highlighted: 0,
            spinner,
        }
    }

    /// Option the cursor is on (only meaningful before answering)
    pub fn highlighted(mut self, highlighted: usize) -> Self {
        self.highlighted = highlighted;
        self
    }

    fn render_active(&self, area: Rect, buf: &mut Buffer) {
        let Some(question) = self.view.current_question() else {
            return;
        };

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Progress
                Constraint::Length(1),
                Constraint::Min(4),    // Question
                Constraint::Length(1), // Timer + next
            ])
            .split(area);

        Progress::new(&self.view).render(rows[0], buf);

        QuestionCard::new(question, self.view.index + 1)
            .answer(self.view.answer)
            .highlighted(self.highlighted)
            .render(rows[2], buf);

        let footer = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(12), Constraint::Min(0)])
            .split(rows[3]);

        CountdownDisplay::new(self.view.seconds_remaining.unwrap_or(0)).render(footer[0], buf);

        if self.view.is_answered() {
            let label = if self.view.is_last_question() {
                "Finish ▸"
            } else {
                "Next ▸"
            };
            Paragraph::new(Line::from(Span::styled(
                label,
                Style::default()
                    .fg(ACCENT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Right)
            .render(footer[1], buf);
        }
    }
}

/// Key hints for the bottom bar
pub fn key_hints(view: &QuizView<'_>) -> Vec<(&'static str, &'static str)> {
    match view.status {
        Status::Loading | Status::Error => vec![("q", "Quit")],
        Status::Ready if view.num_questions == 0 => vec![("q", "Quit")],
        Status::Ready => vec![("Enter", "Start"), ("q", "Quit")],
        Status::Active if view.is_answered() => {
            let next = if view.is_last_question() {
                "Finish"
            } else {
                "Next"
            };
            vec![("Enter", next), ("q", "Quit")]
        }
        Status::Active => vec![
            ("1-9", "Answer"),
            ("↑↓", "Move"),
            ("Enter", "Choose"),
            ("q", "Quit"),
        ],
        Status::Finished => vec![("r", "Restart"), ("q", "Quit")],
    }
}

impl Widget for QuizScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Header
                Constraint::Min(3),    // Body
                Constraint::Length(1), // Key hints
            ])
            .split(area);

        Header::new(TITLE).render(chunks[0], buf);

        let body = chunks[1].inner(ratatui::layout::Margin {
            horizontal: 2,
            vertical: 1,
        });
        match self.view.status {
            Status::Loading => Loader::new(self.spinner).render(body, buf),
            Status::Ready => StartScreen::new(self.view.num_questions).render(body, buf),
            Status::Error => ErrorScreen.render(body, buf),
            Status::Active => self.render_active(body, buf),
            Status::Finished => FinishedScreen::new(&self.view).render(body, buf),
        }

        render_key_hints(chunks[2], buf, &key_hints(&self.view));
    }
}
