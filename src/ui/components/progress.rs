use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Widget},
};

use super::{ACCENT_PRIMARY, BG_SURFACE, TEXT_BRIGHT, TEXT_SECONDARY};
use crate::quiz::QuizView;

/// Progress gauge plus question and points counters
pub struct Progress<'a> {
    view: &'a QuizView<'a>,
}

impl<'a> Progress<'a> {
    pub fn new(view: &'a QuizView<'a>) -> Self {
        Self { view }
    }

    /// Fraction of the quiz done; an answered question counts as done
    pub fn ratio(view: &QuizView<'_>) -> f64 {
        if view.num_questions == 0 {
            return 0.0;
        }
        let done = view.index + usize::from(view.is_answered());
        (done as f64 / view.num_questions as f64).clamp(0.0, 1.0)
    }
}

impl Widget for Progress<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        Gauge::default()
            .gauge_style(Style::default().fg(ACCENT_PRIMARY).bg(BG_SURFACE))
            .ratio(Self::ratio(self.view))
            .label("")
            .render(rows[0], buf);

        let counters = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);

        Paragraph::new(Line::from(vec![
            Span::styled("Question ", Style::default().fg(TEXT_SECONDARY)),
            Span::styled(
                format!("{}", self.view.index + 1),
                Style::default()
                    .fg(TEXT_BRIGHT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" / {}", self.view.num_questions),
                Style::default().fg(TEXT_SECONDARY),
            ),
        ]))
        .render(counters[0], buf);

        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("{}", self.view.points),
                Style::default()
                    .fg(TEXT_BRIGHT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" / {} points", self.view.max_possible_points),
                Style::default().fg(TEXT_SECONDARY),
            ),
        ]))
        .alignment(ratatui::layout::Alignment::Right)
        .render(counters[1], buf);
    }
}
