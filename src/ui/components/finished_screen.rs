use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::{centered, ACCENT_PRIMARY, ACCENT_SUCCESS, BORDER_DEFAULT, TEXT_BRIGHT, TEXT_SECONDARY};
use crate::quiz::QuizView;

/// Results of the finished attempt
pub struct FinishedScreen<'a> {
    view: &'a QuizView<'a>,
}

impl<'a> FinishedScreen<'a> {
    pub fn new(view: &'a QuizView<'a>) -> Self {
        Self { view }
    }

    /// Short verdict for a score percentage
    pub fn verdict(percentage: u32) -> &'static str {
        match percentage {
            100 => "Perfect score!",
            80..=99 => "Great job!",
            50..=79 => "Not bad.",
            1..=49 => "Keep practising.",
            _ => "Better luck next time.",
        }
    }
}

impl Widget for FinishedScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let percentage = self.view.percentage();
        let block = Block::default()
            .title(" Results ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER_DEFAULT));

        let lines = vec![
            Line::from(Span::styled(
                Self::verdict(percentage),
                Style::default()
                    .fg(ACCENT_SUCCESS)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("You scored ", Style::default().fg(TEXT_SECONDARY)),
                Span::styled(
                    format!("{}", self.view.points),
                    Style::default()
                        .fg(TEXT_BRIGHT)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(
                        " out of {} ({}%)",
                        self.view.max_possible_points, percentage
                    ),
                    Style::default().fg(TEXT_SECONDARY),
                ),
            ]),
            Line::from(Span::styled(
                format!("Highscore: {} points", self.view.highscore),
                Style::default().fg(ACCENT_PRIMARY),
            )),
        ];

        let width = area.width.min(56);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .render(centered(area, width, 6), buf);
    }
}
