use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::{centered, ACCENT_PRIMARY, TEXT_BRIGHT, TEXT_SECONDARY};
use crate::quiz::SECS_PER_QUESTION;

/// Welcome screen shown once questions are loaded
pub struct StartScreen {
    num_questions: usize,
}

impl StartScreen {
    pub fn new(num_questions: usize) -> Self {
        Self { num_questions }
    }
}

impl Widget for StartScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let total_secs = self.num_questions as u64 * u64::from(SECS_PER_QUESTION);
        let lines = vec![
            Line::from(Span::styled(
                "Welcome to the quiz!",
                Style::default()
                    .fg(TEXT_BRIGHT)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!(
                    "{} questions to test your knowledge, {} minutes on the clock",
                    self.num_questions,
                    total_secs.div_ceil(60)
                ),
                Style::default().fg(TEXT_SECONDARY),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press Enter to start",
                Style::default().fg(ACCENT_PRIMARY),
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(centered(area, area.width, 5), buf);
    }
}
