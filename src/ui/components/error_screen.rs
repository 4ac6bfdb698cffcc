use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::{centered, ACCENT_ERROR, TEXT_SECONDARY};

/// Terminal screen for a failed question fetch
pub struct ErrorScreen;

impl Widget for ErrorScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Error ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT_ERROR));

        let lines = vec![
            Line::from(Span::styled(
                "Something went wrong, the quiz is unavailable.",
                Style::default()
                    .fg(ACCENT_ERROR)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Check that the question server is running, then relaunch.",
                Style::default().fg(TEXT_SECONDARY),
            )),
        ];

        let width = area.width.min(64);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(centered(area, width, 6), buf);
    }
}
