use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::{ACCENT_ERROR, ACCENT_WARNING, TEXT_BRIGHT, TEXT_SECONDARY};

/// Remaining seconds at or below which the clock turns red
const CRITICAL_SECS: u32 = 10;
const LOW_SECS: u32 = 30;

/// Remaining time as `⏱ MM:SS`
pub struct CountdownDisplay {
    seconds: u32,
}

impl CountdownDisplay {
    pub fn new(seconds: u32) -> Self {
        Self { seconds }
    }

    pub fn text(&self) -> String {
        format!("{:02}:{:02}", self.seconds / 60, self.seconds % 60)
    }
}

impl Widget for CountdownDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = if self.seconds <= CRITICAL_SECS {
            ACCENT_ERROR
        } else if self.seconds <= LOW_SECS {
            ACCENT_WARNING
        } else {
            TEXT_BRIGHT
        };

        Paragraph::new(Line::from(vec![
            Span::styled("⏱ ", Style::default().fg(TEXT_SECONDARY)),
            Span::styled(
                self.text(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]))
        .render(area, buf);
    }
}
