use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Paragraph, Widget},
};

use super::{centered, Spinner, ACCENT_PRIMARY};

/// Shown while the question fetch is in flight
pub struct Loader<'a> {
    spinner: &'a Spinner,
}

impl<'a> Loader<'a> {
    pub fn new(spinner: &'a Spinner) -> Self {
        Self { spinner }
    }
}

impl Widget for Loader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(
            self.spinner
                .with_label("Loading questions...", ACCENT_PRIMARY),
        );
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(centered(area, area.width, 1), buf);
    }
}
