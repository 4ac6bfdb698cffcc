use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::{
    ACCENT_ERROR, ACCENT_PRIMARY, ACCENT_SUCCESS, BORDER_DEFAULT, SELECTED_BG, TEXT_BRIGHT,
    TEXT_MUTED, TEXT_PRIMARY,
};
use crate::quiz::Question;

/// The current question and its options.
///
/// Before an answer is recorded the highlighted option is marked; afterwards
/// the correct option and a wrong pick are revealed.
pub struct QuestionCard<'a> {
    question: &'a Question,
    number: usize,
    answer: Option<usize>,
    highlighted: usize,
}

impl<'a> QuestionCard<'a> {
    pub fn new(question: &'a Question, number: usize) -> Self {
        Self {
            question,
            number,
            answer: None,
            highlighted: 0,
        }
    }

    pub fn answer(mut self, answer: Option<usize>) -> Self {
        self.answer = answer;
        self
    }

    pub fn highlighted(mut self, highlighted: usize) -> Self {
        self.highlighted = highlighted;
        self
    }

    fn option_line(&self, i: usize, text: &str) -> Line<'static> {
        let label = format!(" {}. {} ", i + 1, text);

        let Some(answer) = self.answer else {
            let style = if i == self.highlighted {
                Style::default()
                    .fg(TEXT_BRIGHT)
                    .bg(SELECTED_BG)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(TEXT_PRIMARY)
            };
            let marker = if i == self.highlighted { "›" } else { " " };
            return Line::from(vec![
                Span::styled(marker, Style::default().fg(ACCENT_PRIMARY)),
                Span::styled(label, style),
            ]);
        };

        let correct = self.question.is_correct(i);
        let (style, suffix) = if correct {
            (
                Style::default()
                    .fg(ACCENT_SUCCESS)
                    .add_modifier(Modifier::BOLD),
                " ✓",
            )
        } else if i == answer {
            (Style::default().fg(ACCENT_ERROR), " ✗")
        } else {
            (Style::default().fg(TEXT_MUTED), "")
        };
        let marker = if i == answer { "›" } else { " " };

        Line::from(vec![
            Span::styled(marker, Style::default().fg(ACCENT_PRIMARY)),
            Span::styled(label, style),
            Span::styled(suffix, style),
        ])
    }
}

impl Widget for QuestionCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(
                " Question {} · {} points ",
                self.number, self.question.points
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER_DEFAULT));

        let mut lines = vec![
            Line::from(Span::styled(
                self.question.question.clone(),
                Style::default()
                    .fg(TEXT_BRIGHT)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        for (i, option) in self.question.options.iter().enumerate() {
            lines.push(self.option_line(i, option));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }
}
