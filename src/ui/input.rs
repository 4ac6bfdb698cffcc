//! Key press → quiz command mapping
//!
//! This is where the "answer only once" rule lives: once the current question
//! has an answer, option keys stop producing `NewAnswer`.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::quiz::{Action, QuizView, Status};

/// What a key press asks the app to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    /// Move the option cursor by this many rows (wrapping)
    MoveSelection(isize),
    Dispatch(Action),
}

/// Map a key press to a command given what is on screen.
///
/// Returns `None` for keys that mean nothing in the current status.
pub fn command_for_key(key: KeyEvent, view: &QuizView<'_>, highlighted: usize) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    // Global shortcuts (work in any status)
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Command::Quit),
            _ => None,
        };
    }
    if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
        return Some(Command::Quit);
    }

    match view.status {
        Status::Loading | Status::Error => None,
        Status::Ready if view.num_questions == 0 => None,
        Status::Ready => match key.code {
            KeyCode::Enter | KeyCode::Char('s') => Some(Command::Dispatch(Action::Start)),
            _ => None,
        },
        Status::Active if view.is_answered() => match key.code {
            KeyCode::Enter | KeyCode::Char('n') | KeyCode::Right => {
                let action = if view.is_last_question() {
                    Action::Finish
                } else {
                    Action::NextQuestion
                };
                Some(Command::Dispatch(action))
            }
            _ => None,
        },
        Status::Active => {
            let option_count = view.current_question().map_or(0, |q| q.options.len());
            match key.code {
                KeyCode::Char(c @ '1'..='9') => {
                    let option = c.to_digit(10)? as usize - 1;
                    (option < option_count).then_some(Command::Dispatch(Action::NewAnswer(option)))
                }
                KeyCode::Up | KeyCode::Char('k') => Some(Command::MoveSelection(-1)),
                KeyCode::Down | KeyCode::Char('j') => Some(Command::MoveSelection(1)),
                KeyCode::Enter if highlighted < option_count => {
                    Some(Command::Dispatch(Action::NewAnswer(highlighted)))
                }
                _ => None,
            }
        }
        Status::Finished => match key.code {
            KeyCode::Char('r') | KeyCode::Enter => Some(Command::Dispatch(Action::Restart)),
            _ => None,
        },
    }
}

/// Move `current` by `delta` within `0..count`, wrapping at both ends
pub fn wrap_selection(current: usize, delta: isize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let count = count as isize;
    ((current as isize + delta).rem_euclid(count)) as usize
}
