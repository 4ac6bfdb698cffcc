//! Presentational widgets. None of these hold quiz logic: they read a
//! [`QuizView`](crate::quiz::QuizView) (or parts of it) and draw.

mod countdown_display;
mod error_screen;
mod finished_screen;
mod header;
mod key_hints;
mod loader;
mod progress;
mod question_card;
mod spinner;
mod start_screen;

pub use countdown_display::CountdownDisplay;
pub use error_screen::ErrorScreen;
pub use finished_screen::FinishedScreen;
pub use header::Header;
pub use key_hints::render_key_hints;
pub use loader::Loader;
pub use progress::Progress;
pub use question_card::QuestionCard;
pub use spinner::Spinner;
pub use start_screen::StartScreen;

use ratatui::layout::Rect;
use ratatui::style::Color;

// Palette
pub const ACCENT_PRIMARY: Color = Color::Rgb(97, 218, 251);
pub const ACCENT_SUCCESS: Color = Color::Rgb(80, 200, 120);
pub const ACCENT_WARNING: Color = Color::Rgb(255, 184, 76);
pub const ACCENT_ERROR: Color = Color::Rgb(255, 99, 99);
pub const TEXT_BRIGHT: Color = Color::Rgb(241, 243, 245);
pub const TEXT_PRIMARY: Color = Color::Rgb(206, 212, 218);
pub const TEXT_SECONDARY: Color = Color::Rgb(160, 166, 173);
pub const TEXT_MUTED: Color = Color::Rgb(120, 126, 133);
pub const TEXT_FAINT: Color = Color::Rgb(85, 90, 96);
pub const BORDER_DEFAULT: Color = Color::Rgb(90, 98, 108);
pub const BORDER_DIMMED: Color = Color::Rgb(60, 66, 74);
pub const BG_SURFACE: Color = Color::Rgb(52, 58, 64);
pub const SELECTED_BG: Color = Color::Rgb(40, 70, 90);

/// Rect of at most `width` x `height`, centered in `area`
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
