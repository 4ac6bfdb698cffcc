pub mod app;
pub mod components;
pub mod input;
pub mod screen;
pub mod terminal_guard;

pub use app::App;
pub use input::{command_for_key, Command};
pub use screen::QuizScreen;
