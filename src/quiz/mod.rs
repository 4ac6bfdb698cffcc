//! Quiz domain: questions, the progression state machine, and the session
//! that owns it
//!
//! - [`QuizState::apply`] is the only way state changes; it is pure.
//! - [`Effect`] describes what should happen around a transition (fetching,
//!   arming or cancelling the countdown).
//! - [`QuizSession`] owns the state and runs those effects.

mod action;
pub mod countdown;
mod effect;
mod error;
mod question;
mod session;
mod state;
mod view;

pub use action::Action;
pub use countdown::{CountdownHandle, TICK_PERIOD};
pub use effect::Effect;
pub use error::TransitionError;
pub use question::{max_possible_points, Question};
pub use session::{QuizSession, SessionEvent};
pub use state::{reduce, QuizState, Status, SECS_PER_QUESTION};
pub use view::QuizView;
