//! The quiz flow as an explicit state value and a pure transition function.

mod event;
mod state;
mod transition;

pub use event::QuizEvent;
pub use state::{Feedback, MAX_INPUT_LEN, QuizState, Screen};
pub use transition::{Effect, Transition, transition};
