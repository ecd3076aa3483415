mod feedback;
mod history;
mod keypad;
mod quiz;
mod root;
mod start;
mod state;
mod summary;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use feedback::FeedbackView;
pub use history::HistoryView;
pub use keypad::Keypad;
pub use quiz::QuizView;
pub use root::{QuizFlow, QuizRoot};
pub use start::StartView;
pub use state::{ViewState, view_state_from_resource};
pub use summary::SummaryView;
