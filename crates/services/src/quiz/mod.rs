mod history;
mod progress;
mod workflow;

// Public API of the quiz subsystem.
pub use history::{DailyStats, HistoryListItem, HistoryService, QuestionMark};
pub use progress::{ProgressMark, QuizProgress};
pub use workflow::QuizService;
