mod history_vm;
mod quiz_vm;
mod time_fmt;

pub use history_vm::{
    DailyStatsVm, HistoryCardVm, HistoryDotVm, map_daily_stats, map_history_cards,
};
pub use quiz_vm::{
    FeedbackVm, KEYPAD_KEYS, ProgressDotVm, QuizVm, SummaryVm, keyboard_event, keypad_event,
    map_feedback, map_quiz, map_summary,
};
pub use time_fmt::{format_seconds, format_session_date};
