#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod quiz;

pub use quiz_core::Clock;

pub use app_services::AppServices;
pub use error::AppServicesError;
pub use quiz::{
    DailyStats, HistoryListItem, HistoryService, ProgressMark, QuestionMark, QuizProgress,
    QuizService,
};
