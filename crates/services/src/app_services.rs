use std::sync::Arc;

use storage::{SessionStore, Storage};

use crate::Clock;
use crate::error::AppServicesError;
use crate::quiz::{HistoryService, QuizService};

/// Assembles app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    quiz: Arc<QuizService>,
    history: Arc<HistoryService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        seed: Option<u64>,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage, clock, seed))
    }

    /// Build services over a throwaway in-memory store.
    #[must_use]
    pub fn in_memory(clock: Clock, seed: Option<u64>) -> Self {
        Self::from_storage(&Storage::in_memory(), clock, seed)
    }

    #[must_use]
    pub fn from_storage(storage: &Storage, clock: Clock, seed: Option<u64>) -> Self {
        let sessions = SessionStore::new(Arc::clone(&storage.kv));
        let quiz = QuizService::new(clock, sessions.clone());
        let quiz = match seed {
            Some(seed) => quiz.with_seed(seed),
            None => quiz,
        };

        Self {
            quiz: Arc::new(quiz),
            history: Arc::new(HistoryService::new(sessions)),
        }
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    #[must_use]
    pub fn history(&self) -> Arc<HistoryService> {
        Arc::clone(&self.history)
    }
}
