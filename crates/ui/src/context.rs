use std::sync::Arc;

use services::{HistoryService, QuizService};

/// What the composition root must hand to the UI.
pub trait UiApp: Send + Sync {
    fn quiz_service(&self) -> Arc<QuizService>;
    fn history_service(&self) -> Arc<HistoryService>;
}

#[derive(Clone)]
pub struct AppContext {
    quiz: Arc<QuizService>,
    history: Arc<HistoryService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz: app.quiz_service(),
            history: app.history_service(),
        }
    }

    #[must_use]
    pub fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    #[must_use]
    pub fn history_service(&self) -> Arc<HistoryService> {
        Arc::clone(&self.history)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
