use std::sync::Arc;

use quiz_core::model::QuizSession;

use crate::repository::{KeyValueStore, StorageError};

/// Key holding the JSON-encoded history array.
pub const HISTORY_KEY: &str = "math_quiz_history";

/// Most sessions kept; older ones are dropped on append.
pub const HISTORY_CAPACITY: usize = 50;

/// Append-only, capacity-bounded history of completed quiz sessions.
///
/// Stored oldest first as a single JSON array. Data that cannot be read back is treated
/// as an empty history.
#[derive(Clone)]
pub struct SessionStore {
    kv: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// All stored sessions, oldest first. Absent, unreadable or malformed data yields `[]`.
    pub async fn read_all(&self) -> Vec<QuizSession> {
        let raw = match self.kv.get(HISTORY_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::warn!(error = %err, "history read failed; treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<QuizSession>>(&raw) {
            Ok(sessions) => sessions,
            Err(err) => {
                tracing::warn!(error = %err, "history is malformed; treating as empty");
                Vec::new()
            }
        }
    }

    /// Append `session`, keeping only the most recent [`HISTORY_CAPACITY`] entries.
    ///
    /// Returns the number of sessions stored afterwards.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the updated history cannot be encoded or written.
    pub async fn append(&self, session: &QuizSession) -> Result<usize, StorageError> {
        let mut sessions = self.read_all().await;
        sessions.push(session.clone());
        if sessions.len() > HISTORY_CAPACITY {
            let overflow = sessions.len() - HISTORY_CAPACITY;
            sessions.drain(..overflow);
        }

        let encoded = serde_json::to_string(&sessions)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.kv.set(HISTORY_KEY, &encoded).await?;

        tracing::debug!(stored = sessions.len(), "history updated");
        Ok(sessions.len())
    }
}
