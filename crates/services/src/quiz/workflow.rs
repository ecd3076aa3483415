use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};
use quiz_core::model::{Question, QuizSession};
use quiz_core::quiz::{Effect, QuizEvent, QuizState, Transition, transition};
use rand::SeedableRng;
use rand::rngs::StdRng;
use storage::SessionStore;

use crate::Clock;

/// Drives the quiz flow: runs transitions against the clock and random source, then
/// performs the effects they request.
pub struct QuizService {
    clock: Clock,
    rng: Mutex<StdRng>,
    sessions: SessionStore,
    /// Answered questions of the last run handed to storage.
    last_saved_run: Mutex<Option<Vec<Question>>>,
}

impl QuizService {
    /// Service drawing questions from OS entropy.
    #[must_use]
    pub fn new(clock: Clock, sessions: SessionStore) -> Self {
        Self {
            clock,
            rng: Mutex::new(StdRng::from_os_rng()),
            sessions,
            last_saved_run: Mutex::new(None),
        }
    }

    /// Replace the random source with a seeded one, making generated quizzes reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    /// Run the reducer at the current clock time without performing its effect.
    ///
    /// Callers that hold the state themselves (the UI) store `Transition::state` right away
    /// and hand any effect to [`QuizService::persist`], so a repeated event sees the new state.
    pub fn step(&self, state: &QuizState, event: QuizEvent) -> Transition {
        self.step_at(state, event, self.clock.now())
    }

    pub fn step_at(&self, state: &QuizState, event: QuizEvent, now: DateTime<Utc>) -> Transition {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        transition(state, event, now, &mut *rng)
    }

    /// Apply `event` at the current clock time.
    pub async fn dispatch(&self, state: &QuizState, event: QuizEvent) -> QuizState {
        self.dispatch_at(state, event, self.clock.now()).await
    }

    /// Apply `event` at an explicit instant.
    ///
    /// Persistence failures are logged and dropped; the returned state is the same either way.
    pub async fn dispatch_at(
        &self,
        state: &QuizState,
        event: QuizEvent,
        now: DateTime<Utc>,
    ) -> QuizState {
        let Transition { state, effect } = self.step_at(state, event, now);
        if let Some(effect) = effect {
            self.persist(effect).await;
        }
        state
    }

    /// Perform an effect returned by [`QuizService::step`].
    ///
    /// A run is saved at most once, even if its final "next" is replayed from a stale state.
    pub async fn persist(&self, effect: Effect) {
        match effect {
            Effect::PersistSession(session) => {
                if !self.claim_run(&session) {
                    tracing::debug!("quiz session already saved; skipping");
                    return;
                }
                match self.sessions.append(&session).await {
                    Ok(stored) => tracing::info!(
                        score = session.score(),
                        total_time = session.total_time(),
                        stored,
                        "quiz session saved"
                    ),
                    Err(err) => tracing::warn!(error = %err, "could not save quiz session"),
                }
            }
        }
    }

    fn claim_run(&self, session: &QuizSession) -> bool {
        let mut last = self
            .last_saved_run
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if last.as_deref() == Some(session.questions()) {
            return false;
        }
        *last = Some(session.questions().to_vec());
        true
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Duration;
    use quiz_core::model::QUESTIONS_PER_QUIZ;
    use quiz_core::quiz::Screen;
    use quiz_core::time::{fixed_clock, fixed_now};
    use storage::repository::{InMemoryRepository, KeyValueStore, StorageError};

    use super::*;

    fn service() -> (SessionStore, QuizService) {
        let store = SessionStore::new(Arc::new(InMemoryRepository::new()));
        let svc = QuizService::new(fixed_clock(), store.clone()).with_seed(5);
        (store, svc)
    }

    async fn answer_all(svc: &QuizService, mut state: QuizState, correct: usize) -> QuizState {
        let mut now = fixed_now();
        for i in 0..QUESTIONS_PER_QUIZ {
            let answer = state.current_question().map(|q| q.answer()).unwrap();
            let reply = if i < correct { answer } else { answer + 1 };
            for c in reply.to_string().chars() {
                state = svc.dispatch_at(&state, QuizEvent::Digit(c), now).await;
            }
            now += Duration::milliseconds(2_000);
            state = svc.dispatch_at(&state, QuizEvent::Submit, now).await;
            state = svc.dispatch_at(&state, QuizEvent::Next, now).await;
        }
        state
    }

    #[tokio::test]
    async fn seeded_services_generate_the_same_quiz() {
        let (_, a) = service();
        let (_, b) = service();
        let qa = a.dispatch(&QuizState::new(), QuizEvent::Begin).await;
        let qb = b.dispatch(&QuizState::new(), QuizEvent::Begin).await;
        assert_eq!(qa.questions(), qb.questions());
    }

    #[tokio::test]
    async fn finishing_a_quiz_persists_one_session() {
        let (store, svc) = service();
        let state = svc.dispatch(&QuizState::new(), QuizEvent::Begin).await;
        let state = answer_all(&svc, state, 6).await;

        assert_eq!(state.screen(), Screen::Summary);
        let history = store.read_all().await;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].score(), 60);
        assert_eq!(history[0].total_time(), 20.0);
        assert_eq!(state.completed_session(), Some(&history[0]));
    }

    /// In-memory store whose reads and writes take a while, like disk I/O.
    struct SlowStore {
        inner: InMemoryRepository,
    }

    #[async_trait::async_trait]
    impl KeyValueStore for SlowStore {
        async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
            self.inner.get(key).await
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
            self.inner.set(key, value).await
        }
    }

    async fn last_feedback(svc: &QuizService) -> QuizState {
        let mut state = svc.dispatch(&QuizState::new(), QuizEvent::Begin).await;
        for i in 0..QUESTIONS_PER_QUIZ {
            let answer = state.current_question().map(|q| q.answer()).unwrap();
            for c in answer.to_string().chars() {
                state = svc.dispatch(&state, QuizEvent::Digit(c)).await;
            }
            state = svc.dispatch(&state, QuizEvent::Submit).await;
            if i + 1 < QUESTIONS_PER_QUIZ {
                state = svc.dispatch(&state, QuizEvent::Next).await;
            }
        }
        assert_eq!(state.screen(), Screen::Feedback);
        state
    }

    #[tokio::test]
    async fn repeated_final_next_saves_once() {
        let store = SessionStore::new(Arc::new(SlowStore {
            inner: InMemoryRepository::new(),
        }));
        let svc = QuizService::new(Clock::default_clock(), store.clone()).with_seed(11);
        let feedback = last_feedback(&svc).await;

        let first = svc.dispatch(&feedback, QuizEvent::Next);
        let second = async {
            tokio::time::sleep(std::time::Duration::from_millis(30)).await;
            svc.dispatch(&feedback, QuizEvent::Next).await
        };
        let (a, b) = tokio::join!(first, second);

        assert_eq!(a.screen(), Screen::Summary);
        assert_eq!(b.screen(), Screen::Summary);
        assert_eq!(store.read_all().await.len(), 1);
    }

    #[tokio::test]
    async fn step_updates_state_before_persisting() {
        let (store, svc) = service();
        let feedback = last_feedback(&svc).await;

        let done = svc.step(&feedback, QuizEvent::Next);
        assert_eq!(done.state.screen(), Screen::Summary);
        assert!(store.read_all().await.is_empty());

        // A second press against the updated state is a no-op.
        assert!(svc.step(&done.state, QuizEvent::Next).effect.is_none());

        svc.persist(done.effect.expect("session to save")).await;
        assert_eq!(store.read_all().await.len(), 1);
    }

    #[tokio::test]
    async fn retried_runs_are_saved_separately() {
        let (store, svc) = service();
        let begun = svc.dispatch(&QuizState::new(), QuizEvent::Begin).await;
        let first = answer_all(&svc, begun, 3).await;
        let again = svc.dispatch(&first, QuizEvent::Retry).await;
        answer_all(&svc, again, 7).await;

        let scores: Vec<u32> = store.read_all().await.iter().map(|s| s.score()).collect();
        assert_eq!(scores, vec![30, 70]);
    }

    struct ReadOnlyStore;

    #[async_trait::async_trait]
    impl KeyValueStore for ReadOnlyStore {
        async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Connection("read-only".to_string()))
        }
    }

    #[tokio::test]
    async fn save_failure_still_reaches_summary() {
        let store = SessionStore::new(Arc::new(ReadOnlyStore));
        let svc = QuizService::new(fixed_clock(), store.clone()).with_seed(8);
        let state = svc.dispatch(&QuizState::new(), QuizEvent::Begin).await;
        let state = answer_all(&svc, state, 10).await;

        assert_eq!(state.screen(), Screen::Summary);
        assert_eq!(state.completed_session().map(|s| s.score()), Some(100));
        assert!(store.read_all().await.is_empty());
    }
}
