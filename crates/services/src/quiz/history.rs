use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use quiz_core::model::QuizSession;
use storage::SessionStore;

/// Outcome of one question inside a past session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuestionMark {
    pub is_correct: bool,
    pub time_taken: Option<f64>,
}

/// Presentation-agnostic list item for a stored session.
///
/// No pre-formatted strings; the UI decides on locale and layout.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryListItem {
    pub completed_at: DateTime<Utc>,
    pub score: u32,
    pub total_time: f64,
    pub correct: usize,
    pub marks: Vec<QuestionMark>,
}

impl HistoryListItem {
    #[must_use]
    pub fn from_session(session: &QuizSession) -> Self {
        Self {
            completed_at: completed_at(session),
            score: session.score(),
            total_time: session.total_time(),
            correct: session.correct_count(),
            marks: session
                .questions()
                .iter()
                .map(|q| QuestionMark {
                    is_correct: q.was_correct(),
                    time_taken: q.time_taken(),
                })
                .collect(),
        }
    }
}

/// Totals for one calendar day (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyStats {
    pub date: NaiveDate,
    pub total_quizzes: u32,
    pub total_questions: u32,
    pub correct_answers: u32,
}

fn completed_at(session: &QuizSession) -> DateTime<Utc> {
    session
        .completed_at()
        .or_else(|| {
            DateTime::parse_from_rfc3339(session.date())
                .ok()
                .map(|dt| dt.with_timezone(&Utc))
        })
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// Read-only facade over the session history for the history screen.
#[derive(Clone)]
pub struct HistoryService {
    sessions: SessionStore,
}

impl HistoryService {
    #[must_use]
    pub fn new(sessions: SessionStore) -> Self {
        Self { sessions }
    }

    /// Stored sessions, newest first.
    pub async fn list_recent(&self) -> Vec<HistoryListItem> {
        self.sessions
            .read_all()
            .await
            .iter()
            .rev()
            .map(HistoryListItem::from_session)
            .collect()
    }

    /// Per-day totals, newest day first.
    pub async fn daily_stats(&self) -> Vec<DailyStats> {
        let mut by_day: BTreeMap<NaiveDate, DailyStats> = BTreeMap::new();
        for session in self.sessions.read_all().await {
            let date = completed_at(&session).date_naive();
            let entry = by_day.entry(date).or_insert(DailyStats {
                date,
                total_quizzes: 0,
                total_questions: 0,
                correct_answers: 0,
            });
            entry.total_quizzes += 1;
            entry.total_questions += u32::try_from(session.questions().len()).unwrap_or(u32::MAX);
            entry.correct_answers += u32::try_from(session.correct_count()).unwrap_or(u32::MAX);
        }
        by_day.into_values().rev().collect()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read_all().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Duration;
    use quiz_core::model::{QUESTIONS_PER_QUIZ, Question};
    use quiz_core::time::fixed_now;
    use storage::InMemoryRepository;

    use super::*;

    fn session(at: DateTime<Utc>, correct: usize) -> QuizSession {
        let questions = (0..QUESTIONS_PER_QUIZ)
            .map(|i| {
                let q = Question::multiplication(format!("q-{i}"), 15, 7);
                let reply = if i < correct { 105 } else { 100 };
                q.answered(Some(reply), 0.5)
            })
            .collect();
        QuizSession::complete(questions, at).unwrap()
    }

    async fn seeded(sessions: &[QuizSession]) -> HistoryService {
        let store = SessionStore::new(Arc::new(InMemoryRepository::new()));
        for s in sessions {
            store.append(s).await.unwrap();
        }
        HistoryService::new(store)
    }

    #[tokio::test]
    async fn empty_history() {
        let svc = seeded(&[]).await;
        assert!(svc.is_empty().await);
        assert!(svc.list_recent().await.is_empty());
        assert!(svc.daily_stats().await.is_empty());
    }

    #[tokio::test]
    async fn lists_newest_first() {
        let now = fixed_now();
        let svc = seeded(&[session(now, 3), session(now + Duration::hours(1), 9)]).await;

        let items = svc.list_recent().await;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].score, 90);
        assert_eq!(items[0].completed_at, now + Duration::hours(1));
        assert_eq!(items[1].score, 30);
        assert_eq!(items[1].marks.len(), QUESTIONS_PER_QUIZ);
        assert!(items[1].marks[0].is_correct);
        assert!(!items[1].marks[3].is_correct);
        assert_eq!(items[1].total_time, 5.0);
    }

    #[tokio::test]
    async fn aggregates_per_day() {
        let now = fixed_now();
        let svc = seeded(&[
            session(now - Duration::days(1), 4),
            session(now, 5),
            session(now + Duration::minutes(10), 7),
        ])
        .await;

        let stats = svc.daily_stats().await;
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].date, now.date_naive());
        assert_eq!(stats[0].total_quizzes, 2);
        assert_eq!(stats[0].total_questions, 20);
        assert_eq!(stats[0].correct_answers, 12);
        assert_eq!(stats[1].correct_answers, 4);
    }
}
