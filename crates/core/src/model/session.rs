use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::Question;
use crate::time::{iso8601, round_tenths};

/// Number of questions in one quiz run.
pub const QUESTIONS_PER_QUIZ: usize = 10;

/// Points awarded per correct answer.
pub const POINTS_PER_CORRECT: u32 = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizSessionError {
    #[error("a session needs exactly 10 questions, got {len}")]
    WrongLength { len: usize },

    #[error("question {index} has not been answered")]
    Unanswered { index: usize },
}

/// Immutable record of one completed quiz run, as persisted in history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSession {
    date: String,
    timestamp: i64,
    questions: Vec<Question>,
    score: u32,
    total_time: f64,
}

impl QuizSession {
    /// Fold ten answered questions into a session completed at `completed_at`.
    ///
    /// # Errors
    ///
    /// Returns `QuizSessionError::WrongLength` unless there are exactly ten questions,
    /// and `QuizSessionError::Unanswered` if any of them lacks a response.
    pub fn complete(
        questions: Vec<Question>,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, QuizSessionError> {
        if questions.len() != QUESTIONS_PER_QUIZ {
            return Err(QuizSessionError::WrongLength {
                len: questions.len(),
            });
        }
        if let Some(index) = questions.iter().position(|q| !q.is_answered()) {
            return Err(QuizSessionError::Unanswered { index });
        }

        let score = score_for(&questions);
        let total_time = total_time_for(&questions);

        Ok(Self {
            date: iso8601(completed_at),
            timestamp: completed_at.timestamp_millis(),
            questions,
            score,
            total_time,
        })
    }

    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Completion instant in milliseconds since the Unix epoch.
    #[must_use]
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.timestamp)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.questions.iter().filter(|q| q.was_correct()).count()
    }
}

/// `POINTS_PER_CORRECT` for every correctly answered question.
#[must_use]
pub fn score_for(questions: &[Question]) -> u32 {
    questions
        .iter()
        .filter(|q| q.was_correct())
        .map(|_| POINTS_PER_CORRECT)
        .sum()
}

/// Sum of per-question times, rounded to one decimal place. Unanswered questions count as zero.
#[must_use]
pub fn total_time_for(questions: &[Question]) -> f64 {
    round_tenths(questions.iter().filter_map(Question::time_taken).sum())
}
