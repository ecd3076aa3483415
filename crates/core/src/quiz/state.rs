use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{QUESTIONS_PER_QUIZ, Question, QuizSession};

/// Longest answer the keypad accepts. Answers never exceed four digits.
pub const MAX_INPUT_LEN: usize = 5;

/// Which screen the quiz flow is on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    #[default]
    Start,
    Quiz,
    Feedback,
    Summary,
    History,
}

/// Result of the most recent submission, shown on the feedback screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub is_correct: bool,
    pub correct_answer: i64,
    pub time_taken: f64,
}

/// The whole quiz flow as one value.
///
/// Only [`crate::quiz::transition`] produces new states; views read it and nothing else
/// holds mutable quiz data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizState {
    pub(crate) screen: Screen,
    pub(crate) questions: Vec<Question>,
    pub(crate) current: usize,
    pub(crate) input: String,
    pub(crate) feedback: Option<Feedback>,
    pub(crate) question_started_at: Option<DateTime<Utc>>,
    pub(crate) completed: Option<QuizSession>,
}

impl QuizState {
    /// Initial state: the start screen with nothing loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A quiz already in progress on its first question with the given questions.
    ///
    /// Useful for replaying a known problem set; regular runs start with `QuizEvent::Begin`.
    #[must_use]
    pub fn in_progress(questions: Vec<Question>, started_at: DateTime<Utc>) -> Self {
        Self {
            screen: Screen::Quiz,
            questions,
            current: 0,
            input: String::new(),
            feedback: None,
            question_started_at: Some(started_at),
            completed: None,
        }
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Zero-based index of the question being asked.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    #[must_use]
    pub fn question_started_at(&self) -> Option<DateTime<Utc>> {
        self.question_started_at
    }

    /// The session saved when the last quiz finished; set while on the summary screen.
    #[must_use]
    pub fn completed_session(&self) -> Option<&QuizSession> {
        self.completed.as_ref()
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current + 1 >= QUESTIONS_PER_QUIZ
    }

    #[must_use]
    pub fn correct_so_far(&self) -> usize {
        self.questions.iter().filter(|q| q.was_correct()).count()
    }
}
