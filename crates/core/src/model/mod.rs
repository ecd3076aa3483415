mod question;
mod session;

pub use question::{Operation, Question, parse_answer};
pub use session::{
    POINTS_PER_CORRECT, QUESTIONS_PER_QUIZ, QuizSession, QuizSessionError, score_for,
    total_time_for,
};
