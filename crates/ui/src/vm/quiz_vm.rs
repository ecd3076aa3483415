use quiz_core::model::{Operation, score_for, total_time_for};
use quiz_core::quiz::{QuizEvent, QuizState, Screen};
use services::{ProgressMark, QuizProgress};

use crate::vm::time_fmt::format_seconds;

/// Keypad layout, row by row.
pub const KEYPAD_KEYS: [&str; 12] = ["1", "2", "3", "4", "5", "6", "7", "8", "9", "C", "0", "⌫"];

/// Event for a keypad button label.
#[must_use]
pub fn keypad_event(label: &str) -> Option<QuizEvent> {
    match label {
        "C" => Some(QuizEvent::Clear),
        "⌫" => Some(QuizEvent::Delete),
        other => QuizEvent::from_key(other),
    }
}

/// Event for a physical key on the given screen. Enter doubles as "next" on feedback.
#[must_use]
pub fn keyboard_event(screen: Screen, key: &str) -> Option<QuizEvent> {
    match (screen, QuizEvent::from_key(key)?) {
        (Screen::Feedback, QuizEvent::Submit) => Some(QuizEvent::Next),
        (Screen::Quiz, event) => Some(event),
        _ => None,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressDotVm {
    pub class: &'static str,
}

impl From<ProgressMark> for ProgressDotVm {
    fn from(mark: ProgressMark) -> Self {
        let class = match mark {
            ProgressMark::Current => "dot dot--current",
            ProgressMark::Correct => "dot dot--correct",
            ProgressMark::Wrong => "dot dot--wrong",
            ProgressMark::Pending => "dot",
        };
        Self { class }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizVm {
    pub position_label: String,
    pub dots: Vec<ProgressDotVm>,
    pub operation_label: &'static str,
    pub symbol: char,
    pub num1: i64,
    pub num2: i64,
    pub input_display: String,
}

fn operation_label(operation: Operation) -> &'static str {
    match operation {
        Operation::Multiplication => "곱하기",
        Operation::Division => "나누기",
    }
}

#[must_use]
pub fn map_quiz(state: &QuizState) -> Option<QuizVm> {
    let question = state.current_question()?;
    let progress = QuizProgress::from_state(state);
    let input_display = if state.input().is_empty() {
        "?".to_string()
    } else {
        state.input().to_string()
    };

    Some(QuizVm {
        position_label: format!("{} / {}", progress.position, progress.total),
        dots: progress.marks.into_iter().map(ProgressDotVm::from).collect(),
        operation_label: operation_label(question.operation()),
        symbol: question.operation().symbol(),
        num1: question.num1(),
        num2: question.num2(),
        input_display,
    })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub is_correct: bool,
    pub equation: String,
    pub correct_answer: i64,
    pub time_label: String,
    pub next_label: &'static str,
}

#[must_use]
pub fn map_feedback(state: &QuizState) -> Option<FeedbackVm> {
    let feedback = state.feedback()?;
    let question = state.current_question()?;
    let next_label = if state.is_last_question() {
        "결과 보기!"
    } else {
        "다음 문제!"
    };

    Some(FeedbackVm {
        is_correct: feedback.is_correct,
        equation: format!(
            "{} {} {} = {}",
            question.num1(),
            question.operation().symbol(),
            question.num2(),
            feedback.correct_answer
        ),
        correct_answer: feedback.correct_answer,
        time_label: format_seconds(feedback.time_taken),
        next_label,
    })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryVm {
    pub score: u32,
    pub total_time_label: String,
}

#[must_use]
pub fn map_summary(state: &QuizState) -> SummaryVm {
    let (score, total_time) = match state.completed_session() {
        Some(session) => (session.score(), session.total_time()),
        None => (score_for(state.questions()), total_time_for(state.questions())),
    };
    SummaryVm {
        score,
        total_time_label: format!("{total_time:.1}"),
    }
}
