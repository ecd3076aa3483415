use quiz_core::model::QUESTIONS_PER_QUIZ;
use quiz_core::quiz::QuizState;

/// Status of one question slot in the progress strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressMark {
    Current,
    Correct,
    Wrong,
    Pending,
}

/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizProgress {
    pub total: usize,
    /// One-based position of the question being asked.
    pub position: usize,
    pub correct: usize,
    pub marks: Vec<ProgressMark>,
}

impl QuizProgress {
    #[must_use]
    pub fn from_state(state: &QuizState) -> Self {
        let current = state.current_index();
        let marks = state
            .questions()
            .iter()
            .enumerate()
            .map(|(i, q)| {
                if i == current {
                    ProgressMark::Current
                } else if i > current {
                    ProgressMark::Pending
                } else if q.was_correct() {
                    ProgressMark::Correct
                } else {
                    ProgressMark::Wrong
                }
            })
            .collect();

        Self {
            total: QUESTIONS_PER_QUIZ,
            position: current + 1,
            correct: state.correct_so_far(),
            marks,
        }
    }
}
