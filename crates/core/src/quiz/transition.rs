use chrono::{DateTime, Utc};
use rand::Rng;

use crate::generator::generate_quiz;
use crate::model::{QuizSession, parse_answer};
use crate::time::elapsed_seconds;

use super::event::QuizEvent;
use super::state::{Feedback, MAX_INPUT_LEN, QuizState, Screen};

/// Side effect requested by a transition. The caller performs it.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Append the finished session to history.
    PersistSession(QuizSession),
}

/// Output of [`transition`]: the next state plus an optional effect.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: QuizState,
    pub effect: Option<Effect>,
}

impl Transition {
    fn to(state: QuizState) -> Self {
        Self {
            state,
            effect: None,
        }
    }

    fn unchanged(state: &QuizState) -> Self {
        Self::to(state.clone())
    }
}

/// Apply `event` to `state` at instant `now`.
///
/// Pure apart from drawing from `rng` when a new quiz begins. Events that make no sense on
/// the current screen return the state unchanged.
pub fn transition<R: Rng>(
    state: &QuizState,
    event: QuizEvent,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Transition {
    match (state.screen, event) {
        (Screen::Start, QuizEvent::Begin) | (Screen::Summary, QuizEvent::Retry) => {
            Transition::to(QuizState::in_progress(generate_quiz(now, rng), now))
        }
        (Screen::Start, QuizEvent::ViewHistory) => Transition::to(QuizState {
            screen: Screen::History,
            ..QuizState::default()
        }),
        (Screen::History, QuizEvent::Back) | (Screen::Summary, QuizEvent::Home) => {
            Transition::to(QuizState::default())
        }
        (Screen::Quiz, QuizEvent::Digit(c)) => {
            if !c.is_ascii_digit() || state.input.chars().count() >= MAX_INPUT_LEN {
                return Transition::unchanged(state);
            }
            let mut input = state.input.clone();
            input.push(c);
            Transition::to(QuizState {
                input,
                ..state.clone()
            })
        }
        (Screen::Quiz, QuizEvent::Clear) => Transition::to(QuizState {
            input: String::new(),
            ..state.clone()
        }),
        (Screen::Quiz, QuizEvent::Delete) => {
            let mut input = state.input.clone();
            input.pop();
            Transition::to(QuizState {
                input,
                ..state.clone()
            })
        }
        (Screen::Quiz, QuizEvent::Submit) => submit(state, now),
        (Screen::Feedback, QuizEvent::Next) => next(state, now),
        _ => Transition::unchanged(state),
    }
}

fn submit(state: &QuizState, now: DateTime<Utc>) -> Transition {
    if state.input.is_empty() {
        return Transition::unchanged(state);
    }
    let Some(question) = state.current_question() else {
        return Transition::unchanged(state);
    };

    let started = state.question_started_at.unwrap_or(now);
    let time_taken = elapsed_seconds(started, now);
    let answered = question.answered(parse_answer(&state.input), time_taken);
    let feedback = Feedback {
        is_correct: answered.was_correct(),
        correct_answer: answered.answer(),
        time_taken,
    };

    let questions = state
        .questions
        .iter()
        .enumerate()
        .map(|(i, q)| if i == state.current { answered.clone() } else { q.clone() })
        .collect();

    Transition::to(QuizState {
        screen: Screen::Feedback,
        questions,
        feedback: Some(feedback),
        ..state.clone()
    })
}

fn next(state: &QuizState, now: DateTime<Utc>) -> Transition {
    if !state.is_last_question() {
        return Transition::to(QuizState {
            screen: Screen::Quiz,
            current: state.current + 1,
            input: String::new(),
            feedback: None,
            question_started_at: Some(now),
            ..state.clone()
        });
    }

    match QuizSession::complete(state.questions.clone(), now) {
        Ok(session) => Transition {
            state: QuizState {
                screen: Screen::Summary,
                input: String::new(),
                feedback: None,
                question_started_at: None,
                completed: Some(session.clone()),
                ..state.clone()
            },
            effect: Some(Effect::PersistSession(session)),
        },
        // Only reachable for hand-built states with missing answers.
        Err(_) => Transition::unchanged(state),
    }
}
