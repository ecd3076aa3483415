//! Random two-operand problems.
//!
//! Randomness comes in through any `rand::Rng`, so a seeded `StdRng` reproduces a quiz exactly.

use std::ops::RangeInclusive;

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::model::{QUESTIONS_PER_QUIZ, Question};

/// Range of the two-digit operand (multiplicand or quotient).
pub const TWO_DIGIT: RangeInclusive<i64> = 10..=99;

/// Range of the single-digit operand (multiplier or divisor).
pub const SINGLE_DIGIT: RangeInclusive<i64> = 2..=9;

/// Generate one question, multiplication or division with equal probability.
pub fn generate_question<R: Rng>(id: impl Into<String>, rng: &mut R) -> Question {
    if rng.random_bool(0.5) {
        let num1 = rng.random_range(TWO_DIGIT);
        let num2 = rng.random_range(SINGLE_DIGIT);
        Question::multiplication(id, num1, num2)
    } else {
        let quotient = rng.random_range(TWO_DIGIT);
        let divisor = rng.random_range(SINGLE_DIGIT);
        Question::division(id, quotient, divisor)
    }
}

/// Generate a full quiz. Ids are `q-{millis}-{index}`, unique within the batch.
pub fn generate_quiz<R: Rng>(started_at: DateTime<Utc>, rng: &mut R) -> Vec<Question> {
    let stamp = started_at.timestamp_millis();
    (0..QUESTIONS_PER_QUIZ)
        .map(|index| generate_question(format!("q-{stamp}-{index}"), rng))
        .collect()
}
