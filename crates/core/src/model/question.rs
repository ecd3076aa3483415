use serde::{Deserialize, Serialize};

//
// ─── OPERATION ────────────────────────────────────────────────────────────────
//

/// Arithmetic operation of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Multiplication,
    Division,
}

impl Operation {
    /// Operator glyph shown between the operands.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Operation::Multiplication => '×',
            Operation::Division => '÷',
        }
    }
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// One two-operand problem, plus the user's response once answered.
///
/// Questions are values: answering produces a new `Question` via [`Question::answered`]
/// and leaves the original untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    id: String,
    #[serde(rename = "type")]
    operation: Operation,
    num1: i64,
    num2: i64,
    answer: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_answer: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    is_correct: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    time_taken: Option<f64>,
}

impl Question {
    /// `num1 × num2`.
    #[must_use]
    pub fn multiplication(id: impl Into<String>, num1: i64, num2: i64) -> Self {
        Self::unanswered(id.into(), Operation::Multiplication, num1, num2, num1 * num2)
    }

    /// `(quotient × divisor) ÷ divisor`, which always divides exactly.
    #[must_use]
    pub fn division(id: impl Into<String>, quotient: i64, divisor: i64) -> Self {
        Self::unanswered(
            id.into(),
            Operation::Division,
            quotient * divisor,
            divisor,
            quotient,
        )
    }

    fn unanswered(id: String, operation: Operation, num1: i64, num2: i64, answer: i64) -> Self {
        Self {
            id,
            operation,
            num1,
            num2,
            answer,
            user_answer: None,
            is_correct: None,
            time_taken: None,
        }
    }

    /// Returns a copy of this question with the user's response recorded.
    ///
    /// `user_answer` is `None` when the raw input was not a number; that counts as wrong.
    #[must_use]
    pub fn answered(&self, user_answer: Option<i64>, time_taken: f64) -> Self {
        Self {
            user_answer,
            is_correct: Some(user_answer == Some(self.answer)),
            time_taken: Some(time_taken),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn operation(&self) -> Operation {
        self.operation
    }

    #[must_use]
    pub fn num1(&self) -> i64 {
        self.num1
    }

    #[must_use]
    pub fn num2(&self) -> i64 {
        self.num2
    }

    #[must_use]
    pub fn answer(&self) -> i64 {
        self.answer
    }

    #[must_use]
    pub fn user_answer(&self) -> Option<i64> {
        self.user_answer
    }

    #[must_use]
    pub fn is_correct(&self) -> Option<bool> {
        self.is_correct
    }

    #[must_use]
    pub fn time_taken(&self) -> Option<f64> {
        self.time_taken
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.is_correct.is_some()
    }

    /// `true` only for answered questions that were right.
    #[must_use]
    pub fn was_correct(&self) -> bool {
        self.is_correct == Some(true)
    }
}

/// Parse keypad input into an answer. Anything that is not a plain integer yields `None`.
#[must_use]
pub fn parse_answer(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}
