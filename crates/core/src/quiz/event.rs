use serde::{Deserialize, Serialize};

/// User intents that drive the quiz flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizEvent {
    /// Start a fresh ten-question run from the start screen.
    Begin,
    /// Keypad character.
    Digit(char),
    Clear,
    Delete,
    Submit,
    /// Continue from feedback to the next question or the summary.
    Next,
    /// Start another run from the summary screen.
    Retry,
    Home,
    ViewHistory,
    Back,
}

impl QuizEvent {
    /// Map a keyboard key name (as reported by the webview) to an event.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(Self::Submit),
            "Backspace" => Some(Self::Delete),
            "Escape" | "Delete" => Some(Self::Clear),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() => Some(Self::Digit(c)),
                    _ => None,
                }
            }
        }
    }
}
