//! Error types for advent-core.

use thiserror::Error;

/// Result type alias using RiddleError.
pub type Result<T> = std::result::Result<T, RiddleError>;

/// Errors that can occur while reading riddle payloads.
#[derive(Debug, Error)]
pub enum RiddleError {
    #[error("day {day} is outside the calendar (1-24)")]
    InvalidDay { day: u32 },

    #[error("riddle for day {day} has an empty question")]
    EmptyQuestion { day: u32 },

    #[error("riddle for day {day} has an empty answer")]
    EmptyAnswer { day: u32 },

    #[error("choice riddle for day {day} needs at least two choices, got {count}")]
    MissingChoices { day: u32, count: usize },

    #[error("answer of choice riddle for day {day} is not among its choices")]
    AnswerNotAmongChoices { day: u32 },

    #[error("duplicate riddle for day {day}")]
    DuplicateDay { day: u32 },

    #[error("invalid riddle payload: {0}")]
    Json(#[from] serde_json::Error),
}
