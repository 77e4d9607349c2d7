//! Riddle payload parsing and validation.
//!
//! # Format
//! ```json
//! {
//!   "day": 6,
//!   "question": "Wer bringt am 6. Dezember Geschenke?",
//!   "type": "text",
//!   "answer": "Nikolaus",
//!   "alternate_answers": ["Sankt Nikolaus"],
//!   "hints": ["Er hat einen Bischofsstab."]
//! }
//! ```
//!
//! `type` defaults to `text`; `choices`, `alternate_answers` and `hints`
//! default to empty lists.

use crate::calendar::DOOR_COUNT;
use crate::error::{Result, RiddleError};
use crate::matching::normalize;
use crate::types::{Riddle, RiddleKind};
use std::collections::HashSet;

/// Parse a single riddle payload and validate it.
pub fn parse_riddle(json: &str) -> Result<Riddle> {
    let riddle: Riddle = serde_json::from_str(json)?;
    validate(&riddle)?;
    Ok(riddle)
}

/// Parse a JSON array of riddles. Each day may appear at most once.
pub fn parse_riddles(json: &str) -> Result<Vec<Riddle>> {
    let riddles: Vec<Riddle> = serde_json::from_str(json)?;

    let mut seen_days = HashSet::new();
    for riddle in &riddles {
        validate(riddle)?;
        if !seen_days.insert(riddle.day) {
            return Err(RiddleError::DuplicateDay { day: riddle.day });
        }
    }

    Ok(riddles)
}

/// Check that a riddle can be presented and graded.
pub fn validate(riddle: &Riddle) -> Result<()> {
    let day = riddle.day;

    if !(1..=DOOR_COUNT).contains(&day) {
        return Err(RiddleError::InvalidDay { day });
    }
    if riddle.question.trim().is_empty() {
        return Err(RiddleError::EmptyQuestion { day });
    }
    if riddle.answer.trim().is_empty() {
        return Err(RiddleError::EmptyAnswer { day });
    }
    // A text answer that normalizes to nothing can never be matched.
    if riddle.kind == RiddleKind::Text && normalize(&riddle.answer).is_empty() {
        return Err(RiddleError::EmptyAnswer { day });
    }

    if riddle.kind == RiddleKind::Choice {
        if riddle.choices.len() < 2 {
            return Err(RiddleError::MissingChoices {
                day,
                count: riddle.choices.len(),
            });
        }
        if !riddle.choices.iter().any(|c| c == &riddle.answer) {
            return Err(RiddleError::AnswerNotAmongChoices { day });
        }
    }

    Ok(())
}
