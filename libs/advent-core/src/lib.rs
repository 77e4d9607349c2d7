//! Core advent calendar library used by the backend.
//!
//! Provides:
//! - Answer matching for free-text riddles (normalization, Levenshtein distance)
//! - Grading of text and choice riddles
//! - Date gating of calendar doors
//! - Riddle payload validation
//! - Shared types (Riddle, DoorState, etc.)

pub mod calendar;
pub mod error;
pub mod grading;
pub mod matching;
pub mod riddle;
pub mod types;

pub use calendar::{door_date, is_door_unlocked, unlocked_days, DOOR_COUNT};
pub use error::{Result, RiddleError};
pub use grading::{grade, Verdict};
pub use matching::{
    is_correct_answer, is_match, levenshtein_distance, max_tolerated_distance, normalize,
};
pub use riddle::{parse_riddle, parse_riddles, validate};
pub use types::{DoorState, Progress, PublicRiddle, Riddle, RiddleKind};
