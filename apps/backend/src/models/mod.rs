//! API request and response types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// Re-export shared types from advent-core
pub use advent_core::types::{DoorState, PublicRiddle, Riddle, RiddleKind};

// === Calendar ===

/// One door in the calendar grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoorSummary {
    pub day: u32,
    pub opens_on: NaiveDate,
    pub unlocked: bool,
    pub opened: bool,
    pub solved: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CalendarResponse {
    pub year: i32,
    pub today: NaiveDate,
    pub doors: Vec<DoorSummary>,
}

// === Doors ===

/// Door progress without the cached riddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoorView {
    pub day: u32,
    pub opened: bool,
    pub solved: bool,
    pub attempts: u32,
    pub hints_revealed: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solved_at: Option<DateTime<Utc>>,
}

impl From<&DoorState> for DoorView {
    fn from(door: &DoorState) -> Self {
        Self {
            day: door.day,
            opened: door.opened,
            solved: door.solved,
            attempts: door.attempts,
            hints_revealed: door.hints_revealed,
            solved_at: door.solved_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DoorResponse {
    pub door: DoorView,
    pub riddle: PublicRiddle,
}

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub answer: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub correct: bool,
    pub door: DoorView,
}

// === Progress ===

#[derive(Debug, Serialize, Deserialize)]
pub struct ProgressResponse {
    pub doors: Vec<DoorView>,
}
