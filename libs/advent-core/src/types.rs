//! Core types for the advent calendar.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a riddle expects to be answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiddleKind {
    /// Free-text answer, graded with fuzzy matching.
    Text,
    /// One of the listed choices, graded with exact equality.
    Choice,
}

impl Default for RiddleKind {
    fn default() -> Self {
        Self::Text
    }
}

impl RiddleKind {
    /// Get the kind name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Choice => "choice",
        }
    }
}

/// Riddle as delivered by the content provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Riddle {
    pub day: u32,
    pub question: String,
    #[serde(default, rename = "type")]
    pub kind: RiddleKind,
    #[serde(default)]
    pub choices: Vec<String>,
    pub answer: String,
    #[serde(default)]
    pub alternate_answers: Vec<String>,
    #[serde(default)]
    pub hints: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Riddle {
    /// Number of hints available for this riddle.
    pub fn hint_count(&self) -> u32 {
        self.hints.len() as u32
    }

    /// View of the riddle safe to hand to the player.
    ///
    /// Answers are withheld and only the first `hints_revealed` hints are included.
    pub fn public_view(&self, hints_revealed: u32) -> PublicRiddle {
        PublicRiddle {
            day: self.day,
            question: self.question.clone(),
            kind: self.kind,
            choices: self.choices.clone(),
            hints: self
                .hints
                .iter()
                .take(hints_revealed as usize)
                .cloned()
                .collect(),
            hints_total: self.hint_count(),
            image_url: self.image_url.clone(),
        }
    }
}

/// Riddle without its answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicRiddle {
    pub day: u32,
    pub question: String,
    #[serde(rename = "type")]
    pub kind: RiddleKind,
    pub choices: Vec<String>,
    pub hints: Vec<String>,
    pub hints_total: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Progress on a single calendar door.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoorState {
    pub day: u32,
    pub opened: bool,
    pub solved: bool,
    pub attempts: u32,
    pub hints_revealed: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub riddle: Option<Riddle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solved_at: Option<DateTime<Utc>>,
}

impl DoorState {
    /// Fresh, unopened door.
    pub fn new(day: u32) -> Self {
        Self {
            day,
            opened: false,
            solved: false,
            attempts: 0,
            hints_revealed: 0,
            riddle: None,
            solved_at: None,
        }
    }
}

/// Calendar progress, keyed by day.
pub type Progress = BTreeMap<u32, DoorState>;
