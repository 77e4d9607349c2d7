//! Grading of riddle submissions.

use crate::matching::is_correct_answer;
use crate::types::{Riddle, RiddleKind};
use serde::{Deserialize, Serialize};

/// Result of grading one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Whether the submission is accepted.
    pub correct: bool,
    /// The riddle kind that decided how it was graded.
    pub kind: RiddleKind,
}

/// Grade a submission against a riddle.
///
/// Choice riddles require the exact choice text; free-text riddles are
/// fuzzy matched against the canonical answer and its alternates.
pub fn grade(riddle: &Riddle, submission: &str) -> Verdict {
    let correct = match riddle.kind {
        RiddleKind::Choice => submission == riddle.answer,
        RiddleKind::Text => {
            is_correct_answer(submission, &riddle.answer, &riddle.alternate_answers)
        }
    };

    Verdict {
        correct,
        kind: riddle.kind,
    }
}
