//! Test fixtures and factory functions for creating test data.

use chrono::NaiveDate;
use serde_json::json;

/// Year the test calendar runs in.
pub const YEAR: i32 = 2025;

/// December date in the test year.
pub fn december(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(YEAR, 12, day).unwrap()
}

/// Riddle catalog covering days 1, 2, 3 and 24.
///
/// Day 1 is a text riddle with alternates and two hints, day 2 a choice
/// riddle, day 3 a short text riddle and day 24 a long one.
pub fn sample_catalog() -> String {
    json!([
        {
            "day": 1,
            "question": "Wer bringt an Heiligabend die Geschenke?",
            "type": "text",
            "answer": "Weihnachtsmann",
            "alternate_answers": ["Nikolaus", "Santa"],
            "hints": ["Er hat einen weissen Bart.", "Er faehrt Schlitten."],
            "image_url": "https://example.org/day1.png"
        },
        {
            "day": 2,
            "question": "Welche Farbe hat Rudolphs Nase?",
            "type": "choice",
            "choices": ["A", "B", "C"],
            "answer": "A"
        },
        {
            "day": 3,
            "question": "Was sagt man, wenn man zustimmt?",
            "answer": "Ja"
        },
        {
            "day": 24,
            "question": "Was baut man im Winter aus Schnee?",
            "answer": "Schneemann"
        }
    ])
    .to_string()
}

/// Create an answer request body.
pub fn answer_request(answer: &str) -> serde_json::Value {
    json!({ "answer": answer })
}
