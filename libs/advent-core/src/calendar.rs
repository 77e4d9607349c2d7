//! Date gating for calendar doors.
//!
//! Door `n` opens on December `n` of the calendar year and stays open
//! afterwards.

use chrono::NaiveDate;

/// Number of doors in the calendar.
pub const DOOR_COUNT: u32 = 24;

/// Date on which a door opens, or `None` for days outside the calendar.
pub fn door_date(day: u32, year: i32) -> Option<NaiveDate> {
    if !(1..=DOOR_COUNT).contains(&day) {
        return None;
    }
    NaiveDate::from_ymd_opt(year, 12, day)
}

/// Check whether a door may be opened on `today`.
pub fn is_door_unlocked(day: u32, year: i32, today: NaiveDate) -> bool {
    door_date(day, year).is_some_and(|date| today >= date)
}

/// All days whose doors may be opened on `today`, in ascending order.
pub fn unlocked_days(year: i32, today: NaiveDate) -> Vec<u32> {
    (1..=DOOR_COUNT)
        .filter(|&day| is_door_unlocked(day, year, today))
        .collect()
}
