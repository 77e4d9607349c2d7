//! Calendar endpoints

use axum::{extract::State, Json};

use advent_core::{door_date, is_door_unlocked, DOOR_COUNT};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/calendar
pub async fn get(State(state): State<AppState>) -> Result<Json<CalendarResponse>> {
    let year = state.calendar_year;
    let today = state.clock.today();
    let progress = state.store.all().await;

    let mut doors = Vec::with_capacity(DOOR_COUNT as usize);
    for day in 1..=DOOR_COUNT {
        let opens_on = door_date(day, year)
            .ok_or_else(|| ApiError::BadRequest(format!("no December {} in year {}", day, year)))?;
        let door = progress.get(&day);

        doors.push(DoorSummary {
            day,
            opens_on,
            unlocked: is_door_unlocked(day, year, today),
            opened: door.is_some_and(|d| d.opened),
            solved: door.is_some_and(|d| d.solved),
        });
    }

    Ok(Json(CalendarResponse { year, today, doors }))
}
