//! Door endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{NaiveDate, Utc};

use advent_core::{door_date, grade, validate};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/doors/{day}
pub async fn open(
    State(state): State<AppState>,
    Path(day): Path<u32>,
) -> Result<Json<DoorResponse>> {
    let opens_on = calendar_date(day, state.calendar_year)?;
    let today = state.clock.today();
    if today < opens_on {
        return Err(ApiError::Locked(format!("door {} opens on {}", day, opens_on)));
    }

    let cached = state.store.get(day).await.riddle;
    let riddle = match cached {
        Some(riddle) => riddle,
        None => fetch_riddle(&state, day).await?,
    };

    let door = state.store.open_door(day, riddle).await?;
    tracing::info!("Opened door {}", day);

    Ok(Json(door_response(&door)?))
}

/// POST /api/doors/{day}/hints
pub async fn reveal_hint(
    State(state): State<AppState>,
    Path(day): Path<u32>,
) -> Result<Json<DoorResponse>> {
    calendar_date(day, state.calendar_year)?;

    let door = state.store.reveal_hint(day).await?;
    Ok(Json(door_response(&door)?))
}

/// POST /api/doors/{day}/answer
pub async fn answer(
    State(state): State<AppState>,
    Path(day): Path<u32>,
    Json(payload): Json<AnswerRequest>,
) -> Result<Json<AnswerResponse>> {
    calendar_date(day, state.calendar_year)?;

    let riddle = state
        .store
        .get(day)
        .await
        .riddle
        .ok_or_else(|| ApiError::BadRequest(format!("door {} has not been opened", day)))?;

    let verdict = grade(&riddle, &payload.answer);
    tracing::debug!(
        "Graded {} answer for door {}: correct={}",
        verdict.kind.as_str(),
        day,
        verdict.correct
    );

    let door = state
        .store
        .record_attempt(day, verdict.correct, Utc::now())
        .await?;
    if verdict.correct {
        tracing::info!("Door {} solved after {} attempts", day, door.attempts);
    }

    Ok(Json(AnswerResponse {
        correct: verdict.correct,
        door: DoorView::from(&door),
    }))
}

fn calendar_date(day: u32, year: i32) -> Result<NaiveDate> {
    door_date(day, year).ok_or_else(|| ApiError::NotFound(format!("door {}", day)))
}

async fn fetch_riddle(state: &AppState, day: u32) -> Result<Riddle> {
    let riddle = state.riddles.riddle_for_day(day).await.inspect_err(|e| {
        tracing::warn!("Riddle provider failed for day {}: {}", day, e);
    })?;

    validate(&riddle)?;
    if riddle.day != day {
        return Err(ApiError::Provider(format!(
            "asked for day {} but got riddle for day {}",
            day, riddle.day
        )));
    }

    Ok(riddle)
}

fn door_response(door: &DoorState) -> Result<DoorResponse> {
    let riddle = door
        .riddle
        .as_ref()
        .ok_or_else(|| ApiError::BadRequest(format!("door {} has not been opened", door.day)))?;

    Ok(DoorResponse {
        door: DoorView::from(door),
        riddle: riddle.public_view(door.hints_revealed),
    })
}
