//! Progress endpoints

use axum::{extract::State, Json};

use crate::models::*;
use crate::AppState;

/// GET /api/progress
pub async fn list(State(state): State<AppState>) -> Json<ProgressResponse> {
    let progress = state.store.all().await;
    Json(ProgressResponse {
        doors: progress.values().map(DoorView::from).collect(),
    })
}
