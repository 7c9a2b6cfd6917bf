//! Exercise handlers - CRUD and grouping operations.

use std::collections::BTreeMap;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use liftlog_core::{Exercise, ExerciseDraft};

use crate::error::HttpError;
use crate::state::AppState;

/// List all exercises.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Exercise>>, HttpError> {
    Ok(Json(state.exercises.list().await?))
}

/// Get a single exercise by id.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Exercise>, HttpError> {
    state
        .exercises
        .get(&id)
        .await?
        .map(Json)
        .ok_or_else(|| HttpError::NotFound(format!("Exercise not found: {id}")))
}

/// Create a new exercise.
pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<ExerciseDraft>,
) -> Result<(StatusCode, Json<Exercise>), HttpError> {
    let exercise = state.exercises.create(draft).await?;
    Ok((StatusCode::CREATED, Json(exercise)))
}

/// Replace an existing exercise.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<ExerciseDraft>,
) -> Result<Json<Exercise>, HttpError> {
    state
        .exercises
        .update(&id, draft)
        .await?
        .map(Json)
        .ok_or_else(|| HttpError::NotFound(format!("Exercise not found: {id}")))
}

/// Delete an exercise.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, HttpError> {
    if state.exercises.delete(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(HttpError::NotFound(format!("Exercise not found: {id}")))
    }
}

/// Exercises assigned to a specific week.
pub async fn by_week(
    State(state): State<AppState>,
    Path(week_number): Path<i32>,
) -> Result<Json<Vec<Exercise>>, HttpError> {
    Ok(Json(state.exercises.by_week(week_number).await?))
}

/// Exercises in a category (case-insensitive).
pub async fn by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<Exercise>>, HttpError> {
    Ok(Json(state.exercises.by_category(&category).await?))
}

/// All exercises grouped by category.
pub async fn grouped_by_category(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, Vec<Exercise>>>, HttpError> {
    Ok(Json(state.exercises.grouped_by_category().await?))
}

/// All exercises grouped by week number.
///
/// Week numbers become JSON object keys, so they serialize as strings.
pub async fn grouped_by_week(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<i32, Vec<Exercise>>>, HttpError> {
    Ok(Json(state.exercises.grouped_by_week().await?))
}
