//! Routes for personalized workout sheets.

use axum::{
    Router,
    extract::{Path, Query, State},
    response::Json as ResponseJson,
    routing::{get, put},
};
use db::models::workout::{
    CreatePersonalizedWorkout, PersonalizedWorkout, UpdatePersonalizedWorkout,
};
use serde::Deserialize;
use utils::response::ApiResponse;
use uuid::Uuid;

use crate::{AppState, error::ApiError};

#[derive(Debug, Deserialize)]
pub struct WorkoutsQuery {
    /// Present for students (only workouts shared with them); absent for
    /// admins, who see everything.
    pub student_id: Option<Uuid>,
}

/// GET /api/workouts?student_id=...
pub async fn get_workouts(
    State(state): State<AppState>,
    Query(query): Query<WorkoutsQuery>,
) -> Result<ResponseJson<ApiResponse<Vec<PersonalizedWorkout>>>, ApiError> {
    Ok(ResponseJson(ApiResponse::success(
        state.store().list_workouts(query.student_id),
    )))
}

/// POST /api/workouts
pub async fn create_workout(
    State(state): State<AppState>,
    axum::Json(payload): axum::Json<CreatePersonalizedWorkout>,
) -> Result<ResponseJson<ApiResponse<PersonalizedWorkout>>, ApiError> {
    Ok(ResponseJson(ApiResponse::success(
        state.store().create_workout(payload),
    )))
}

/// PUT /api/workouts/{workout_id}
pub async fn update_workout(
    State(state): State<AppState>,
    Path(workout_id): Path<Uuid>,
    axum::Json(payload): axum::Json<UpdatePersonalizedWorkout>,
) -> Result<ResponseJson<ApiResponse<PersonalizedWorkout>>, ApiError> {
    let workout = state
        .store()
        .update_workout(workout_id, payload)
        .ok_or(ApiError::NotFound("workout"))?;
    Ok(ResponseJson(ApiResponse::success(workout)))
}

/// DELETE /api/workouts/{workout_id}
pub async fn delete_workout(
    State(state): State<AppState>,
    Path(workout_id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<()>>, ApiError> {
    if !state.store().delete_workout(workout_id) {
        return Err(ApiError::NotFound("workout"));
    }
    Ok(ResponseJson(ApiResponse::success(())))
}

pub fn router() -> Router<AppState> {
    Router::new().nest(
        "/workouts",
        Router::new()
            .route("/", get(get_workouts).post(create_workout))
            .route("/{workout_id}", put(update_workout).delete(delete_workout)),
    )
}
