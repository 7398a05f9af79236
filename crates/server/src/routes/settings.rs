//! Routes for studio settings and the collective challenge.

use axum::{
    Router,
    extract::State,
    response::Json as ResponseJson,
    routing::get,
};
use db::models::{
    challenge::ChallengeProgress,
    settings::{AcademySettings, UpdateAcademySettings},
};
use utils::response::ApiResponse;

use crate::{AppState, error::ApiError};

/// Collective distance logged so far. Run tracking is not wired up yet, so
/// the progress endpoint serves the demo aggregate.
const DEMO_TOTAL_KM: f64 = 12_500.0;

/// GET /api/settings
pub async fn get_settings(
    State(state): State<AppState>,
) -> Result<ResponseJson<ApiResponse<AcademySettings>>, ApiError> {
    Ok(ResponseJson(ApiResponse::success(state.store().settings())))
}

/// PUT /api/settings
pub async fn update_settings(
    State(state): State<AppState>,
    axum::Json(payload): axum::Json<UpdateAcademySettings>,
) -> Result<ResponseJson<ApiResponse<AcademySettings>>, ApiError> {
    Ok(ResponseJson(ApiResponse::success(
        state.store().update_settings(payload),
    )))
}

/// GET /api/challenge/progress
pub async fn challenge_progress(
    State(state): State<AppState>,
) -> Result<ResponseJson<ApiResponse<ChallengeProgress>>, ApiError> {
    let challenge = state
        .store()
        .challenge()
        .ok_or(ApiError::NotFound("challenge"))?;
    Ok(ResponseJson(ApiResponse::success(ChallengeProgress {
        challenge,
        total_value: DEMO_TOTAL_KM,
    })))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/settings", get(get_settings).put(update_settings))
        .route("/challenge/progress", get(challenge_progress))
}
