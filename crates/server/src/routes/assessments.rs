//! Routes for physical assessments.

use axum::{
    Router,
    extract::{Path, Query, State},
    response::Json as ResponseJson,
    routing::{get, put},
};
use db::models::assessment::{Assessment, CreateAssessment};
use serde::Deserialize;
use utils::response::ApiResponse;
use uuid::Uuid;

use crate::{AppState, error::ApiError};

#[derive(Debug, Deserialize)]
pub struct AssessmentsQuery {
    pub student_id: Option<Uuid>,
}

/// GET /api/assessments?student_id=...
pub async fn get_assessments(
    State(state): State<AppState>,
    Query(query): Query<AssessmentsQuery>,
) -> Result<ResponseJson<ApiResponse<Vec<Assessment>>>, ApiError> {
    Ok(ResponseJson(ApiResponse::success(
        state.store().list_assessments(query.student_id),
    )))
}

/// POST /api/assessments
pub async fn create_assessment(
    State(state): State<AppState>,
    axum::Json(payload): axum::Json<CreateAssessment>,
) -> Result<ResponseJson<ApiResponse<Assessment>>, ApiError> {
    if state.store().find_student(payload.student_id).is_none() {
        return Err(ApiError::NotFound("student"));
    }
    Ok(ResponseJson(ApiResponse::success(
        state.store().create_assessment(payload),
    )))
}

/// PUT /api/assessments/{assessment_id}
pub async fn update_assessment(
    State(state): State<AppState>,
    Path(assessment_id): Path<Uuid>,
    axum::Json(mut payload): axum::Json<Assessment>,
) -> Result<ResponseJson<ApiResponse<Assessment>>, ApiError> {
    payload.id = assessment_id;
    if !state.store().replace_assessment(payload.clone()) {
        return Err(ApiError::NotFound("assessment"));
    }
    Ok(ResponseJson(ApiResponse::success(payload)))
}

/// DELETE /api/assessments/{assessment_id}
pub async fn delete_assessment(
    State(state): State<AppState>,
    Path(assessment_id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<()>>, ApiError> {
    if !state.store().delete_assessment(assessment_id) {
        return Err(ApiError::NotFound("assessment"));
    }
    Ok(ResponseJson(ApiResponse::success(())))
}

pub fn router() -> Router<AppState> {
    Router::new().nest(
        "/assessments",
        Router::new()
            .route("/", get(get_assessments).post(create_assessment))
            .route(
                "/{assessment_id}",
                put(update_assessment).delete(delete_assessment),
            ),
    )
}
