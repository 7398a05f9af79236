//! Routes for the class schedule and the roster operations.

use axum::{
    Router,
    extract::{Path, State},
    response::Json as ResponseJson,
    routing::{get, post},
};
use db::models::class_session::{
    AttendanceStats, ClassSession, CreateClassSession, EnrollOutcome, UnenrollResponse,
    UpdateClassSession,
};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utils::response::ApiResponse;
use uuid::Uuid;

use crate::{AppState, error::ApiError};

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct RosterActionRequest {
    pub student_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct RateClassRequest {
    pub student_id: Uuid,
    pub rating: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct SaveAttendanceRequest {
    pub present_student_ids: Vec<Uuid>,
}

/// GET /api/classes
pub async fn get_classes(
    State(state): State<AppState>,
) -> Result<ResponseJson<ApiResponse<Vec<ClassSession>>>, ApiError> {
    Ok(ResponseJson(ApiResponse::success(state.roster().sessions())))
}

/// POST /api/classes
pub async fn create_class(
    State(state): State<AppState>,
    axum::Json(payload): axum::Json<CreateClassSession>,
) -> Result<ResponseJson<ApiResponse<ClassSession>>, ApiError> {
    if payload.max_capacity == 0 {
        return Err(ApiError::InvalidCapacity);
    }
    let session = state.store().create_class_session(payload);
    Ok(ResponseJson(ApiResponse::success(session)))
}

/// GET /api/classes/{class_id}
pub async fn get_class(
    State(state): State<AppState>,
    Path(class_id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<ClassSession>>, ApiError> {
    let session = state
        .store()
        .find_class_session(class_id)
        .ok_or(ApiError::NotFound("class session"))?;
    Ok(ResponseJson(ApiResponse::success(session)))
}

/// PUT /api/classes/{class_id}
pub async fn update_class(
    State(state): State<AppState>,
    Path(class_id): Path<Uuid>,
    axum::Json(payload): axum::Json<UpdateClassSession>,
) -> Result<ResponseJson<ApiResponse<ClassSession>>, ApiError> {
    if payload.max_capacity == Some(0) {
        return Err(ApiError::InvalidCapacity);
    }
    let session = state
        .store()
        .update_class_session(class_id, payload)
        .ok_or(ApiError::NotFound("class session"))?;
    Ok(ResponseJson(ApiResponse::success(session)))
}

/// DELETE /api/classes/{class_id}
pub async fn delete_class(
    State(state): State<AppState>,
    Path(class_id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<()>>, ApiError> {
    if !state.store().delete_class_session(class_id) {
        return Err(ApiError::NotFound("class session"));
    }
    Ok(ResponseJson(ApiResponse::success(())))
}

/// POST /api/classes/{class_id}/enroll
pub async fn enroll(
    State(state): State<AppState>,
    Path(class_id): Path<Uuid>,
    axum::Json(payload): axum::Json<RosterActionRequest>,
) -> Result<ResponseJson<ApiResponse<EnrollOutcome>>, ApiError> {
    let outcome = state.roster().enroll(class_id, payload.student_id)?;
    Ok(ResponseJson(ApiResponse::success(outcome)))
}

/// POST /api/classes/{class_id}/unenroll
///
/// The roster returns who (if anyone) was promoted from the waitlist; the
/// notification goes out here, not inside the roster.
pub async fn unenroll(
    State(state): State<AppState>,
    Path(class_id): Path<Uuid>,
    axum::Json(payload): axum::Json<RosterActionRequest>,
) -> Result<ResponseJson<ApiResponse<UnenrollResponse>>, ApiError> {
    let response = state
        .roster()
        .unenroll_with_promotion(class_id, payload.student_id)?;

    if let Some(promoted_id) = response.promoted_student_id {
        let class_title = state
            .store()
            .find_class_session(class_id)
            .map(|s| s.title)
            .unwrap_or_default();
        let student_name = state
            .store()
            .find_student(promoted_id)
            .map(|s| s.name)
            .unwrap_or_else(|| promoted_id.to_string());
        state
            .notifications()
            .notify(
                "Seat available",
                &format!("{} was promoted from the waitlist of '{}'", student_name, class_title),
            )
            .await;
    }

    Ok(ResponseJson(ApiResponse::success(response)))
}

/// POST /api/classes/{class_id}/waitlist/join
pub async fn join_waitlist(
    State(state): State<AppState>,
    Path(class_id): Path<Uuid>,
    axum::Json(payload): axum::Json<RosterActionRequest>,
) -> Result<ResponseJson<ApiResponse<bool>>, ApiError> {
    let changed = state.roster().join_waitlist(class_id, payload.student_id)?;
    Ok(ResponseJson(ApiResponse::success(changed)))
}

/// POST /api/classes/{class_id}/waitlist/leave
pub async fn leave_waitlist(
    State(state): State<AppState>,
    Path(class_id): Path<Uuid>,
    axum::Json(payload): axum::Json<RosterActionRequest>,
) -> Result<ResponseJson<ApiResponse<bool>>, ApiError> {
    let changed = state.roster().leave_waitlist(class_id, payload.student_id)?;
    Ok(ResponseJson(ApiResponse::success(changed)))
}

/// GET /api/classes/{class_id}/attendance
pub async fn get_attendance(
    State(state): State<AppState>,
    Path(class_id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<Vec<Uuid>>>, ApiError> {
    let present = state.roster().attendance(class_id)?;
    Ok(ResponseJson(ApiResponse::success(present)))
}

/// PUT /api/classes/{class_id}/attendance
pub async fn save_attendance(
    State(state): State<AppState>,
    Path(class_id): Path<Uuid>,
    axum::Json(payload): axum::Json<SaveAttendanceRequest>,
) -> Result<ResponseJson<ApiResponse<()>>, ApiError> {
    state
        .roster()
        .save_attendance(class_id, payload.present_student_ids)?;
    Ok(ResponseJson(ApiResponse::success(())))
}

/// POST /api/classes/{class_id}/rate
pub async fn rate_class(
    State(state): State<AppState>,
    Path(class_id): Path<Uuid>,
    axum::Json(payload): axum::Json<RateClassRequest>,
) -> Result<ResponseJson<ApiResponse<()>>, ApiError> {
    state
        .roster()
        .rate_class(class_id, payload.student_id, payload.rating)?;
    Ok(ResponseJson(ApiResponse::success(())))
}

/// GET /api/students/{student_id}/attendance-stats
pub async fn attendance_stats(
    State(state): State<AppState>,
    Path(student_id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<AttendanceStats>>, ApiError> {
    if state.store().find_student(student_id).is_none() {
        return Err(ApiError::NotFound("student"));
    }
    Ok(ResponseJson(ApiResponse::success(
        state.roster().student_attendance_stats(student_id),
    )))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .nest(
            "/classes",
            Router::new()
                .route("/", get(get_classes).post(create_class))
                .route(
                    "/{class_id}",
                    get(get_class).put(update_class).delete(delete_class),
                )
                .route("/{class_id}/enroll", post(enroll))
                .route("/{class_id}/unenroll", post(unenroll))
                .route("/{class_id}/waitlist/join", post(join_waitlist))
                .route("/{class_id}/waitlist/leave", post(leave_waitlist))
                .route(
                    "/{class_id}/attendance",
                    get(get_attendance).put(save_attendance),
                )
                .route("/{class_id}/rate", post(rate_class)),
        )
        .route("/students/{student_id}/attendance-stats", get(attendance_stats))
}
