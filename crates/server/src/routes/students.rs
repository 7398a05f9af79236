//! Routes for the student directory and medical intake forms.

use axum::{
    Router,
    extract::{Path, State},
    response::Json as ResponseJson,
    routing::{get, put},
};
use chrono::Utc;
use db::models::student::{Anamnesis, CreateStudent, Student, UpdateStudent};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utils::response::ApiResponse;
use uuid::Uuid;

use crate::{AppState, error::ApiError};

/// Anamnesis payload; `updated_at` is stamped server-side.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct SaveAnamnesisRequest {
    pub has_injury: bool,
    pub injury_description: Option<String>,
    pub takes_medication: bool,
    pub medication_description: Option<String>,
    pub had_surgery: bool,
    pub surgery_description: Option<String>,
    pub has_heart_condition: bool,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub blood_type: Option<String>,
    pub notes: Option<String>,
}

/// GET /api/students
pub async fn get_students(
    State(state): State<AppState>,
) -> Result<ResponseJson<ApiResponse<Vec<Student>>>, ApiError> {
    Ok(ResponseJson(ApiResponse::success(
        state.store().list_students(),
    )))
}

/// POST /api/students
///
/// Registration also opens the student's yearly payment plan.
pub async fn create_student(
    State(state): State<AppState>,
    axum::Json(payload): axum::Json<CreateStudent>,
) -> Result<ResponseJson<ApiResponse<Student>>, ApiError> {
    let student = state.store().create_student(payload);
    state.billing().generate_yearly_plan(student.id)?;
    Ok(ResponseJson(ApiResponse::success(student)))
}

/// GET /api/students/{student_id}
pub async fn get_student(
    State(state): State<AppState>,
    Path(student_id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<Student>>, ApiError> {
    let student = state
        .store()
        .find_student(student_id)
        .ok_or(ApiError::NotFound("student"))?;
    Ok(ResponseJson(ApiResponse::success(student)))
}

/// PUT /api/students/{student_id}
pub async fn update_student(
    State(state): State<AppState>,
    Path(student_id): Path<Uuid>,
    axum::Json(payload): axum::Json<UpdateStudent>,
) -> Result<ResponseJson<ApiResponse<Student>>, ApiError> {
    let student = state
        .store()
        .update_student(student_id, payload)
        .ok_or(ApiError::NotFound("student"))?;
    Ok(ResponseJson(ApiResponse::success(student)))
}

/// DELETE /api/students/{student_id}
pub async fn delete_student(
    State(state): State<AppState>,
    Path(student_id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<()>>, ApiError> {
    if !state.store().delete_student(student_id) {
        return Err(ApiError::NotFound("student"));
    }
    Ok(ResponseJson(ApiResponse::success(())))
}

/// PUT /api/students/{student_id}/anamnesis
pub async fn save_anamnesis(
    State(state): State<AppState>,
    Path(student_id): Path<Uuid>,
    axum::Json(payload): axum::Json<SaveAnamnesisRequest>,
) -> Result<ResponseJson<ApiResponse<Student>>, ApiError> {
    let anamnesis = Anamnesis {
        has_injury: payload.has_injury,
        injury_description: payload.injury_description,
        takes_medication: payload.takes_medication,
        medication_description: payload.medication_description,
        had_surgery: payload.had_surgery,
        surgery_description: payload.surgery_description,
        has_heart_condition: payload.has_heart_condition,
        emergency_contact_name: payload.emergency_contact_name,
        emergency_contact_phone: payload.emergency_contact_phone,
        blood_type: payload.blood_type,
        notes: payload.notes,
        updated_at: Utc::now(),
    };
    let student = state
        .store()
        .save_anamnesis(student_id, anamnesis)
        .ok_or(ApiError::NotFound("student"))?;
    Ok(ResponseJson(ApiResponse::success(student)))
}

/// GET /api/students/birthdays
pub async fn birthdays_today(
    State(state): State<AppState>,
) -> Result<ResponseJson<ApiResponse<Vec<Student>>>, ApiError> {
    use chrono::Datelike;
    let today = Utc::now().date_naive();
    Ok(ResponseJson(ApiResponse::success(
        state.store().students_with_birthday(today.month(), today.day()),
    )))
}

pub fn router() -> Router<AppState> {
    Router::new().nest(
        "/students",
        Router::new()
            .route("/", get(get_students).post(create_student))
            .route("/birthdays", get(birthdays_today))
            .route(
                "/{student_id}",
                get(get_student).put(update_student).delete(delete_student),
            )
            .route("/{student_id}/anamnesis", put(save_anamnesis)),
    )
}
