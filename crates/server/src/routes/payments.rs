//! Routes for billing: installments, alerts and the financial report.

use axum::{
    Router,
    extract::{Path, Query, State},
    response::Json as ResponseJson,
    routing::{get, post},
};
use db::models::payment::{MonthlyRevenue, Payment, PaymentAlert, PendingPayment};
use serde::Deserialize;
use utils::response::ApiResponse;
use uuid::Uuid;

use crate::{AppState, error::ApiError};

#[derive(Debug, Deserialize)]
pub struct PaymentsQuery {
    pub student_id: Option<Uuid>,
}

/// GET /api/payments?student_id=...
pub async fn get_payments(
    State(state): State<AppState>,
    Query(query): Query<PaymentsQuery>,
) -> Result<ResponseJson<ApiResponse<Vec<Payment>>>, ApiError> {
    Ok(ResponseJson(ApiResponse::success(
        state.billing().payments(query.student_id),
    )))
}

/// POST /api/payments/{payment_id}/mark-paid
pub async fn mark_paid(
    State(state): State<AppState>,
    Path(payment_id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<Payment>>, ApiError> {
    let payment = state.billing().mark_paid(payment_id)?;
    Ok(ResponseJson(ApiResponse::success(payment)))
}

/// GET /api/payments/alerts
pub async fn payment_alerts(
    State(state): State<AppState>,
) -> Result<ResponseJson<ApiResponse<Vec<PaymentAlert>>>, ApiError> {
    Ok(ResponseJson(ApiResponse::success(
        state.billing().payment_alerts(),
    )))
}

/// GET /api/students/{student_id}/pending-payments
pub async fn pending_payments(
    State(state): State<AppState>,
    Path(student_id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<Vec<PendingPayment>>>, ApiError> {
    if state.store().find_student(student_id).is_none() {
        return Err(ApiError::NotFound("student"));
    }
    Ok(ResponseJson(ApiResponse::success(
        state.billing().pending_payments(student_id),
    )))
}

/// GET /api/reports/financial/{year}
pub async fn financial_report(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> Result<ResponseJson<ApiResponse<Vec<MonthlyRevenue>>>, ApiError> {
    Ok(ResponseJson(ApiResponse::success(
        state.billing().financial_report(year),
    )))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .nest(
            "/payments",
            Router::new()
                .route("/", get(get_payments))
                .route("/alerts", get(payment_alerts))
                .route("/{payment_id}/mark-paid", post(mark_paid)),
        )
        .route("/students/{student_id}/pending-payments", get(pending_payments))
        .route("/reports/financial/{year}", get(financial_report))
}
