use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::services::{billing::BillingError, roster::RosterError};
use thiserror::Error;
use utils::response::ApiResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Roster(#[from] RosterError),
    #[error(transparent)]
    Billing(#[from] BillingError),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("max capacity must be a positive integer")]
    InvalidCapacity,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Roster(RosterError::SessionNotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Roster(RosterError::InvalidRating(_)) => StatusCode::BAD_REQUEST,
            ApiError::Billing(_) => StatusCode::NOT_FOUND,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidCapacity => StatusCode::BAD_REQUEST,
        };
        let message = self.to_string();
        tracing::warn!(status = %status, "request failed: {}", message);
        (status, Json(ApiResponse::<()>::error(&message))).into_response()
    }
}
