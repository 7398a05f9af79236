//! Routes for suggested running courses.

use axum::{
    Router,
    extract::{Path, State},
    response::Json as ResponseJson,
    routing::{get, put},
};
use db::models::running_route::{CreateRunningRoute, RunningRoute};
use utils::response::ApiResponse;
use uuid::Uuid;

use crate::{AppState, error::ApiError};

/// GET /api/routes
pub async fn get_routes(
    State(state): State<AppState>,
) -> Result<ResponseJson<ApiResponse<Vec<RunningRoute>>>, ApiError> {
    Ok(ResponseJson(ApiResponse::success(
        state.store().list_running_routes(),
    )))
}

/// POST /api/routes
pub async fn create_route(
    State(state): State<AppState>,
    axum::Json(payload): axum::Json<CreateRunningRoute>,
) -> Result<ResponseJson<ApiResponse<RunningRoute>>, ApiError> {
    Ok(ResponseJson(ApiResponse::success(
        state.store().create_running_route(payload),
    )))
}

/// PUT /api/routes/{route_id}
pub async fn update_route(
    State(state): State<AppState>,
    Path(route_id): Path<Uuid>,
    axum::Json(mut payload): axum::Json<RunningRoute>,
) -> Result<ResponseJson<ApiResponse<RunningRoute>>, ApiError> {
    payload.id = route_id;
    if !state.store().replace_running_route(payload.clone()) {
        return Err(ApiError::NotFound("running route"));
    }
    Ok(ResponseJson(ApiResponse::success(payload)))
}

/// DELETE /api/routes/{route_id}
pub async fn delete_route(
    State(state): State<AppState>,
    Path(route_id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<()>>, ApiError> {
    if !state.store().delete_running_route(route_id) {
        return Err(ApiError::NotFound("running route"));
    }
    Ok(ResponseJson(ApiResponse::success(())))
}

pub fn router() -> Router<AppState> {
    Router::new().nest(
        "/routes",
        Router::new()
            .route("/", get(get_routes).post(create_route))
            .route("/{route_id}", put(update_route).delete(delete_route)),
    )
}
