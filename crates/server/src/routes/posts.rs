//! Routes for the social feed.

use axum::{
    Router,
    extract::{Path, State},
    response::Json as ResponseJson,
    routing::{get, post},
};
use db::models::post::{CreatePost, Post};
use utils::response::ApiResponse;
use uuid::Uuid;

use crate::{AppState, error::ApiError};

/// GET /api/posts
pub async fn get_posts(
    State(state): State<AppState>,
) -> Result<ResponseJson<ApiResponse<Vec<Post>>>, ApiError> {
    Ok(ResponseJson(ApiResponse::success(state.store().list_posts())))
}

/// POST /api/posts
pub async fn create_post(
    State(state): State<AppState>,
    axum::Json(payload): axum::Json<CreatePost>,
) -> Result<ResponseJson<ApiResponse<Post>>, ApiError> {
    Ok(ResponseJson(ApiResponse::success(
        state.store().create_post(payload),
    )))
}

/// POST /api/posts/{post_id}/like
pub async fn like_post(
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<Post>>, ApiError> {
    let liked = state
        .store()
        .like_post(post_id)
        .ok_or(ApiError::NotFound("post"))?;
    Ok(ResponseJson(ApiResponse::success(liked)))
}

pub fn router() -> Router<AppState> {
    Router::new().nest(
        "/posts",
        Router::new()
            .route("/", get(get_posts).post(create_post))
            .route("/{post_id}/like", post(like_post)),
    )
}
