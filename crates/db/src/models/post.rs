use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Social feed entry. Author name/avatar are denormalized at post time so the
/// feed renders without joining against the student directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
pub struct Post {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub user_avatar: Option<String>,
    pub image_url: String,
    pub caption: String,
    pub likes: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreatePost {
    pub user_id: Uuid,
    pub user_name: String,
    pub user_avatar: Option<String>,
    pub image_url: String,
    pub caption: String,
}
