use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Workout sheet written for specific students; only students in
/// `student_ids` (and admins) can see it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
pub struct PersonalizedWorkout {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub video_url: Option<String>,
    pub student_ids: Vec<Uuid>,
    pub instructor_name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreatePersonalizedWorkout {
    pub title: String,
    pub description: String,
    pub video_url: Option<String>,
    pub student_ids: Vec<Uuid>,
    pub instructor_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct UpdatePersonalizedWorkout {
    pub title: Option<String>,
    pub description: Option<String>,
    pub video_url: Option<String>,
    pub student_ids: Option<Vec<Uuid>>,
    pub instructor_name: Option<String>,
}
