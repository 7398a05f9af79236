use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use ts_rs::TS;
use uuid::Uuid;

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, TS, EnumString, Display, Default,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ClassType {
    #[default]
    Functional,
    Running,
}

/// Weekday a recurring class is held on. Ordering matches the schedule grid.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    TS,
    EnumString,
    Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// One perceived-exertion rating (1-10) left by a student for a class.
/// A student has at most one entry per class; re-rating overwrites it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
pub struct ClassFeedback {
    pub student_id: Uuid,
    pub rating: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
pub struct ClassSession {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub day_of_week: DayOfWeek,
    pub start_time: NaiveTime,
    pub duration_minutes: u32,
    pub instructor: String,
    pub max_capacity: u32,
    /// Ordered, duplicate-free, never longer than `max_capacity`.
    pub enrolled_student_ids: Vec<Uuid>,
    /// FIFO queue, duplicate-free, disjoint from `enrolled_student_ids`.
    pub waitlist_student_ids: Vec<Uuid>,
    pub class_type: ClassType,
    pub is_cancelled: bool,
    /// Workout of the day, shown on the schedule card.
    pub wod: Option<String>,
    pub feedback: Vec<ClassFeedback>,
}

impl ClassSession {
    pub fn is_full(&self) -> bool {
        self.enrolled_student_ids.len() >= self.max_capacity as usize
    }

    pub fn is_enrolled(&self, student_id: Uuid) -> bool {
        self.enrolled_student_ids.contains(&student_id)
    }

    pub fn is_waitlisted(&self, student_id: Uuid) -> bool {
        self.waitlist_student_ids.contains(&student_id)
    }

    pub fn rating_for(&self, student_id: Uuid) -> Option<i32> {
        self.feedback
            .iter()
            .find(|f| f.student_id == student_id)
            .map(|f| f.rating)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreateClassSession {
    pub title: String,
    pub description: String,
    pub day_of_week: DayOfWeek,
    pub start_time: NaiveTime,
    pub duration_minutes: u32,
    pub instructor: String,
    pub max_capacity: u32,
    pub class_type: ClassType,
    pub wod: Option<String>,
}

/// Descriptive-field update. Roster state (enrolled, waitlist, feedback) is
/// never touched here; it only changes through the roster operations.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct UpdateClassSession {
    pub title: Option<String>,
    pub description: Option<String>,
    pub day_of_week: Option<DayOfWeek>,
    pub start_time: Option<NaiveTime>,
    pub duration_minutes: Option<u32>,
    pub instructor: Option<String>,
    pub max_capacity: Option<u32>,
    pub class_type: Option<ClassType>,
    pub is_cancelled: Option<bool>,
    pub wod: Option<String>,
}

/// Result of an enroll attempt. Full and already-enrolled are silent no-ops
/// rather than errors; the UI re-issues these freely.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, TS, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EnrollOutcome {
    Enrolled,
    AlreadyEnrolled,
    ClassFull,
}

/// Result of an unenroll. When the freed seat was filled from the waitlist,
/// `promoted_student_id` carries who got it so the caller can notify them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
pub struct UnenrollResponse {
    pub removed: bool,
    pub promoted_student_id: Option<Uuid>,
}

/// Attendance summary for one student across every class they are enrolled in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
pub struct AttendanceStats {
    pub percentage: u32,
    pub total_classes: u32,
    pub present_count: u32,
}
