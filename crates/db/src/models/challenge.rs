use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Academy-wide collective goal (e.g. total kilometers run by everyone).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
pub struct Challenge {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub target_value: f64,
    pub unit: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct ChallengeProgress {
    pub challenge: Challenge,
    pub total_value: f64,
}
