use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use ts_rs::TS;
use uuid::Uuid;

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, TS, EnumString, Display, Default,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RouteDifficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Suggested running course for the running classes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
pub struct RunningRoute {
    pub id: Uuid,
    pub title: String,
    pub distance_km: f64,
    pub description: String,
    pub map_link: String,
    pub difficulty: RouteDifficulty,
    pub elevation_gain_m: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreateRunningRoute {
    pub title: String,
    pub distance_km: f64,
    pub description: String,
    pub map_link: String,
    pub difficulty: RouteDifficulty,
    pub elevation_gain_m: u32,
}
