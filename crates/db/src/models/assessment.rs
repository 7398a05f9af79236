use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use ts_rs::TS;
use uuid::Uuid;

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, TS, EnumString, Display, Default,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AssessmentStatus {
    Done,
    #[default]
    Scheduled,
}

/// Free-form metric the instructor adds beyond the standard fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
pub struct CustomMetric {
    pub name: String,
    pub value: String,
    pub unit: String,
}

/// Circumference measurements in centimeters.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, TS)]
pub struct Circumferences {
    pub chest: Option<f64>,
    pub shoulders: Option<f64>,
    pub right_arm_relaxed: Option<f64>,
    pub left_arm_relaxed: Option<f64>,
    pub right_arm_contracted: Option<f64>,
    pub left_arm_contracted: Option<f64>,
    pub waist: Option<f64>,
    pub abdomen: Option<f64>,
    pub hips: Option<f64>,
    pub right_thigh: Option<f64>,
    pub left_thigh: Option<f64>,
    pub right_calf: Option<f64>,
    pub left_calf: Option<f64>,
}

/// Skinfold measurements in millimeters.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, TS)]
pub struct Skinfolds {
    pub triceps: Option<f64>,
    pub biceps: Option<f64>,
    pub subscapular: Option<f64>,
    pub suprailiac: Option<f64>,
    pub abdominal: Option<f64>,
    pub thigh: Option<f64>,
    pub calf: Option<f64>,
    pub midaxillary: Option<f64>,
    pub chest: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
pub struct Assessment {
    pub id: Uuid,
    pub student_id: Uuid,
    pub date: NaiveDate,
    pub status: AssessmentStatus,
    pub notes: String,
    pub custom_metrics: Vec<CustomMetric>,

    // Basic body composition
    pub weight_kg: f64,
    pub height_cm: f64,
    pub body_fat_percentage: f64,
    pub skeletal_muscle_mass: Option<f64>,
    pub visceral_fat_level: Option<u32>,
    pub basal_metabolic_rate: Option<u32>,
    pub hydration_percentage: Option<f64>,

    // Functional / performance
    pub vo2_max: Option<f64>,
    pub squat_max: Option<f64>,
    pub flexibility_sit_and_reach: Option<f64>,
    pub push_ups_count: Option<u32>,

    pub circumferences: Option<Circumferences>,
    pub skinfolds: Option<Skinfolds>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreateAssessment {
    pub student_id: Uuid,
    pub date: NaiveDate,
    pub status: AssessmentStatus,
    pub notes: String,
    pub custom_metrics: Option<Vec<CustomMetric>>,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub body_fat_percentage: f64,
    pub skeletal_muscle_mass: Option<f64>,
    pub visceral_fat_level: Option<u32>,
    pub basal_metabolic_rate: Option<u32>,
    pub hydration_percentage: Option<f64>,
    pub vo2_max: Option<f64>,
    pub squat_max: Option<f64>,
    pub flexibility_sit_and_reach: Option<f64>,
    pub push_ups_count: Option<u32>,
    pub circumferences: Option<Circumferences>,
    pub skinfolds: Option<Skinfolds>,
}
