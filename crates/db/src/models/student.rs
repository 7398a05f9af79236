use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use ts_rs::TS;
use uuid::Uuid;

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, TS, EnumString, Display, Default,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    Student,
    Guest,
}

/// Medical intake form filled in on registration or during onboarding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
pub struct Anamnesis {
    pub has_injury: bool,
    pub injury_description: Option<String>,
    pub takes_medication: bool,
    pub medication_description: Option<String>,
    pub had_surgery: bool,
    pub surgery_description: Option<String>,
    pub has_heart_condition: bool,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub blood_type: Option<String>,
    pub notes: Option<String>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
pub struct Student {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub avatar_url: Option<String>,
    pub join_date: NaiveDate,
    /// WhatsApp contact, international format.
    pub phone_number: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub address: Option<String>,
    pub anamnesis: Option<Anamnesis>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreateStudent {
    pub name: String,
    pub email: String,
    pub role: Option<UserRole>,
    pub avatar_url: Option<String>,
    pub join_date: NaiveDate,
    pub phone_number: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct UpdateStudent {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
    pub avatar_url: Option<String>,
    pub phone_number: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub address: Option<String>,
}
