use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Studio-level configuration: identity used on documents plus the monthly
/// fee the billing plan generator reads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
pub struct AcademySettings {
    pub name: String,
    pub cnpj: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub representative_name: String,
    pub monthly_fee: f64,
    /// Registration gate; students need this code to sign up.
    pub invite_code: String,
}

impl Default for AcademySettings {
    fn default() -> Self {
        Self {
            name: "Studio - Funcional & Corrida".to_string(),
            cnpj: String::new(),
            address: String::new(),
            phone: String::new(),
            email: String::new(),
            representative_name: String::new(),
            monthly_fee: 150.0,
            invite_code: "PERSONAL2024".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct UpdateAcademySettings {
    pub name: Option<String>,
    pub cnpj: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub representative_name: Option<String>,
    pub monthly_fee: Option<f64>,
    pub invite_code: Option<String>,
}
