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
pub enum PaymentStatus {
    Paid,
    #[default]
    Pending,
    Overdue,
}

/// One monthly installment of a student's plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
pub struct Payment {
    pub id: Uuid,
    pub student_id: Uuid,
    pub amount: f64,
    pub status: PaymentStatus,
    pub due_date: NaiveDate,
    pub description: String,
    pub installment_number: Option<u32>,
    pub total_installments: Option<u32>,
}

/// How close to (or past) its due date a payment is.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, TS, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PaymentAlertKind {
    Overdue,
    Today,
    Upcoming,
}

/// Admin-facing alert: a payment that is overdue or about to fall due.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct PaymentAlert {
    pub payment: Payment,
    pub student_id: Uuid,
    pub student_name: String,
    pub kind: PaymentAlertKind,
    /// Days overdue (for `Overdue`) or days until due (for `Upcoming`).
    pub days_diff: i64,
}

/// Student-facing pending item, same classification without student info.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct PendingPayment {
    pub payment: Payment,
    pub kind: PaymentAlertKind,
    pub days_diff: i64,
}

/// One month of the yearly financial report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
pub struct MonthlyRevenue {
    pub name: String,
    pub paid_count: u32,
    pub revenue: f64,
}
