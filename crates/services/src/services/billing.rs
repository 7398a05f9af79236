//! Payment plans, due-date alerts and the yearly financial report.

use std::sync::Arc;

use chrono::{Datelike, Months, NaiveDate, Utc};
use db::{
    Store,
    models::payment::{
        MonthlyRevenue, Payment, PaymentAlert, PaymentAlertKind, PaymentStatus, PendingPayment,
    },
};
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

const INSTALLMENTS_PER_PLAN: u32 = 12;
/// Installments fall due on the 5th of each month.
const DUE_DAY: u32 = 5;
/// Pending payments surface as alerts this many days before they fall due.
const UPCOMING_WINDOW_DAYS: i64 = 5;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

#[derive(Debug, Error, PartialEq)]
pub enum BillingError {
    #[error("student {0} not found")]
    StudentNotFound(Uuid),
    #[error("payment {0} not found")]
    PaymentNotFound(Uuid),
}

#[derive(Clone)]
pub struct BillingService {
    store: Arc<Store>,
}

impl BillingService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Generates the student's yearly plan: 12 monthly installments of the
    /// configured monthly fee, due on the 5th, starting in the month they
    /// joined. Installments start out pending; marking paid is manual.
    pub fn generate_yearly_plan(&self, student_id: Uuid) -> Result<Vec<Payment>, BillingError> {
        let student = self
            .store
            .find_student(student_id)
            .ok_or(BillingError::StudentNotFound(student_id))?;
        let amount = self.store.settings().monthly_fee;

        let first_due =
            NaiveDate::from_ymd_opt(student.join_date.year(), student.join_date.month(), DUE_DAY)
                .expect("day 5 exists in every month");

        let payments: Vec<Payment> = (0..INSTALLMENTS_PER_PLAN)
            .map(|i| Payment {
                id: Uuid::new_v4(),
                student_id,
                amount,
                status: PaymentStatus::Pending,
                due_date: first_due + Months::new(i),
                description: format!("Mensalidade {}/{}", i + 1, INSTALLMENTS_PER_PLAN),
                installment_number: Some(i + 1),
                total_installments: Some(INSTALLMENTS_PER_PLAN),
            })
            .collect();

        info!(%student_id, installments = payments.len(), "yearly payment plan generated");
        self.store.insert_payments(payments.clone());
        Ok(payments)
    }

    pub fn payments(&self, student_id: Option<Uuid>) -> Vec<Payment> {
        self.store.list_payments(student_id)
    }

    pub fn mark_paid(&self, payment_id: Uuid) -> Result<Payment, BillingError> {
        self.store
            .mark_payment_paid(payment_id)
            .ok_or(BillingError::PaymentNotFound(payment_id))
    }

    /// Admin view: every payment that is overdue, due today or due within
    /// the next five days, ordered overdue first, then by how close the due
    /// date is.
    pub fn payment_alerts(&self) -> Vec<PaymentAlert> {
        self.payment_alerts_at(Utc::now().date_naive())
    }

    fn payment_alerts_at(&self, today: NaiveDate) -> Vec<PaymentAlert> {
        let mut alerts: Vec<PaymentAlert> = self
            .store
            .list_payments(None)
            .into_iter()
            .filter_map(|payment| {
                let student = self.store.find_student(payment.student_id)?;
                let (kind, days_diff) = classify(&payment, today)?;
                Some(PaymentAlert {
                    student_id: student.id,
                    student_name: student.name,
                    payment,
                    kind,
                    days_diff,
                })
            })
            .collect();
        alerts.sort_by(|a, b| a.kind.cmp(&b.kind).then(a.days_diff.cmp(&b.days_diff)));
        alerts
    }

    /// Student dashboard view of the same classification.
    pub fn pending_payments(&self, student_id: Uuid) -> Vec<PendingPayment> {
        self.pending_payments_at(student_id, Utc::now().date_naive())
    }

    fn pending_payments_at(&self, student_id: Uuid, today: NaiveDate) -> Vec<PendingPayment> {
        let mut pending: Vec<PendingPayment> = self
            .store
            .list_payments(Some(student_id))
            .into_iter()
            .filter_map(|payment| {
                let (kind, days_diff) = classify(&payment, today)?;
                Some(PendingPayment {
                    payment,
                    kind,
                    days_diff,
                })
            })
            .collect();
        pending.sort_by(|a, b| a.kind.cmp(&b.kind).then(a.days_diff.cmp(&b.days_diff)));
        pending
    }

    /// Revenue per month for one year, counting paid installments only.
    pub fn financial_report(&self, year: i32) -> Vec<MonthlyRevenue> {
        let mut months: Vec<MonthlyRevenue> = MONTH_NAMES
            .iter()
            .map(|name| MonthlyRevenue {
                name: (*name).to_string(),
                paid_count: 0,
                revenue: 0.0,
            })
            .collect();

        for payment in self.store.list_payments(None) {
            if payment.status != PaymentStatus::Paid || payment.due_date.year() != year {
                continue;
            }
            let idx = payment.due_date.month0() as usize;
            months[idx].revenue += payment.amount;
            months[idx].paid_count += 1;
        }

        months
    }
}

/// Maps a payment to its alert classification, if it needs attention today:
/// overdue status, due today, or due within the upcoming window.
fn classify(payment: &Payment, today: NaiveDate) -> Option<(PaymentAlertKind, i64)> {
    let days_until_due = (payment.due_date - today).num_days();
    match payment.status {
        PaymentStatus::Overdue => Some((PaymentAlertKind::Overdue, days_until_due.abs())),
        PaymentStatus::Pending if days_until_due == 0 => Some((PaymentAlertKind::Today, 0)),
        PaymentStatus::Pending if (1..=UPCOMING_WINDOW_DAYS).contains(&days_until_due) => {
            Some((PaymentAlertKind::Upcoming, days_until_due))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use db::models::student::CreateStudent;

    use super::*;

    fn setup_with_student(join_date: NaiveDate) -> (Arc<Store>, BillingService, Uuid) {
        let store = Arc::new(Store::new());
        let student = store.create_student(CreateStudent {
            name: "Ana Souza".to_string(),
            email: "ana@exemplo.com".to_string(),
            role: None,
            avatar_url: None,
            join_date,
            phone_number: None,
            birth_date: None,
            address: None,
        });
        let billing = BillingService::new(store.clone());
        (store, billing, student.id)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn yearly_plan_has_twelve_installments_due_the_fifth() {
        let (_, billing, student_id) = setup_with_student(date(2024, 3, 18));
        let plan = billing.generate_yearly_plan(student_id).unwrap();

        assert_eq!(plan.len(), 12);
        assert_eq!(plan[0].due_date, date(2024, 3, 5));
        assert_eq!(plan[11].due_date, date(2025, 2, 5));
        for (i, payment) in plan.iter().enumerate() {
            assert_eq!(payment.due_date.day(), 5);
            assert_eq!(payment.status, PaymentStatus::Pending);
            assert_eq!(payment.amount, 150.0);
            assert_eq!(payment.description, format!("Mensalidade {}/12", i + 1));
        }
    }

    #[test]
    fn plan_for_unknown_student_fails() {
        let store = Arc::new(Store::new());
        let billing = BillingService::new(store);
        let missing = Uuid::new_v4();
        assert_eq!(
            billing.generate_yearly_plan(missing),
            Err(BillingError::StudentNotFound(missing))
        );
    }

    #[test]
    fn classify_covers_overdue_today_and_upcoming() {
        let today = date(2024, 6, 10);
        let mut payment = Payment {
            id: Uuid::new_v4(),
            student_id: Uuid::new_v4(),
            amount: 150.0,
            status: PaymentStatus::Pending,
            due_date: today,
            description: String::new(),
            installment_number: None,
            total_installments: None,
        };

        assert_eq!(classify(&payment, today), Some((PaymentAlertKind::Today, 0)));

        payment.due_date = date(2024, 6, 13);
        assert_eq!(
            classify(&payment, today),
            Some((PaymentAlertKind::Upcoming, 3))
        );

        // Outside the five-day window: no alert yet.
        payment.due_date = date(2024, 6, 20);
        assert_eq!(classify(&payment, today), None);

        payment.status = PaymentStatus::Overdue;
        payment.due_date = date(2024, 6, 1);
        assert_eq!(
            classify(&payment, today),
            Some((PaymentAlertKind::Overdue, 9))
        );

        payment.status = PaymentStatus::Paid;
        assert_eq!(classify(&payment, today), None);
    }

    #[test]
    fn alerts_sort_overdue_first_then_by_distance() {
        let (store, billing, student_id) = setup_with_student(date(2024, 1, 1));
        let today = date(2024, 6, 10);
        let mk = |due: NaiveDate, status: PaymentStatus| Payment {
            id: Uuid::new_v4(),
            student_id,
            amount: 150.0,
            status,
            due_date: due,
            description: String::new(),
            installment_number: None,
            total_installments: None,
        };
        store.insert_payments(vec![
            mk(date(2024, 6, 14), PaymentStatus::Pending),
            mk(date(2024, 6, 5), PaymentStatus::Overdue),
            mk(date(2024, 6, 10), PaymentStatus::Pending),
            mk(date(2024, 6, 12), PaymentStatus::Pending),
        ]);

        let kinds: Vec<PaymentAlertKind> = billing
            .payment_alerts_at(today)
            .into_iter()
            .map(|a| a.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                PaymentAlertKind::Overdue,
                PaymentAlertKind::Today,
                PaymentAlertKind::Upcoming,
                PaymentAlertKind::Upcoming,
            ]
        );

        let upcoming_diffs: Vec<i64> = billing
            .payment_alerts_at(today)
            .into_iter()
            .filter(|a| a.kind == PaymentAlertKind::Upcoming)
            .map(|a| a.days_diff)
            .collect();
        assert_eq!(upcoming_diffs, vec![2, 4]);
    }

    #[test]
    fn pending_payments_only_include_own_student() {
        let (store, billing, student_id) = setup_with_student(date(2024, 1, 1));
        let other = Uuid::new_v4();
        let today = date(2024, 6, 10);
        store.insert_payments(vec![
            Payment {
                id: Uuid::new_v4(),
                student_id,
                amount: 150.0,
                status: PaymentStatus::Overdue,
                due_date: date(2024, 6, 1),
                description: String::new(),
                installment_number: None,
                total_installments: None,
            },
            Payment {
                id: Uuid::new_v4(),
                student_id: other,
                amount: 150.0,
                status: PaymentStatus::Overdue,
                due_date: date(2024, 6, 1),
                description: String::new(),
                installment_number: None,
                total_installments: None,
            },
        ]);

        let pending = billing.pending_payments_at(student_id, today);
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].payment.student_id, student_id);
    }

    #[test]
    fn financial_report_counts_only_paid_installments() {
        let (store, billing, student_id) = setup_with_student(date(2024, 1, 1));
        let plan = billing.generate_yearly_plan(student_id).unwrap();
        store.mark_payment_paid(plan[0].id).unwrap(); // Jan
        store.mark_payment_paid(plan[2].id).unwrap(); // Mar

        let report = billing.financial_report(2024);
        assert_eq!(report.len(), 12);
        assert_eq!(report[0].name, "Jan");
        assert_eq!(report[0].paid_count, 1);
        assert_eq!(report[0].revenue, 150.0);
        assert_eq!(report[1].paid_count, 0);
        assert_eq!(report[2].revenue, 150.0);

        // Other years see none of it.
        assert!(billing.financial_report(2023).iter().all(|m| m.paid_count == 0));
    }
}
