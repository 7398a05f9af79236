//! Roster manager: class enrollment, waitlist, attendance and ratings.
//!
//! All mutations of one session run under that session's store entry guard,
//! so removal-and-promotion is a single atomic transition and two callers can
//! never double-book a freed seat. Unrelated sessions are mutated in
//! parallel.

use std::{collections::HashSet, sync::Arc};

use db::{
    Store,
    models::class_session::{
        AttendanceStats, ClassFeedback, ClassSession, EnrollOutcome, UnenrollResponse,
    },
};
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Debug, Error, PartialEq)]
pub enum RosterError {
    #[error("class session {0} not found")]
    SessionNotFound(Uuid),
    #[error("invalid rating {0}: must be an integer between 1 and 10")]
    InvalidRating(i32),
}

/// Policy knobs for behavior the roster deliberately leaves configurable.
#[derive(Debug, Clone)]
pub struct RosterPolicy {
    /// Whether a student may join the waitlist while seats are still open.
    /// On by default: some students queue for a class they expect to fill.
    /// When off, the join is a silent no-op like the other precondition
    /// violations.
    pub allow_waitlist_when_open: bool,
}

impl Default for RosterPolicy {
    fn default() -> Self {
        Self {
            allow_waitlist_when_open: true,
        }
    }
}

#[derive(Clone)]
pub struct RosterService {
    store: Arc<Store>,
    policy: RosterPolicy,
}

impl RosterService {
    pub fn new(store: Arc<Store>) -> Self {
        Self::with_policy(store, RosterPolicy::default())
    }

    pub fn with_policy(store: Arc<Store>, policy: RosterPolicy) -> Self {
        Self { store, policy }
    }

    /// Read accessor for the full schedule.
    pub fn sessions(&self) -> Vec<ClassSession> {
        self.store.list_class_sessions()
    }

    /// Enrolls the student unless they already hold a seat or the class is
    /// full. A full class is a no-op, not an auto-redirect to the waitlist;
    /// the caller decides whether to offer the queue.
    pub fn enroll(&self, session_id: Uuid, student_id: Uuid) -> Result<EnrollOutcome, RosterError> {
        let outcome = self
            .store
            .with_class_session_mut(session_id, |session| {
                if session.is_enrolled(student_id) {
                    return EnrollOutcome::AlreadyEnrolled;
                }
                if session.is_full() {
                    return EnrollOutcome::ClassFull;
                }
                session.enrolled_student_ids.push(student_id);
                // Enrolled and waitlisted are mutually exclusive states.
                session.waitlist_student_ids.retain(|id| *id != student_id);
                EnrollOutcome::Enrolled
            })
            .ok_or(RosterError::SessionNotFound(session_id))?;

        debug!(%session_id, %student_id, outcome = %outcome, "enroll");
        Ok(outcome)
    }

    /// Removes the student from the enrolled list and, when a seat is open
    /// and the waitlist is non-empty, promotes the head of the waitlist
    /// (earliest joiner wins) in the same transition. Returns the promoted
    /// id so the caller can notify them; the roster itself never sends
    /// notifications.
    pub fn unenroll_with_promotion(
        &self,
        session_id: Uuid,
        student_id: Uuid,
    ) -> Result<UnenrollResponse, RosterError> {
        let response = self
            .store
            .with_class_session_mut(session_id, |session| {
                let before = session.enrolled_student_ids.len();
                session.enrolled_student_ids.retain(|id| *id != student_id);
                let removed = session.enrolled_student_ids.len() < before;

                let mut promoted = None;
                if !session.is_full() && !session.waitlist_student_ids.is_empty() {
                    let next = session.waitlist_student_ids.remove(0);
                    session.enrolled_student_ids.push(next);
                    promoted = Some(next);
                }

                UnenrollResponse {
                    removed,
                    promoted_student_id: promoted,
                }
            })
            .ok_or(RosterError::SessionNotFound(session_id))?;

        if let Some(promoted) = response.promoted_student_id {
            info!(%session_id, promoted_student_id = %promoted, "waitlist promotion");
        }
        Ok(response)
    }

    /// Appends the student to the end of the waitlist (FIFO). No-ops when
    /// they are already queued or already enrolled, or when seats are open
    /// and policy forbids queueing early. Returns whether the list changed.
    pub fn join_waitlist(&self, session_id: Uuid, student_id: Uuid) -> Result<bool, RosterError> {
        let policy = &self.policy;
        self.store
            .with_class_session_mut(session_id, |session| {
                if session.is_waitlisted(student_id) || session.is_enrolled(student_id) {
                    return false;
                }
                if !policy.allow_waitlist_when_open && !session.is_full() {
                    debug!(%session_id, %student_id, "waitlist join skipped, seats open");
                    return false;
                }
                session.waitlist_student_ids.push(student_id);
                true
            })
            .ok_or(RosterError::SessionNotFound(session_id))
    }

    /// Removes the student from the waitlist if queued. Never promotes.
    pub fn leave_waitlist(&self, session_id: Uuid, student_id: Uuid) -> Result<bool, RosterError> {
        self.store
            .with_class_session_mut(session_id, |session| {
                let before = session.waitlist_student_ids.len();
                session.waitlist_student_ids.retain(|id| *id != student_id);
                session.waitlist_student_ids.len() < before
            })
            .ok_or(RosterError::SessionNotFound(session_id))
    }

    /// Wholesale replaces the session's roll call. Duplicates collapse and
    /// order is irrelevant; ids are not checked against the enrolled list
    /// (the caller owns that).
    pub fn save_attendance(
        &self,
        session_id: Uuid,
        present_student_ids: Vec<Uuid>,
    ) -> Result<(), RosterError> {
        if self.store.find_class_session(session_id).is_none() {
            return Err(RosterError::SessionNotFound(session_id));
        }
        let present: HashSet<Uuid> = present_student_ids.into_iter().collect();
        debug!(%session_id, present = present.len(), "attendance saved");
        self.store.save_attendance(session_id, present);
        Ok(())
    }

    pub fn attendance(&self, session_id: Uuid) -> Result<Vec<Uuid>, RosterError> {
        if self.store.find_class_session(session_id).is_none() {
            return Err(RosterError::SessionNotFound(session_id));
        }
        Ok(self
            .store
            .attendance_for(session_id)
            .map(|set| set.into_iter().collect())
            .unwrap_or_default())
    }

    /// Records the student's perceived-exertion rating for the class,
    /// overwriting any previous rating they left. Ratings outside [1, 10]
    /// are rejected here rather than stored unchecked.
    pub fn rate_class(
        &self,
        session_id: Uuid,
        student_id: Uuid,
        rating: i32,
    ) -> Result<(), RosterError> {
        if !(1..=10).contains(&rating) {
            return Err(RosterError::InvalidRating(rating));
        }
        self.store
            .with_class_session_mut(session_id, |session| {
                match session
                    .feedback
                    .iter_mut()
                    .find(|f| f.student_id == student_id)
                {
                    Some(entry) => entry.rating = rating,
                    None => session.feedback.push(ClassFeedback { student_id, rating }),
                }
            })
            .ok_or(RosterError::SessionNotFound(session_id))
    }

    /// Attendance summary across every class the student is enrolled in.
    ///
    /// Policy: a class whose roll call has never been taken counts the
    /// student as present. Absence of a roll call is optimistic, not
    /// penalizing. With no enrollments at all the percentage is 100.
    pub fn student_attendance_stats(&self, student_id: Uuid) -> AttendanceStats {
        let mut total_classes = 0u32;
        let mut present_count = 0u32;

        for session in self.store.list_class_sessions() {
            if !session.is_enrolled(student_id) {
                continue;
            }
            total_classes += 1;
            match self.store.attendance_for(session.id) {
                Some(present) => {
                    if present.contains(&student_id) {
                        present_count += 1;
                    }
                }
                None => present_count += 1,
            }
        }

        let percentage = if total_classes > 0 {
            ((present_count as f64 / total_classes as f64) * 100.0).round() as u32
        } else {
            100
        };

        AttendanceStats {
            percentage,
            total_classes,
            present_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;
    use db::models::class_session::{ClassType, CreateClassSession, DayOfWeek};

    use super::*;

    fn setup() -> (Arc<Store>, RosterService) {
        let store = Arc::new(Store::new());
        let roster = RosterService::new(store.clone());
        (store, roster)
    }

    fn make_session(store: &Store, max_capacity: u32) -> Uuid {
        store
            .create_class_session(CreateClassSession {
                title: "Funcional".to_string(),
                description: String::new(),
                day_of_week: DayOfWeek::Monday,
                start_time: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
                duration_minutes: 60,
                instructor: "Alexandre".to_string(),
                max_capacity,
                class_type: ClassType::Functional,
                wod: None,
            })
            .id
    }

    fn session(store: &Store, id: Uuid) -> ClassSession {
        store.find_class_session(id).unwrap()
    }

    #[test]
    fn enroll_appends_until_capacity() {
        let (store, roster) = setup();
        let sid = make_session(&store, 2);
        let (s1, s2, s3) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());

        assert_eq!(roster.enroll(sid, s1).unwrap(), EnrollOutcome::Enrolled);
        assert_eq!(roster.enroll(sid, s2).unwrap(), EnrollOutcome::Enrolled);
        // Full class: silent no-op, not an error, and no auto-waitlist.
        assert_eq!(roster.enroll(sid, s3).unwrap(), EnrollOutcome::ClassFull);

        let s = session(&store, sid);
        assert_eq!(s.enrolled_student_ids, vec![s1, s2]);
        assert!(s.waitlist_student_ids.is_empty());
        assert!(s.enrolled_student_ids.len() <= s.max_capacity as usize);
    }

    #[test]
    fn enroll_is_idempotent() {
        let (store, roster) = setup();
        let sid = make_session(&store, 5);
        let s1 = Uuid::new_v4();

        roster.enroll(sid, s1).unwrap();
        assert_eq!(
            roster.enroll(sid, s1).unwrap(),
            EnrollOutcome::AlreadyEnrolled
        );
        assert_eq!(session(&store, sid).enrolled_student_ids, vec![s1]);
    }

    #[test]
    fn enroll_removes_student_from_waitlist() {
        let (store, roster) = setup();
        let sid = make_session(&store, 2);
        let s1 = Uuid::new_v4();

        roster.join_waitlist(sid, s1).unwrap();
        roster.enroll(sid, s1).unwrap();

        let s = session(&store, sid);
        assert_eq!(s.enrolled_student_ids, vec![s1]);
        // Never in both lists at once.
        assert!(s.waitlist_student_ids.is_empty());
    }

    #[test]
    fn unenroll_promotes_waitlist_head() {
        let (store, roster) = setup();
        let sid = make_session(&store, 2);
        let (s1, s2, s3, s4) = (
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
        );
        roster.enroll(sid, s1).unwrap();
        roster.enroll(sid, s2).unwrap();
        roster.join_waitlist(sid, s3).unwrap();
        roster.join_waitlist(sid, s4).unwrap();

        let response = roster.unenroll_with_promotion(sid, s1).unwrap();
        assert!(response.removed);
        assert_eq!(response.promoted_student_id, Some(s3));

        let s = session(&store, sid);
        assert_eq!(s.enrolled_student_ids, vec![s2, s3]);
        assert_eq!(s.waitlist_student_ids, vec![s4]);
    }

    #[test]
    fn waitlist_drains_in_fifo_order() {
        let (store, roster) = setup();
        let sid = make_session(&store, 2);
        let (s1, s2, s3, s4) = (
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
        );
        roster.enroll(sid, s1).unwrap();
        roster.enroll(sid, s2).unwrap();
        roster.join_waitlist(sid, s3).unwrap();
        roster.join_waitlist(sid, s4).unwrap();

        roster.unenroll_with_promotion(sid, s1).unwrap();
        roster.unenroll_with_promotion(sid, s2).unwrap();

        let s = session(&store, sid);
        assert_eq!(s.enrolled_student_ids, vec![s3, s4]);
        assert!(s.waitlist_student_ids.is_empty());
    }

    #[test]
    fn unenroll_with_empty_waitlist_promotes_nobody() {
        let (store, roster) = setup();
        let sid = make_session(&store, 2);
        let s1 = Uuid::new_v4();
        roster.enroll(sid, s1).unwrap();

        let response = roster.unenroll_with_promotion(sid, s1).unwrap();
        assert!(response.removed);
        assert_eq!(response.promoted_student_id, None);

        let s = session(&store, sid);
        assert!(s.enrolled_student_ids.is_empty());
        assert!(s.waitlist_student_ids.is_empty());
    }

    #[test]
    fn unenroll_of_absent_student_reports_no_removal() {
        let (store, roster) = setup();
        let sid = make_session(&store, 2);
        let s1 = Uuid::new_v4();
        roster.enroll(sid, s1).unwrap();

        let response = roster.unenroll_with_promotion(sid, Uuid::new_v4()).unwrap();
        assert!(!response.removed);
        assert_eq!(session(&store, sid).enrolled_student_ids, vec![s1]);
    }

    #[test]
    fn promotion_never_exceeds_capacity() {
        let (store, roster) = setup();
        let sid = make_session(&store, 1);
        let (s1, s2, s3) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        roster.enroll(sid, s1).unwrap();
        roster.join_waitlist(sid, s2).unwrap();
        roster.join_waitlist(sid, s3).unwrap();

        roster.unenroll_with_promotion(sid, s1).unwrap();

        let s = session(&store, sid);
        assert_eq!(s.enrolled_student_ids, vec![s2]);
        assert_eq!(s.waitlist_student_ids, vec![s3]);
        assert!(s.enrolled_student_ids.len() <= s.max_capacity as usize);
    }

    #[test]
    fn waitlist_join_is_duplicate_free() {
        let (store, roster) = setup();
        let sid = make_session(&store, 1);
        let s1 = Uuid::new_v4();

        assert!(roster.join_waitlist(sid, s1).unwrap());
        assert!(!roster.join_waitlist(sid, s1).unwrap());
        assert_eq!(session(&store, sid).waitlist_student_ids, vec![s1]);
    }

    #[test]
    fn waitlist_join_while_seats_open_follows_policy() {
        let store = Arc::new(Store::new());
        let strict = RosterService::with_policy(
            store.clone(),
            RosterPolicy {
                allow_waitlist_when_open: false,
            },
        );
        let sid = make_session(&store, 2);
        let s1 = Uuid::new_v4();

        // Seats open and the knob is off: silent no-op.
        assert!(!strict.join_waitlist(sid, s1).unwrap());
        assert!(session(&store, sid).waitlist_student_ids.is_empty());

        // Default policy permits queueing early.
        let relaxed = RosterService::new(store.clone());
        assert!(relaxed.join_waitlist(sid, s1).unwrap());
    }

    #[test]
    fn leave_waitlist_never_promotes() {
        let (store, roster) = setup();
        let sid = make_session(&store, 1);
        let (s1, s2, s3) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        roster.enroll(sid, s1).unwrap();
        roster.join_waitlist(sid, s2).unwrap();
        roster.join_waitlist(sid, s3).unwrap();

        assert!(roster.leave_waitlist(sid, s2).unwrap());
        assert!(!roster.leave_waitlist(sid, s2).unwrap());

        let s = session(&store, sid);
        assert_eq!(s.enrolled_student_ids, vec![s1]);
        assert_eq!(s.waitlist_student_ids, vec![s3]);
    }

    #[test]
    fn unknown_session_is_an_error() {
        let (_, roster) = setup();
        let missing = Uuid::new_v4();
        assert_eq!(
            roster.enroll(missing, Uuid::new_v4()),
            Err(RosterError::SessionNotFound(missing))
        );
        assert_eq!(
            roster.unenroll_with_promotion(missing, Uuid::new_v4()),
            Err(RosterError::SessionNotFound(missing))
        );
    }

    #[test]
    fn attendance_collapses_duplicates() {
        let (store, roster) = setup();
        let sid = make_session(&store, 5);
        let s1 = Uuid::new_v4();

        roster.save_attendance(sid, vec![s1, s1, s1]).unwrap();
        assert_eq!(roster.attendance(sid).unwrap(), vec![s1]);
    }

    #[test]
    fn attendance_save_is_wholesale_replace() {
        let (store, roster) = setup();
        let sid = make_session(&store, 5);
        let (s1, s2) = (Uuid::new_v4(), Uuid::new_v4());

        roster.save_attendance(sid, vec![s1]).unwrap();
        roster.save_attendance(sid, vec![s2]).unwrap();
        // Only the latest roll call is retained.
        assert_eq!(roster.attendance(sid).unwrap(), vec![s2]);
    }

    #[test]
    fn rating_overwrites_previous_value() {
        let (store, roster) = setup();
        let sid = make_session(&store, 5);
        let s1 = Uuid::new_v4();
        roster.enroll(sid, s1).unwrap();

        roster.rate_class(sid, s1, 6).unwrap();
        roster.rate_class(sid, s1, 9).unwrap();

        let s = session(&store, sid);
        assert_eq!(s.feedback.len(), 1);
        assert_eq!(s.rating_for(s1), Some(9));
    }

    #[test]
    fn rating_out_of_range_is_rejected() {
        let (store, roster) = setup();
        let sid = make_session(&store, 5);
        let s1 = Uuid::new_v4();

        assert_eq!(
            roster.rate_class(sid, s1, 0),
            Err(RosterError::InvalidRating(0))
        );
        assert_eq!(
            roster.rate_class(sid, s1, 11),
            Err(RosterError::InvalidRating(11))
        );
        assert!(session(&store, sid).feedback.is_empty());
    }

    #[test]
    fn attendance_stats_count_missing_roll_call_as_present() {
        let (store, roster) = setup();
        let with_roll_call = make_session(&store, 5);
        let without_roll_call = make_session(&store, 5);
        let s1 = Uuid::new_v4();
        roster.enroll(with_roll_call, s1).unwrap();
        roster.enroll(without_roll_call, s1).unwrap();

        // Roll call taken, student absent; the other class never had one.
        roster
            .save_attendance(with_roll_call, vec![Uuid::new_v4()])
            .unwrap();

        let stats = roster.student_attendance_stats(s1);
        assert_eq!(stats.total_classes, 2);
        assert_eq!(stats.present_count, 1);
        assert_eq!(stats.percentage, 50);
    }

    #[test]
    fn attendance_stats_skip_deleted_sessions() {
        let (store, roster) = setup();
        let kept = make_session(&store, 5);
        let deleted = make_session(&store, 5);
        let s1 = Uuid::new_v4();
        roster.enroll(kept, s1).unwrap();
        roster.enroll(deleted, s1).unwrap();

        // Present in the kept class, absent in the one about to go away.
        roster.save_attendance(kept, vec![s1]).unwrap();
        roster.save_attendance(deleted, vec![Uuid::new_v4()]).unwrap();
        assert_eq!(roster.student_attendance_stats(s1).percentage, 50);

        assert!(store.delete_class_session(deleted));

        // The orphaned roll call no longer counts against the student.
        let stats = roster.student_attendance_stats(s1);
        assert_eq!(stats.total_classes, 1);
        assert_eq!(stats.present_count, 1);
        assert_eq!(stats.percentage, 100);
    }

    #[test]
    fn attendance_stats_with_no_enrollments_is_full_percentage() {
        let (_, roster) = setup();
        let stats = roster.student_attendance_stats(Uuid::new_v4());
        assert_eq!(stats.total_classes, 0);
        assert_eq!(stats.present_count, 0);
        assert_eq!(stats.percentage, 100);
    }

    #[test]
    fn enrolled_and_waitlist_stay_disjoint_under_churn() {
        let (store, roster) = setup();
        let sid = make_session(&store, 2);
        let students: Vec<Uuid> = (0..6).map(|_| Uuid::new_v4()).collect();

        for &s in &students[..2] {
            roster.enroll(sid, s).unwrap();
        }
        for &s in &students[2..] {
            roster.join_waitlist(sid, s).unwrap();
        }
        roster.unenroll_with_promotion(sid, students[0]).unwrap();
        roster.enroll(sid, students[5]).unwrap();
        roster.unenroll_with_promotion(sid, students[1]).unwrap();

        let s = session(&store, sid);
        assert!(s.enrolled_student_ids.len() <= s.max_capacity as usize);
        for id in &s.enrolled_student_ids {
            assert!(!s.waitlist_student_ids.contains(id));
        }
        let unique: HashSet<&Uuid> = s.enrolled_student_ids.iter().collect();
        assert_eq!(unique.len(), s.enrolled_student_ids.len());
    }
}
