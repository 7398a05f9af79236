pub mod models;
pub mod seed;

use std::{
    collections::HashSet,
    sync::RwLock,
};

use dashmap::DashMap;
use uuid::Uuid;

use crate::models::{
    assessment::{Assessment, CreateAssessment},
    challenge::Challenge,
    class_session::{ClassSession, CreateClassSession, UpdateClassSession},
    payment::{Payment, PaymentStatus},
    post::{CreatePost, Post},
    running_route::{CreateRunningRoute, RunningRoute},
    settings::{AcademySettings, UpdateAcademySettings},
    student::{Anamnesis, CreateStudent, Student, UpdateStudent},
    workout::{CreatePersonalizedWorkout, PersonalizedWorkout, UpdatePersonalizedWorkout},
};

/// In-memory record store. Every entity collection is owned here and mutated
/// only through these methods, so the roster invariants are enforced at a
/// single choke point and a durable backend can be substituted later without
/// touching calling code.
///
/// Collections are keyed by id in `DashMap`s; a `get_mut` guard serializes
/// all mutation of one record while leaving unrelated records free to be
/// mutated in parallel.
#[derive(Default)]
pub struct Store {
    students: DashMap<Uuid, Student>,
    class_sessions: DashMap<Uuid, ClassSession>,
    /// Latest roll call per session id. Wholesale overwritten on save; a
    /// deleted session's entry is simply orphaned (never read again).
    attendance: DashMap<Uuid, HashSet<Uuid>>,
    assessments: DashMap<Uuid, Assessment>,
    payments: DashMap<Uuid, Payment>,
    posts: DashMap<Uuid, Post>,
    workouts: DashMap<Uuid, PersonalizedWorkout>,
    running_routes: DashMap<Uuid, RunningRoute>,
    challenge: RwLock<Option<Challenge>>,
    settings: RwLock<AcademySettings>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    // ----- students -----

    pub fn create_student(&self, data: CreateStudent) -> Student {
        let student = Student {
            id: Uuid::new_v4(),
            name: data.name,
            email: data.email,
            role: data.role.unwrap_or_default(),
            avatar_url: data.avatar_url,
            join_date: data.join_date,
            phone_number: data.phone_number,
            birth_date: data.birth_date,
            address: data.address,
            anamnesis: None,
        };
        self.students.insert(student.id, student.clone());
        student
    }

    pub fn insert_student(&self, student: Student) {
        self.students.insert(student.id, student);
    }

    pub fn find_student(&self, id: Uuid) -> Option<Student> {
        self.students.get(&id).map(|s| s.clone())
    }

    pub fn list_students(&self) -> Vec<Student> {
        let mut students: Vec<Student> = self.students.iter().map(|s| s.clone()).collect();
        students.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        students
    }

    pub fn update_student(&self, id: Uuid, data: UpdateStudent) -> Option<Student> {
        let mut entry = self.students.get_mut(&id)?;
        if let Some(name) = data.name {
            entry.name = name;
        }
        if let Some(email) = data.email {
            entry.email = email;
        }
        if let Some(role) = data.role {
            entry.role = role;
        }
        if let Some(avatar_url) = data.avatar_url {
            entry.avatar_url = Some(avatar_url);
        }
        if let Some(phone_number) = data.phone_number {
            entry.phone_number = Some(phone_number);
        }
        if let Some(birth_date) = data.birth_date {
            entry.birth_date = Some(birth_date);
        }
        if let Some(address) = data.address {
            entry.address = Some(address);
        }
        Some(entry.clone())
    }

    pub fn delete_student(&self, id: Uuid) -> bool {
        self.students.remove(&id).is_some()
    }

    pub fn save_anamnesis(&self, student_id: Uuid, anamnesis: Anamnesis) -> Option<Student> {
        let mut entry = self.students.get_mut(&student_id)?;
        entry.anamnesis = Some(anamnesis);
        Some(entry.clone())
    }

    /// Students whose birthday falls on the given month/day, any year.
    pub fn students_with_birthday(&self, month: u32, day: u32) -> Vec<Student> {
        use chrono::Datelike;
        let mut matches: Vec<Student> = self
            .students
            .iter()
            .filter(|s| {
                s.birth_date
                    .map(|d| d.month() == month && d.day() == day)
                    .unwrap_or(false)
            })
            .map(|s| s.clone())
            .collect();
        matches.sort_by(|a, b| a.name.cmp(&b.name));
        matches
    }

    // ----- class sessions -----

    /// New sessions start with empty roster, waitlist and feedback.
    pub fn create_class_session(&self, data: CreateClassSession) -> ClassSession {
        let session = ClassSession {
            id: Uuid::new_v4(),
            title: data.title,
            description: data.description,
            day_of_week: data.day_of_week,
            start_time: data.start_time,
            duration_minutes: data.duration_minutes,
            instructor: data.instructor,
            max_capacity: data.max_capacity,
            enrolled_student_ids: Vec::new(),
            waitlist_student_ids: Vec::new(),
            class_type: data.class_type,
            is_cancelled: false,
            wod: data.wod,
            feedback: Vec::new(),
        };
        self.class_sessions.insert(session.id, session.clone());
        session
    }

    pub fn insert_class_session(&self, session: ClassSession) {
        self.class_sessions.insert(session.id, session);
    }

    pub fn find_class_session(&self, id: Uuid) -> Option<ClassSession> {
        self.class_sessions.get(&id).map(|s| s.clone())
    }

    pub fn list_class_sessions(&self) -> Vec<ClassSession> {
        let mut sessions: Vec<ClassSession> =
            self.class_sessions.iter().map(|s| s.clone()).collect();
        sessions.sort_by(|a, b| {
            a.day_of_week
                .cmp(&b.day_of_week)
                .then(a.start_time.cmp(&b.start_time))
                .then(a.title.cmp(&b.title))
        });
        sessions
    }

    /// Updates descriptive fields only; roster state is untouched. Lowering
    /// the capacity below the current enrollment does not evict anyone, it
    /// only blocks future enrolls.
    pub fn update_class_session(&self, id: Uuid, data: UpdateClassSession) -> Option<ClassSession> {
        let mut entry = self.class_sessions.get_mut(&id)?;
        if let Some(title) = data.title {
            entry.title = title;
        }
        if let Some(description) = data.description {
            entry.description = description;
        }
        if let Some(day_of_week) = data.day_of_week {
            entry.day_of_week = day_of_week;
        }
        if let Some(start_time) = data.start_time {
            entry.start_time = start_time;
        }
        if let Some(duration_minutes) = data.duration_minutes {
            entry.duration_minutes = duration_minutes;
        }
        if let Some(instructor) = data.instructor {
            entry.instructor = instructor;
        }
        if let Some(max_capacity) = data.max_capacity {
            entry.max_capacity = max_capacity;
        }
        if let Some(class_type) = data.class_type {
            entry.class_type = class_type;
        }
        if let Some(is_cancelled) = data.is_cancelled {
            entry.is_cancelled = is_cancelled;
        }
        if let Some(wod) = data.wod {
            entry.wod = Some(wod);
        }
        Some(entry.clone())
    }

    /// Removes the session. Its attendance record is left orphaned on
    /// purpose: it is keyed by session id and never consulted again.
    pub fn delete_class_session(&self, id: Uuid) -> bool {
        self.class_sessions.remove(&id).is_some()
    }

    /// Runs `f` under the session's entry guard. Everything the closure does
    /// is one atomic transition with respect to other operations on the same
    /// session; unrelated sessions are not blocked.
    pub fn with_class_session_mut<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut ClassSession) -> R,
    ) -> Option<R> {
        self.class_sessions.get_mut(&id).map(|mut entry| f(&mut entry))
    }

    // ----- attendance -----

    pub fn save_attendance(&self, session_id: Uuid, present: HashSet<Uuid>) {
        self.attendance.insert(session_id, present);
    }

    pub fn attendance_for(&self, session_id: Uuid) -> Option<HashSet<Uuid>> {
        self.attendance.get(&session_id).map(|a| a.clone())
    }

    // ----- assessments -----

    pub fn create_assessment(&self, data: CreateAssessment) -> Assessment {
        let assessment = Assessment {
            id: Uuid::new_v4(),
            student_id: data.student_id,
            date: data.date,
            status: data.status,
            notes: data.notes,
            custom_metrics: data.custom_metrics.unwrap_or_default(),
            weight_kg: data.weight_kg,
            height_cm: data.height_cm,
            body_fat_percentage: data.body_fat_percentage,
            skeletal_muscle_mass: data.skeletal_muscle_mass,
            visceral_fat_level: data.visceral_fat_level,
            basal_metabolic_rate: data.basal_metabolic_rate,
            hydration_percentage: data.hydration_percentage,
            vo2_max: data.vo2_max,
            squat_max: data.squat_max,
            flexibility_sit_and_reach: data.flexibility_sit_and_reach,
            push_ups_count: data.push_ups_count,
            circumferences: data.circumferences,
            skinfolds: data.skinfolds,
        };
        self.assessments.insert(assessment.id, assessment.clone());
        assessment
    }

    pub fn find_assessment(&self, id: Uuid) -> Option<Assessment> {
        self.assessments.get(&id).map(|a| a.clone())
    }

    /// Newest first; optionally narrowed to one student.
    pub fn list_assessments(&self, student_id: Option<Uuid>) -> Vec<Assessment> {
        let mut assessments: Vec<Assessment> = self
            .assessments
            .iter()
            .filter(|a| student_id.map(|id| a.student_id == id).unwrap_or(true))
            .map(|a| a.clone())
            .collect();
        assessments.sort_by(|a, b| b.date.cmp(&a.date).then(a.id.cmp(&b.id)));
        assessments
    }

    pub fn replace_assessment(&self, assessment: Assessment) -> bool {
        match self.assessments.get_mut(&assessment.id) {
            Some(mut entry) => {
                *entry = assessment;
                true
            }
            None => false,
        }
    }

    pub fn delete_assessment(&self, id: Uuid) -> bool {
        self.assessments.remove(&id).is_some()
    }

    // ----- payments -----

    pub fn insert_payments(&self, payments: Vec<Payment>) {
        for payment in payments {
            self.payments.insert(payment.id, payment);
        }
    }

    /// Ordered by due date; optionally narrowed to one student.
    pub fn list_payments(&self, student_id: Option<Uuid>) -> Vec<Payment> {
        let mut payments: Vec<Payment> = self
            .payments
            .iter()
            .filter(|p| student_id.map(|id| p.student_id == id).unwrap_or(true))
            .map(|p| p.clone())
            .collect();
        payments.sort_by(|a, b| {
            a.due_date
                .cmp(&b.due_date)
                .then(a.student_id.cmp(&b.student_id))
                .then(a.installment_number.cmp(&b.installment_number))
        });
        payments
    }

    pub fn mark_payment_paid(&self, id: Uuid) -> Option<Payment> {
        let mut entry = self.payments.get_mut(&id)?;
        entry.status = PaymentStatus::Paid;
        Some(entry.clone())
    }

    // ----- posts -----

    pub fn create_post(&self, data: CreatePost) -> Post {
        let post = Post {
            id: Uuid::new_v4(),
            user_id: data.user_id,
            user_name: data.user_name,
            user_avatar: data.user_avatar,
            image_url: data.image_url,
            caption: data.caption,
            likes: 0,
            created_at: chrono::Utc::now(),
        };
        self.posts.insert(post.id, post.clone());
        post
    }

    pub fn insert_post(&self, post: Post) {
        self.posts.insert(post.id, post);
    }

    /// Feed order: newest first.
    pub fn list_posts(&self) -> Vec<Post> {
        let mut posts: Vec<Post> = self.posts.iter().map(|p| p.clone()).collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        posts
    }

    pub fn like_post(&self, id: Uuid) -> Option<Post> {
        let mut entry = self.posts.get_mut(&id)?;
        entry.likes += 1;
        Some(entry.clone())
    }

    // ----- personalized workouts -----

    pub fn create_workout(&self, data: CreatePersonalizedWorkout) -> PersonalizedWorkout {
        let workout = PersonalizedWorkout {
            id: Uuid::new_v4(),
            title: data.title,
            description: data.description,
            video_url: data.video_url,
            student_ids: data.student_ids,
            instructor_name: data.instructor_name,
            created_at: chrono::Utc::now(),
        };
        self.workouts.insert(workout.id, workout.clone());
        workout
    }

    /// Admins (no filter) see everything; students see workouts shared with
    /// them.
    pub fn list_workouts(&self, student_id: Option<Uuid>) -> Vec<PersonalizedWorkout> {
        let mut workouts: Vec<PersonalizedWorkout> = self
            .workouts
            .iter()
            .filter(|w| {
                student_id
                    .map(|id| w.student_ids.contains(&id))
                    .unwrap_or(true)
            })
            .map(|w| w.clone())
            .collect();
        workouts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        workouts
    }

    pub fn update_workout(
        &self,
        id: Uuid,
        data: UpdatePersonalizedWorkout,
    ) -> Option<PersonalizedWorkout> {
        let mut entry = self.workouts.get_mut(&id)?;
        if let Some(title) = data.title {
            entry.title = title;
        }
        if let Some(description) = data.description {
            entry.description = description;
        }
        if let Some(video_url) = data.video_url {
            entry.video_url = Some(video_url);
        }
        if let Some(student_ids) = data.student_ids {
            entry.student_ids = student_ids;
        }
        if let Some(instructor_name) = data.instructor_name {
            entry.instructor_name = instructor_name;
        }
        Some(entry.clone())
    }

    pub fn delete_workout(&self, id: Uuid) -> bool {
        self.workouts.remove(&id).is_some()
    }

    // ----- running routes -----

    pub fn create_running_route(&self, data: CreateRunningRoute) -> RunningRoute {
        let route = RunningRoute {
            id: Uuid::new_v4(),
            title: data.title,
            distance_km: data.distance_km,
            description: data.description,
            map_link: data.map_link,
            difficulty: data.difficulty,
            elevation_gain_m: data.elevation_gain_m,
        };
        self.running_routes.insert(route.id, route.clone());
        route
    }

    pub fn list_running_routes(&self) -> Vec<RunningRoute> {
        let mut routes: Vec<RunningRoute> =
            self.running_routes.iter().map(|r| r.clone()).collect();
        routes.sort_by(|a, b| a.title.cmp(&b.title));
        routes
    }

    pub fn replace_running_route(&self, route: RunningRoute) -> bool {
        match self.running_routes.get_mut(&route.id) {
            Some(mut entry) => {
                *entry = route;
                true
            }
            None => false,
        }
    }

    pub fn delete_running_route(&self, id: Uuid) -> bool {
        self.running_routes.remove(&id).is_some()
    }

    // ----- challenge / settings -----

    pub fn set_challenge(&self, challenge: Challenge) {
        *self.challenge.write().expect("challenge lock poisoned") = Some(challenge);
    }

    pub fn challenge(&self) -> Option<Challenge> {
        self.challenge
            .read()
            .expect("challenge lock poisoned")
            .clone()
    }

    pub fn settings(&self) -> AcademySettings {
        self.settings.read().expect("settings lock poisoned").clone()
    }

    pub fn update_settings(&self, data: UpdateAcademySettings) -> AcademySettings {
        let mut settings = self.settings.write().expect("settings lock poisoned");
        if let Some(name) = data.name {
            settings.name = name;
        }
        if let Some(cnpj) = data.cnpj {
            settings.cnpj = cnpj;
        }
        if let Some(address) = data.address {
            settings.address = address;
        }
        if let Some(phone) = data.phone {
            settings.phone = phone;
        }
        if let Some(email) = data.email {
            settings.email = email;
        }
        if let Some(representative_name) = data.representative_name {
            settings.representative_name = representative_name;
        }
        if let Some(monthly_fee) = data.monthly_fee {
            settings.monthly_fee = monthly_fee;
        }
        if let Some(invite_code) = data.invite_code {
            settings.invite_code = invite_code;
        }
        settings.clone()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};

    use super::*;
    use crate::models::class_session::{ClassType, DayOfWeek};

    fn create_session_data(title: &str, day: DayOfWeek, hour: u32) -> CreateClassSession {
        CreateClassSession {
            title: title.to_string(),
            description: String::new(),
            day_of_week: day,
            start_time: NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
            duration_minutes: 60,
            instructor: "Alexandre".to_string(),
            max_capacity: 10,
            class_type: ClassType::Functional,
            wod: None,
        }
    }

    #[test]
    fn new_session_starts_with_empty_roster() {
        let store = Store::new();
        let session =
            store.create_class_session(create_session_data("Funcional", DayOfWeek::Monday, 7));
        assert!(session.enrolled_student_ids.is_empty());
        assert!(session.waitlist_student_ids.is_empty());
        assert!(session.feedback.is_empty());
        assert!(!session.is_cancelled);
    }

    #[test]
    fn sessions_list_sorted_by_day_then_time() {
        let store = Store::new();
        store.create_class_session(create_session_data("Corrida", DayOfWeek::Wednesday, 6));
        store.create_class_session(create_session_data("Funcional Tarde", DayOfWeek::Monday, 18));
        store.create_class_session(create_session_data("Funcional Manhã", DayOfWeek::Monday, 7));

        let titles: Vec<String> = store
            .list_class_sessions()
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(titles, ["Funcional Manhã", "Funcional Tarde", "Corrida"]);
    }

    #[test]
    fn update_session_preserves_roster_state() {
        let store = Store::new();
        let session =
            store.create_class_session(create_session_data("Funcional", DayOfWeek::Monday, 7));
        let student = Uuid::new_v4();
        store
            .with_class_session_mut(session.id, |s| s.enrolled_student_ids.push(student))
            .unwrap();

        let updated = store
            .update_class_session(
                session.id,
                UpdateClassSession {
                    title: Some("Funcional Intenso".to_string()),
                    description: None,
                    day_of_week: None,
                    start_time: None,
                    duration_minutes: None,
                    instructor: None,
                    max_capacity: Some(2),
                    class_type: None,
                    is_cancelled: Some(true),
                    wod: None,
                },
            )
            .unwrap();

        assert_eq!(updated.title, "Funcional Intenso");
        assert_eq!(updated.max_capacity, 2);
        assert!(updated.is_cancelled);
        assert_eq!(updated.enrolled_student_ids, vec![student]);
    }

    #[test]
    fn delete_session_orphans_attendance() {
        let store = Store::new();
        let session =
            store.create_class_session(create_session_data("Funcional", DayOfWeek::Monday, 7));
        let student = Uuid::new_v4();
        store.save_attendance(session.id, HashSet::from([student]));

        assert!(store.delete_class_session(session.id));
        assert!(store.find_class_session(session.id).is_none());
        // No cascading cleanup: the record stays, keyed by a dead id.
        assert!(store.attendance_for(session.id).is_some());
    }

    #[test]
    fn birthday_query_matches_month_and_day_across_years() {
        let store = Store::new();
        store.create_student(CreateStudent {
            name: "Ana Souza".to_string(),
            email: "ana@exemplo.com".to_string(),
            role: None,
            avatar_url: None,
            join_date: NaiveDate::from_ymd_opt(2023, 6, 15).unwrap(),
            phone_number: None,
            birth_date: Some(NaiveDate::from_ymd_opt(1995, 3, 14).unwrap()),
            address: None,
        });

        assert_eq!(store.students_with_birthday(3, 14).len(), 1);
        assert!(store.students_with_birthday(3, 15).is_empty());
    }

    #[test]
    fn feed_lists_newest_post_first() {
        let store = Store::new();
        let author = Uuid::new_v4();
        let mk = |caption: &str| CreatePost {
            user_id: author,
            user_name: "Ana Souza".to_string(),
            user_avatar: None,
            image_url: String::new(),
            caption: caption.to_string(),
        };
        let older = store.create_post(mk("primeiro"));
        store
            .posts
            .get_mut(&older.id)
            .unwrap()
            .created_at -= chrono::Duration::hours(1);
        store.create_post(mk("segundo"));

        let captions: Vec<String> = store.list_posts().into_iter().map(|p| p.caption).collect();
        assert_eq!(captions, ["segundo", "primeiro"]);
    }

    #[test]
    fn workouts_filter_by_student_access() {
        let store = Store::new();
        let (ana, carlos) = (Uuid::new_v4(), Uuid::new_v4());
        store.create_workout(CreatePersonalizedWorkout {
            title: "Base de corrida".to_string(),
            description: String::new(),
            video_url: None,
            student_ids: vec![ana],
            instructor_name: "Alexandre".to_string(),
        });

        assert_eq!(store.list_workouts(None).len(), 1);
        assert_eq!(store.list_workouts(Some(ana)).len(), 1);
        assert!(store.list_workouts(Some(carlos)).is_empty());
    }

    #[test]
    fn settings_update_is_partial() {
        let store = Store::new();
        let updated = store.update_settings(UpdateAcademySettings {
            name: None,
            cnpj: Some("12.345.678/0001-00".to_string()),
            address: None,
            phone: None,
            email: None,
            representative_name: None,
            monthly_fee: Some(180.0),
            invite_code: None,
        });
        assert_eq!(updated.cnpj, "12.345.678/0001-00");
        assert_eq!(updated.monthly_fee, 180.0);
        // Untouched fields keep their defaults.
        assert_eq!(updated.invite_code, "PERSONAL2024");
    }
}
