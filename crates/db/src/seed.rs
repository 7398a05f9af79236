//! Demo fixtures for running the service without a real backend.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use tracing::info;
use uuid::Uuid;

use crate::{
    Store,
    models::{
        assessment::{AssessmentStatus, CreateAssessment},
        challenge::Challenge,
        class_session::{ClassFeedback, ClassSession, ClassType, DayOfWeek},
        post::Post,
        running_route::{CreateRunningRoute, RouteDifficulty},
        settings::UpdateAcademySettings,
        student::{CreateStudent, Student, UserRole},
    },
};

fn demo_student(store: &Store, name: &str, email: &str, joined: NaiveDate) -> Student {
    store.create_student(CreateStudent {
        name: name.to_string(),
        email: email.to_string(),
        role: Some(UserRole::Student),
        avatar_url: Some(format!(
            "https://ui-avatars.com/api/?name={}&background=random",
            name.replace(' ', "+")
        )),
        join_date: joined,
        phone_number: None,
        birth_date: None,
        address: None,
    })
}

/// Loads the demo studio: one admin, a handful of students, three recurring
/// classes (one full, with a waitlist), the latest roll calls, a feed and the
/// yearly challenge. Payment plans are generated afterwards by the billing
/// service, one per student, mirroring what student registration does.
pub fn load(store: &Store) {
    store.update_settings(UpdateAcademySettings {
        name: Some("Studio - Funcional & Corrida".to_string()),
        cnpj: Some("00.000.000/0001-00".to_string()),
        address: Some("Rua da Academia, 100 - Centro, SP".to_string()),
        phone: Some("5511999999999".to_string()),
        email: Some("contato@studio.com".to_string()),
        representative_name: Some("Alexandre Silva".to_string()),
        monthly_fee: Some(150.0),
        invite_code: Some("PERSONAL2024".to_string()),
    });

    store.create_student(CreateStudent {
        name: "Treinador Alexandre".to_string(),
        email: "admin@studio.com".to_string(),
        role: Some(UserRole::Admin),
        avatar_url: Some(
            "https://ui-avatars.com/api/?name=Alexandre+Silva&background=f97316&color=fff"
                .to_string(),
        ),
        join_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        phone_number: Some("5511999999999".to_string()),
        birth_date: None,
        address: Some("Rua da Academia, 100 - Centro, SP".to_string()),
    });

    let ana = demo_student(
        store,
        "Ana Souza",
        "ana@exemplo.com",
        NaiveDate::from_ymd_opt(2023, 6, 15).unwrap(),
    );
    let carlos = demo_student(
        store,
        "Carlos Oliveira",
        "carlos@exemplo.com",
        NaiveDate::from_ymd_opt(2023, 8, 1).unwrap(),
    );
    let juliana = demo_student(
        store,
        "Juliana Martins",
        "juliana@exemplo.com",
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
    );
    let roberto = demo_student(
        store,
        "Roberto Lima",
        "roberto@exemplo.com",
        NaiveDate::from_ymd_opt(2024, 2, 20).unwrap(),
    );
    let mariana = demo_student(
        store,
        "Mariana Costa",
        "mariana@exemplo.com",
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
    );

    let funcional = ClassSession {
        id: Uuid::new_v4(),
        title: "Funcional Manhã".to_string(),
        description: "Circuito funcional com foco em mobilidade e core.".to_string(),
        day_of_week: DayOfWeek::Monday,
        start_time: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
        duration_minutes: 60,
        instructor: "Alexandre".to_string(),
        max_capacity: 10,
        enrolled_student_ids: vec![ana.id, carlos.id, juliana.id],
        waitlist_student_ids: vec![],
        class_type: ClassType::Functional,
        is_cancelled: false,
        wod: Some("4 rounds: 400m run / 15 KB swings / 10 burpees".to_string()),
        feedback: vec![ClassFeedback {
            student_id: carlos.id,
            rating: 8,
        }],
    };
    let corrida = ClassSession {
        id: Uuid::new_v4(),
        title: "Corrida - Longão".to_string(),
        description: "Treino de rodagem em ritmo confortável.".to_string(),
        day_of_week: DayOfWeek::Wednesday,
        start_time: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
        duration_minutes: 90,
        instructor: "Alexandre".to_string(),
        max_capacity: 15,
        enrolled_student_ids: vec![ana.id, juliana.id],
        waitlist_student_ids: vec![],
        class_type: ClassType::Running,
        is_cancelled: false,
        wod: None,
        feedback: vec![],
    };
    // Full class with a queue, so waitlist promotion can be demoed.
    let forca = ClassSession {
        id: Uuid::new_v4(),
        title: "Força".to_string(),
        description: "Levantamentos básicos com barra.".to_string(),
        day_of_week: DayOfWeek::Friday,
        start_time: NaiveTime::from_hms_opt(18, 30, 0).unwrap(),
        duration_minutes: 60,
        instructor: "Alexandre".to_string(),
        max_capacity: 2,
        enrolled_student_ids: vec![carlos.id, roberto.id],
        waitlist_student_ids: vec![mariana.id],
        class_type: ClassType::Functional,
        is_cancelled: false,
        wod: None,
        feedback: vec![
            ClassFeedback {
                student_id: carlos.id,
                rating: 9,
            },
            ClassFeedback {
                student_id: roberto.id,
                rating: 10,
            },
        ],
    };

    store.save_attendance(funcional.id, HashSet::from([ana.id, carlos.id]));
    store.save_attendance(corrida.id, HashSet::from([ana.id, juliana.id]));

    store.insert_class_session(funcional);
    store.insert_class_session(corrida);
    store.insert_class_session(forca);

    let now = Utc::now();
    store.insert_post(Post {
        id: Uuid::new_v4(),
        user_id: ana.id,
        user_name: ana.name.clone(),
        user_avatar: ana.avatar_url.clone(),
        image_url: "https://picsum.photos/id/73/600/400".to_string(),
        caption: "Destruí nos 10k hoje! 🏃‍♀️🔥".to_string(),
        likes: 12,
        created_at: now - Duration::hours(2),
    });
    store.insert_post(Post {
        id: Uuid::new_v4(),
        user_id: carlos.id,
        user_name: carlos.name.clone(),
        user_avatar: carlos.avatar_url.clone(),
        image_url: "https://picsum.photos/id/96/600/400".to_string(),
        caption: "Novo recorde no terra. 140kg! 💪".to_string(),
        likes: 24,
        created_at: now - Duration::hours(5),
    });
    store.insert_post(Post {
        id: Uuid::new_v4(),
        user_id: juliana.id,
        user_name: juliana.name.clone(),
        user_avatar: juliana.avatar_url.clone(),
        image_url: "https://picsum.photos/id/129/600/400".to_string(),
        caption: "Domingo é dia de longão no parque. Paz! 🌳☀️".to_string(),
        likes: 35,
        created_at: now - Duration::days(1),
    });

    store.create_assessment(CreateAssessment {
        student_id: ana.id,
        date: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
        status: AssessmentStatus::Done,
        notes: "Boa evolução de mobilidade; manter foco em core.".to_string(),
        custom_metrics: None,
        weight_kg: 62.5,
        height_cm: 165.0,
        body_fat_percentage: 22.4,
        skeletal_muscle_mass: Some(26.1),
        visceral_fat_level: Some(4),
        basal_metabolic_rate: Some(1380),
        hydration_percentage: Some(55.0),
        vo2_max: Some(42.0),
        squat_max: Some(60.0),
        flexibility_sit_and_reach: Some(28.0),
        push_ups_count: Some(20),
        circumferences: None,
        skinfolds: None,
    });
    store.create_assessment(CreateAssessment {
        student_id: carlos.id,
        date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
        status: AssessmentStatus::Scheduled,
        notes: String::new(),
        custom_metrics: None,
        weight_kg: 0.0,
        height_cm: 0.0,
        body_fat_percentage: 0.0,
        skeletal_muscle_mass: None,
        visceral_fat_level: None,
        basal_metabolic_rate: None,
        hydration_percentage: None,
        vo2_max: None,
        squat_max: None,
        flexibility_sit_and_reach: None,
        push_ups_count: None,
        circumferences: None,
        skinfolds: None,
    });

    store.create_running_route(CreateRunningRoute {
        title: "Volta do Lago".to_string(),
        distance_km: 5.2,
        description: "Percurso plano ideal para iniciantes em volta do lago principal."
            .to_string(),
        map_link: "https://maps.google.com".to_string(),
        difficulty: RouteDifficulty::Easy,
        elevation_gain_m: 10,
    });
    store.create_running_route(CreateRunningRoute {
        title: "Desafio da Colina".to_string(),
        distance_km: 8.5,
        description: "Treino de força com subidas íngremes.".to_string(),
        map_link: "https://maps.google.com".to_string(),
        difficulty: RouteDifficulty::Hard,
        elevation_gain_m: 150,
    });
    store.create_running_route(CreateRunningRoute {
        title: "Trilha da Mata".to_string(),
        distance_km: 12.0,
        description: "Percurso misto com trechos de terra e asfalto.".to_string(),
        map_link: "https://maps.google.com".to_string(),
        difficulty: RouteDifficulty::Medium,
        elevation_gain_m: 80,
    });

    store.set_challenge(Challenge {
        id: Uuid::new_v4(),
        title: "Volta ao Mundo".to_string(),
        description: "Acumular 40.000km corridos somando todos os alunos da academia."
            .to_string(),
        target_value: 40000.0,
        unit: "km".to_string(),
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
    });

    info!(
        students = store.list_students().len(),
        classes = store.list_class_sessions().len(),
        "demo data loaded"
    );
}
