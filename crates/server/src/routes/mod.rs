use axum::Router;

use crate::AppState;

pub mod assessments;
pub mod classes;
pub mod payments;
pub mod posts;
pub mod running_routes;
pub mod settings;
pub mod students;
pub mod workouts;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(classes::router())
        .merge(students::router())
        .merge(payments::router())
        .merge(assessments::router())
        .merge(posts::router())
        .merge(workouts::router())
        .merge(running_routes::router())
        .merge(settings::router())
}
