pub mod assessment;
pub mod challenge;
pub mod class_session;
pub mod payment;
pub mod post;
pub mod running_route;
pub mod settings;
pub mod student;
pub mod workout;
