pub mod billing;
pub mod notification;
pub mod roster;
