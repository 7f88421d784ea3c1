pub mod attendance;
pub mod health;
pub mod metrics;
pub mod misc;
pub mod swagger;
pub mod track;
pub mod users;
