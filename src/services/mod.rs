pub mod attendance_service;
pub mod course_service;
pub mod tracker_service;
pub mod user_service;

pub use attendance_service::*;
pub use course_service::*;
pub use tracker_service::*;
pub use user_service::*;
