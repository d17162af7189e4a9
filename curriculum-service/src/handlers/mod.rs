pub mod courses;
pub mod health;

pub use courses::{list_backend_courses, list_course_summaries, list_year_level_courses};
pub use health::{health_check, metrics_endpoint, readiness_check};
