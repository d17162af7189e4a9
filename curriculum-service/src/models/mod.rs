pub mod course;

pub use course::{CourseEntry, CourseYear};
