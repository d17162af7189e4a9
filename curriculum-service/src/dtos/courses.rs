use crate::models::{CourseEntry, CourseYear};
use serde::Serialize;

/// Wire record for `/courses`: the entry's title plus its derived
/// specialization string.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CourseSummary {
    pub name: String,
    pub specialization: String,
}

impl From<&CourseEntry> for CourseSummary {
    fn from(entry: &CourseEntry) -> Self {
        Self {
            name: entry.description.clone(),
            specialization: entry.specialization(),
        }
    }
}

impl CourseSummary {
    /// Flatten year documents into one summary per embedded entry, in
    /// document order then entry order.
    pub fn flatten(years: &[CourseYear]) -> Vec<CourseSummary> {
        years
            .iter()
            .flat_map(|year| year.courses.iter().map(CourseSummary::from))
            .collect()
    }
}
