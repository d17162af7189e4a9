use serde::{Deserialize, Serialize};

/// One academic year's curriculum: the year label plus its embedded course
/// entries. Entries live and die with their owning document; they have no
/// identity of their own. Stored fields outside this shape (`_id` included)
/// are ignored on decode and never serialized back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CourseYear {
    pub year: String,
    pub courses: Vec<CourseEntry>,
}

/// One course offered within a year.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CourseEntry {
    pub code: String,
    pub description: String,
    pub units: f64,
    pub tags: Vec<String>,
}

impl CourseEntry {
    /// The entry's tags minus any tag equal to its own code, comma-joined.
    /// Tag order is preserved; an entry whose only tag is its code yields
    /// the empty string.
    pub fn specialization(&self) -> String {
        self.tags
            .iter()
            .filter(|tag| **tag != self.code)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, from_document};

    fn entry(code: &str, tags: &[&str]) -> CourseEntry {
        CourseEntry {
            code: code.to_string(),
            description: "Test Course".to_string(),
            units: 3.0,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn specialization_excludes_the_code_and_preserves_order() {
        let entry = entry("CS101", &["CS101", "backend", "db"]);
        assert_eq!(entry.specialization(), "backend, db");
    }

    #[test]
    fn specialization_is_empty_when_only_the_code_remains() {
        let entry = entry("CS101", &["CS101"]);
        assert_eq!(entry.specialization(), "");
    }

    #[test]
    fn specialization_keeps_unrelated_tags_untouched() {
        let entry = entry("IT100", &["intro"]);
        assert_eq!(entry.specialization(), "intro");
    }

    #[test]
    fn decodes_a_complete_stored_document() {
        let stored = doc! {
            "_id": mongodb::bson::oid::ObjectId::new(),
            "year": "1st Year",
            "courses": [
                { "code": "IT100", "description": "Intro to IT", "units": 3, "tags": ["IT100", "intro"] }
            ],
        };

        let year: CourseYear = from_document(stored).expect("document should decode");
        assert_eq!(year.year, "1st Year");
        assert_eq!(year.courses.len(), 1);
        assert_eq!(year.courses[0].units, 3.0);
    }

    #[test]
    fn decode_rejects_a_missing_required_field() {
        let stored = doc! { "courses": [] };
        let result = from_document::<CourseYear>(stored);
        assert!(result.is_err());
    }

    #[test]
    fn decode_rejects_a_wrongly_typed_field() {
        let stored = doc! {
            "year": "1st Year",
            "courses": [
                { "code": "IT100", "description": "Intro to IT", "units": "three", "tags": [] }
            ],
        };
        let result = from_document::<CourseYear>(stored);
        assert!(result.is_err());
    }
}
