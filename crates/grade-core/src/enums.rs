//! Entity kinds stored by the gradebook.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a stored entity. Used to name the subject of not-found errors
/// and to map onto SQL tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Person,
    Curriculum,
    Course,
    CourseRegistration,
    Enrollment,
    Validation,
    Grade,
}

impl EntityKind {
    /// Return the string representation used in messages and JSON.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Curriculum => "curriculum",
            Self::Course => "course",
            Self::CourseRegistration => "course_registration",
            Self::Enrollment => "enrollment",
            Self::Validation => "validation",
            Self::Grade => "grade",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
