use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A course counted within a curriculum for `ects` credits.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CourseRegistration {
    pub course: i64,
    pub curriculum: i64,
    pub ects: f64,
}

/// A student enrolled in a curriculum.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Enrollment {
    pub student: i64,
    pub curriculum: i64,
}
