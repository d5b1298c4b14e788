use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A student's score on one validation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Grade {
    pub validation: i64,
    pub student: i64,
    pub grade: f64,
}
