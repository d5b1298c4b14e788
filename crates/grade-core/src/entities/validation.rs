use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One gradable assessment within a course, weighted by `coefficient`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Validation {
    pub id: i64,
    pub course: i64,
    pub name: String,
    pub date: NaiveDate,
    pub coefficient: f64,
}
