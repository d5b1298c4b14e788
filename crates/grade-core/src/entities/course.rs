use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A course taught by one person.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub teacher: i64,
}
