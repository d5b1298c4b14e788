use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A named program of study.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Curriculum {
    pub id: i64,
    pub name: String,
    pub secretary: i64,
    pub director: i64,
}
