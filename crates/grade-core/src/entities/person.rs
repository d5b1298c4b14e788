use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A person. Acts as student, teacher, secretary, or director depending on
/// where it is referenced.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Person {
    pub id: i64,
    pub lastname: String,
    pub firstname: String,
    pub address: String,
    pub phone: String,
}

impl Person {
    /// Display name, first name first.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}
