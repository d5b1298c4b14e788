use grade_core::enums::EntityKind;
use serde::Serialize;

/// Acknowledgement printed after a delete.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub deleted: EntityKind,
    pub id: i64,
}

/// A display name looked up by id.
#[derive(Debug, Serialize)]
pub struct NameResponse {
    pub id: i64,
    pub name: String,
}

/// Acknowledgement printed after removing a course from a curriculum.
#[derive(Debug, Serialize)]
pub struct UnregisteredResponse {
    pub course: i64,
    pub curriculum: i64,
}
