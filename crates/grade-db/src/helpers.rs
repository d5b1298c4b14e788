//! Row-to-record parsing helpers.
//!
//! Every repo converts `libsql::Row` (column-indexed) into typed records.
//! These helpers isolate the column conversions that need more than
//! `row.get::<T>()`: ISO dates stored as TEXT and numeric columns that
//! `SQLite` may hand back as either INTEGER or REAL.

use chrono::NaiveDate;
use grade_core::enums::EntityKind;

use crate::error::DatabaseError;

/// Storage format for validation dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a TEXT column holding an ISO `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string is not a valid date.
pub fn parse_date(s: &str) -> Result<NaiveDate, DatabaseError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|e| DatabaseError::Query(format!("Failed to parse date '{s}': {e}")))
}

/// Render a date the way it is stored.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Read a numeric column as `f64`.
///
/// `SQLite` stores `2` bound to a REAL column as REAL, but expressions and
/// legacy rows may still surface as INTEGER.
///
/// # Errors
///
/// Returns `DatabaseError::Query` for NULL, TEXT, or BLOB values.
#[allow(clippy::cast_precision_loss)]
pub fn get_real(row: &libsql::Row, idx: i32) -> Result<f64, DatabaseError> {
    match row.get_value(idx)? {
        libsql::Value::Real(v) => Ok(v),
        libsql::Value::Integer(v) => Ok(v as f64),
        other => Err(DatabaseError::Query(format!(
            "Expected a numeric value in column {idx}, got {other:?}"
        ))),
    }
}

/// Map `EntityKind` to the SQL table holding it.
///
/// Uses exhaustive match; adding a new `EntityKind` variant forces updating this.
#[must_use]
pub const fn entity_kind_to_table(entity: EntityKind) -> &'static str {
    match entity {
        EntityKind::Person => "persons",
        EntityKind::Curriculum => "curriculums",
        EntityKind::Course => "courses",
        EntityKind::CourseRegistration => "course_curriculum",
        EntityKind::Enrollment => "curriculum_person",
        EntityKind::Validation => "validations",
        EntityKind::Grade => "grades",
    }
}
