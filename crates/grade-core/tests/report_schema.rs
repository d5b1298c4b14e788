//! JSON shape checks for the records the report queries return.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use schemars::schema_for;
use serde_json::json;

use grade_core::entities::Validation;
use grade_core::views::{CurriculumAverage, StudentAverage, StudentGrade};

fn schema_errors(schema: &serde_json::Value, instance: &serde_json::Value) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

#[test]
fn student_average_serializes_flat() {
    let row = StudentAverage {
        student_id: 4,
        lastname: "Curie".into(),
        firstname: "Marie".into(),
        average: 11.4,
    };
    let value = serde_json::to_value(&row).unwrap();
    assert_eq!(
        value,
        json!({"student_id": 4, "lastname": "Curie", "firstname": "Marie", "average": 11.4})
    );

    let schema = serde_json::to_value(schema_for!(StudentAverage)).unwrap();
    assert!(schema_errors(&schema, &value).is_empty());
}

#[test]
fn curriculum_average_rejects_missing_average() {
    let schema = serde_json::to_value(schema_for!(CurriculumAverage)).unwrap();
    let errors = schema_errors(&schema, &json!({"curriculum_id": 1, "name": "L3 Info"}));
    assert!(!errors.is_empty());
}

#[test]
fn dates_serialize_as_iso_days() {
    let validation = Validation {
        id: 1,
        course: 2,
        name: "Partiel".into(),
        date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        coefficient: 2.0,
    };
    let value = serde_json::to_value(&validation).unwrap();
    assert_eq!(value["date"], json!("2024-01-15"));

    let grade = StudentGrade {
        validation_id: 1,
        date: validation.date,
        curriculum_name: "L3 Info".into(),
        course_name: "BDD".into(),
        validation_name: "Partiel".into(),
        grade: 12.5,
    };
    let schema = serde_json::to_value(schema_for!(StudentGrade)).unwrap();
    let instance = serde_json::to_value(&grade).unwrap();
    assert!(schema_errors(&schema, &instance).is_empty());
}
