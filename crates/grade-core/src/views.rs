//! Read-model records returned by listing and report queries.
//!
//! Each struct is the typed shape of exactly one query result row. Grades and
//! averages carried here are already rounded to `grading::GRADE_DECIMALS`.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A person with the number of curriculums they are enrolled in.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PersonSummary {
    pub id: i64,
    pub lastname: String,
    pub firstname: String,
    pub address: String,
    pub phone: String,
    pub curriculum_count: i64,
}

/// A curriculum with its director and secretary names resolved.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CurriculumSummary {
    pub id: i64,
    pub name: String,
    pub director_lastname: String,
    pub director_firstname: String,
    pub secretary_lastname: String,
    pub secretary_firstname: String,
}

/// A course with its teacher resolved.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CourseSummary {
    pub id: i64,
    pub name: String,
    pub teacher_id: i64,
    pub teacher_lastname: String,
    pub teacher_firstname: String,
}

/// A course registered to a given curriculum.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CurriculumCourse {
    pub course_id: i64,
    pub course_name: String,
    pub teacher_lastname: String,
    pub teacher_firstname: String,
    pub ects: f64,
}

/// A curriculum a given course is registered to.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CourseCurriculumEntry {
    pub curriculum_id: i64,
    pub name: String,
    pub ects: f64,
}

/// Minimal person reference used in student listings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StudentRef {
    pub id: i64,
    pub lastname: String,
    pub firstname: String,
}

/// One recorded grade within a course, seen through a curriculum.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CourseGradeEntry {
    pub validation_id: i64,
    pub date: NaiveDate,
    pub curriculum_name: String,
    pub student_lastname: String,
    pub student_firstname: String,
    pub validation_name: String,
    pub grade: f64,
    pub coefficient: f64,
}

/// One recorded grade for a validation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ValidationGrade {
    pub student_id: i64,
    pub grade: f64,
    pub lastname: String,
    pub firstname: String,
}

/// One recorded grade of a student, seen through a curriculum.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct StudentGrade {
    pub validation_id: i64,
    pub date: NaiveDate,
    pub curriculum_name: String,
    pub course_name: String,
    pub validation_name: String,
    pub grade: f64,
}

/// A student's weighted average within one curriculum.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct StudentAverage {
    pub student_id: i64,
    pub lastname: String,
    pub firstname: String,
    pub average: f64,
}

/// One curriculum's weighted average for a given student.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CurriculumAverage {
    pub curriculum_id: i64,
    pub name: String,
    pub average: f64,
}
