//! Repository modules implementing the gradebook operations.
//!
//! Each module adds methods to `GradebookService` via `impl GradebookService` blocks.

pub mod averages;
pub mod course;
pub mod curriculum;
pub mod grade;
pub mod person;
pub mod registration;
pub mod validation;
