//! Entity structs for every stored gradebook table.
//!
//! Each entity maps to one table in the libSQL schema. Identifiers are
//! integers assigned by the store at creation.

mod course;
mod curriculum;
mod grade;
mod person;
mod registration;
mod validation;

pub use course::Course;
pub use curriculum::Curriculum;
pub use grade::Grade;
pub use person::Person;
pub use registration::{CourseRegistration, Enrollment};
pub use validation::Validation;
