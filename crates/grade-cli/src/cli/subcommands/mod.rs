mod course;
mod curriculum;
mod grade;
mod person;
mod validation;

pub use course::CourseCommands;
pub use curriculum::CurriculumCommands;
pub use grade::GradeCommands;
pub use person::PersonCommands;
pub use validation::ValidationCommands;
