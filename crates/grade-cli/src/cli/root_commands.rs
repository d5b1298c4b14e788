use clap::Subcommand;

use crate::cli::subcommands::{
    CourseCommands, CurriculumCommands, GradeCommands, PersonCommands, ValidationCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Create the store if needed and report where it lives.
    Init,
    /// Persons: students, teachers, and staff.
    Person {
        #[command(subcommand)]
        action: PersonCommands,
    },
    /// Curriculums, their courses, and enrolled students.
    Curriculum {
        #[command(subcommand)]
        action: CurriculumCommands,
    },
    /// Courses.
    Course {
        #[command(subcommand)]
        action: CourseCommands,
    },
    /// Validations (graded assessments of a course).
    Validation {
        #[command(subcommand)]
        action: ValidationCommands,
    },
    /// Grades.
    Grade {
        #[command(subcommand)]
        action: GradeCommands,
    },
}
