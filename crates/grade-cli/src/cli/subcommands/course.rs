use clap::Subcommand;

/// Course commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CourseCommands {
    /// Create a course.
    Create {
        #[arg(long)]
        name: String,
        /// Person id of the teacher.
        #[arg(long)]
        teacher: i64,
    },
    /// List courses with their teacher.
    List,
    /// Delete a course with its validations and grades.
    Delete { id: i64 },
    /// Print a course's name.
    Name { id: i64 },
    /// Curriculums the course counts for.
    Curriculums { id: i64 },
    /// Validations of the course by date.
    Validations { id: i64 },
    /// Students following the course.
    Students { id: i64 },
    /// Recorded grades, most recent first.
    Grades { id: i64 },
}
