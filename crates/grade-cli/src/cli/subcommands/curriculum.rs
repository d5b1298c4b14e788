use clap::Subcommand;

/// Curriculum commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CurriculumCommands {
    /// Create a curriculum.
    Create {
        #[arg(long)]
        name: String,
        /// Person id of the secretary.
        #[arg(long)]
        secretary: i64,
        /// Person id of the director.
        #[arg(long)]
        director: i64,
    },
    /// List curriculums with director and secretary.
    List,
    /// Delete a curriculum, its registrations, and its enrollments.
    Delete { id: i64 },
    /// Print a curriculum's name.
    Name { id: i64 },
    /// Courses of a curriculum with their ECTS.
    Courses { id: i64 },
    /// Weighted average of every enrolled student.
    Averages { id: i64 },
    /// Enroll a student.
    Enroll {
        id: i64,
        #[arg(long)]
        student: i64,
    },
    /// Register a course for a number of ECTS.
    Register {
        id: i64,
        #[arg(long)]
        course: i64,
        #[arg(long)]
        ects: f64,
    },
    /// Remove a course from the curriculum.
    Unregister {
        id: i64,
        #[arg(long)]
        course: i64,
    },
}
