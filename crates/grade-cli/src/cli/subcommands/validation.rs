use chrono::NaiveDate;
use clap::Subcommand;

/// Validation commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ValidationCommands {
    /// Add a validation to a course.
    Add {
        #[arg(long)]
        course: i64,
        #[arg(long)]
        name: String,
        #[arg(long, default_value_t = 1.0)]
        coefficient: f64,
        /// Date as YYYY-MM-DD.
        #[arg(long)]
        date: NaiveDate,
    },
    /// Print "course - validation".
    Name { id: i64 },
    /// Grades of a validation, best first.
    Grades { id: i64 },
}
