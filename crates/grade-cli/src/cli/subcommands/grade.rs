use clap::Subcommand;

/// Grade commands.
#[derive(Clone, Debug, Subcommand)]
pub enum GradeCommands {
    /// Record a student's grade on a validation.
    Add {
        #[arg(long)]
        validation: i64,
        #[arg(long)]
        student: i64,
        #[arg(long)]
        grade: f64,
    },
}
