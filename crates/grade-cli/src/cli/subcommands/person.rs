use clap::Subcommand;

/// Person commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PersonCommands {
    /// Create a person.
    Create {
        #[arg(long)]
        lastname: String,
        #[arg(long)]
        firstname: String,
        #[arg(long, default_value = "")]
        address: String,
        #[arg(long, default_value = "")]
        phone: String,
    },
    /// List persons with their enrollment count.
    List,
    /// Delete a person and everything referencing them.
    Delete { id: i64 },
    /// Print a person's full name.
    Name { id: i64 },
    /// Grades of a student, most recent first.
    Grades { id: i64 },
    /// Weighted average of a student in each of their curriculums.
    Curriculums { id: i64 },
}
