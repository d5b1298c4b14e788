use crate::cli::GlobalFlags;
use crate::cli::subcommands::GradeCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `gradebook grade`.
pub async fn handle(
    action: &GradeCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        GradeCommands::Add {
            validation,
            student,
            grade,
        } => {
            let grade = ctx.service.add_grade(*validation, *student, *grade).await?;
            output(&grade, flags.format)
        }
    }
}
