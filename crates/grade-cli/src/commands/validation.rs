use crate::cli::GlobalFlags;
use crate::cli::subcommands::ValidationCommands;
use crate::commands::shared::NameResponse;
use crate::context::AppContext;
use crate::output::output;

/// Handle `gradebook validation`.
pub async fn handle(
    action: &ValidationCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let service = &ctx.service;
    match action {
        ValidationCommands::Add {
            course,
            name,
            coefficient,
            date,
        } => {
            let validation = service
                .add_validation_to_course(name, *coefficient, *date, *course)
                .await?;
            output(&validation, flags.format)
        }
        ValidationCommands::Name { id } => {
            let name = service.validation_name(*id).await?;
            output(&NameResponse { id: *id, name }, flags.format)
        }
        ValidationCommands::Grades { id } => {
            output(&service.list_grades_of_validation(*id).await?, flags.format)
        }
    }
}
