use grade_core::enums::EntityKind;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PersonCommands;
use crate::commands::shared::{DeletedResponse, NameResponse};
use crate::context::AppContext;
use crate::output::output;

/// Handle `gradebook person`.
pub async fn handle(
    action: &PersonCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let service = &ctx.service;
    match action {
        PersonCommands::Create {
            lastname,
            firstname,
            address,
            phone,
        } => {
            let person = service
                .create_person(lastname, firstname, address, phone)
                .await?;
            output(&person, flags.format)
        }
        PersonCommands::List => output(&service.list_persons().await?, flags.format),
        PersonCommands::Delete { id } => {
            service.delete_person(*id).await?;
            output(
                &DeletedResponse {
                    deleted: EntityKind::Person,
                    id: *id,
                },
                flags.format,
            )
        }
        PersonCommands::Name { id } => {
            let name = service.person_name(*id).await?;
            output(&NameResponse { id: *id, name }, flags.format)
        }
        PersonCommands::Grades { id } => {
            output(&service.list_validations_of_student(*id).await?, flags.format)
        }
        PersonCommands::Curriculums { id } => {
            output(&service.curriculums_of_student(*id).await?, flags.format)
        }
    }
}
