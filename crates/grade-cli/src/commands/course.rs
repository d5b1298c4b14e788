use grade_core::enums::EntityKind;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CourseCommands;
use crate::commands::shared::{DeletedResponse, NameResponse};
use crate::context::AppContext;
use crate::output::output;

/// Handle `gradebook course`.
pub async fn handle(
    action: &CourseCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let service = &ctx.service;
    match action {
        CourseCommands::Create { name, teacher } => {
            output(&service.create_course(name, *teacher).await?, flags.format)
        }
        CourseCommands::List => output(&service.list_courses().await?, flags.format),
        CourseCommands::Delete { id } => {
            service.delete_course(*id).await?;
            output(
                &DeletedResponse {
                    deleted: EntityKind::Course,
                    id: *id,
                },
                flags.format,
            )
        }
        CourseCommands::Name { id } => {
            let name = service.course_name(*id).await?;
            output(&NameResponse { id: *id, name }, flags.format)
        }
        CourseCommands::Curriculums { id } => {
            output(&service.list_curriculums_of_course(*id).await?, flags.format)
        }
        CourseCommands::Validations { id } => {
            output(&service.list_validations_of_course(*id).await?, flags.format)
        }
        CourseCommands::Students { id } => {
            output(&service.list_students_of_course(*id).await?, flags.format)
        }
        CourseCommands::Grades { id } => {
            output(&service.list_grades_of_course(*id).await?, flags.format)
        }
    }
}
