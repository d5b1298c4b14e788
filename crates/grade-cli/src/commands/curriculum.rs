use grade_core::enums::EntityKind;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CurriculumCommands;
use crate::commands::shared::{DeletedResponse, NameResponse, UnregisteredResponse};
use crate::context::AppContext;
use crate::output::output;

/// Handle `gradebook curriculum`.
pub async fn handle(
    action: &CurriculumCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let service = &ctx.service;
    match action {
        CurriculumCommands::Create {
            name,
            secretary,
            director,
        } => {
            let curriculum = service
                .create_curriculum(name, *secretary, *director)
                .await?;
            output(&curriculum, flags.format)
        }
        CurriculumCommands::List => output(&service.list_curriculums().await?, flags.format),
        CurriculumCommands::Delete { id } => {
            service.delete_curriculum(*id).await?;
            output(
                &DeletedResponse {
                    deleted: EntityKind::Curriculum,
                    id: *id,
                },
                flags.format,
            )
        }
        CurriculumCommands::Name { id } => {
            let name = service.curriculum_name(*id).await?;
            output(&NameResponse { id: *id, name }, flags.format)
        }
        CurriculumCommands::Courses { id } => {
            output(&service.list_courses_of_curriculum(*id).await?, flags.format)
        }
        CurriculumCommands::Averages { id } => output(
            &service
                .average_grades_of_students_in_curriculum(*id)
                .await?,
            flags.format,
        ),
        CurriculumCommands::Enroll { id, student } => {
            let enrollment = service.register_person_to_curriculum(*student, *id).await?;
            output(&enrollment, flags.format)
        }
        CurriculumCommands::Register { id, course, ects } => {
            let registration = service
                .register_course_to_curriculum(*course, *id, *ects)
                .await?;
            output(&registration, flags.format)
        }
        CurriculumCommands::Unregister { id, course } => {
            service.delete_course_from_curriculum(*course, *id).await?;
            output(
                &UnregisteredResponse {
                    course: *course,
                    curriculum: *id,
                },
                flags.format,
            )
        }
    }
}
