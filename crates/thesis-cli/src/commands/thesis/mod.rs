mod create;
mod get;
mod history;
mod list;
mod overdue;
mod transition;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ThesisCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `thesis thesis`.
pub async fn handle(
    action: &ThesisCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ThesisCommands::Create {
            title,
            student,
            abstract_text,
            supervisor,
            deadline,
        } => {
            create::run(
                create::Params {
                    title: title.clone(),
                    student: student.clone(),
                    abstract_text: abstract_text.clone(),
                    supervisor: supervisor.clone(),
                    deadline: deadline.clone(),
                },
                ctx,
                flags,
            )
            .await
        }
        ThesisCommands::Get { id } => get::run(id, ctx, flags).await,
        ThesisCommands::List {
            status,
            student,
            supervisor,
            limit,
        } => {
            list::run(
                status.as_deref(),
                student.as_deref(),
                supervisor.as_deref(),
                *limit,
                ctx,
                flags,
            )
            .await
        }
        ThesisCommands::Update {
            id,
            title,
            abstract_text,
            clear_abstract,
            student,
            deadline,
            clear_deadline,
        } => {
            update::run(
                update::Params {
                    id: id.clone(),
                    title: title.clone(),
                    abstract_text: abstract_text.clone(),
                    clear_abstract: *clear_abstract,
                    student: student.clone(),
                    deadline: deadline.clone(),
                    clear_deadline: *clear_deadline,
                },
                ctx,
                flags,
            )
            .await
        }
        ThesisCommands::Delete { id } => {
            ctx.service.delete_thesis(id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
        ThesisCommands::Transition { id, status, note } => {
            transition::run(id, status, note.as_deref(), ctx, flags).await
        }
        ThesisCommands::Assign {
            id,
            supervisor,
            clear: _,
        } => {
            let thesis = ctx
                .service
                .assign_supervisor(id, supervisor.as_deref())
                .await?;
            output(&thesis, flags.format)
        }
        ThesisCommands::AssignReviewer {
            id,
            reviewer,
            clear: _,
        } => {
            let thesis = ctx.service.assign_reviewer(id, reviewer.as_deref()).await?;
            output(&thesis, flags.format)
        }
        ThesisCommands::History { id, limit } => history::run(id, *limit, ctx, flags).await,
        ThesisCommands::Overdue { today } => overdue::run(today.as_deref(), ctx, flags).await,
    }
}
