use crate::cli::GlobalFlags;
use crate::cli::subcommands::{ReviewerCommands, StudentCommands, SupervisorCommands};
use crate::commands::shared::limit::{effective_limit, truncate};
use crate::context::AppContext;
use crate::output::output;

/// Handle `thesis student`.
pub async fn handle_student(
    action: &StudentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        StudentCommands::Add { name, email } => {
            let student = ctx.service.create_student(name, email).await?;
            output(&student, flags.format)
        }
        StudentCommands::List { limit } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let mut students = ctx.service.list_students().await?;
            truncate(&mut students, limit);
            output(&students, flags.format)
        }
        StudentCommands::Get { id } => {
            let student = ctx.service.get_student(id).await?;
            output(&student, flags.format)
        }
    }
}

/// Handle `thesis supervisor`.
pub async fn handle_supervisor(
    action: &SupervisorCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SupervisorCommands::Add {
            name,
            email,
            department,
        } => {
            let supervisor = ctx
                .service
                .create_supervisor(name, email, department)
                .await?;
            output(&supervisor, flags.format)
        }
        SupervisorCommands::List { limit } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let mut supervisors = ctx.service.list_supervisors().await?;
            truncate(&mut supervisors, limit);
            output(&supervisors, flags.format)
        }
        SupervisorCommands::Get { id } => {
            let supervisor = ctx.service.get_supervisor(id).await?;
            output(&supervisor, flags.format)
        }
    }
}

/// Handle `thesis reviewer`.
pub async fn handle_reviewer(
    action: &ReviewerCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ReviewerCommands::Add { name, email } => {
            let reviewer = ctx.service.create_external_reviewer(name, email).await?;
            output(&reviewer, flags.format)
        }
        ReviewerCommands::List { limit } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let mut reviewers = ctx.service.list_external_reviewers().await?;
            truncate(&mut reviewers, limit);
            output(&reviewers, flags.format)
        }
        ReviewerCommands::Get { id } => {
            let reviewer = ctx.service.get_external_reviewer(id).await?;
            output(&reviewer, flags.format)
        }
    }
}
