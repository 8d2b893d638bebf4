mod add;
mod update;

use thesis_core::enums::MilestoneStatus;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::MilestoneCommands;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `thesis milestone`.
pub async fn handle(
    action: &MilestoneCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        MilestoneCommands::Add {
            thesis,
            title,
            due,
            notes,
        } => add::run(thesis, title, due, notes.as_deref(), ctx, flags).await,
        MilestoneCommands::Get { id } => {
            let milestone = ctx.service.get_milestone(id).await?;
            output(&milestone, flags.format)
        }
        MilestoneCommands::List { thesis } => {
            let milestones = ctx.service.list_milestones(thesis).await?;
            output(&milestones, flags.format)
        }
        MilestoneCommands::Update {
            id,
            title,
            due,
            notes,
            clear_notes,
        } => {
            update::run(
                id,
                title.as_deref(),
                due.as_deref(),
                notes.clone(),
                *clear_notes,
                ctx,
                flags,
            )
            .await
        }
        MilestoneCommands::Delete { id } => {
            ctx.service.delete_milestone(id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
        MilestoneCommands::Transition { id, status } => {
            let target: MilestoneStatus = parse_enum(status)?;
            let milestone = ctx.service.transition_milestone(id, target).await?;
            output(&milestone, flags.format)
        }
    }
}
