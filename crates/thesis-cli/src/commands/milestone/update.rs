use thesis_db::updates::milestone::MilestoneUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_date, set_or_clear};
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: &str,
    title: Option<&str>,
    due: Option<&str>,
    notes: Option<String>,
    clear_notes: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if title.is_none() && due.is_none() && notes.is_none() && !clear_notes {
        anyhow::bail!("At least one of --title, --due, --notes, or --clear-notes must be provided");
    }

    let mut builder = MilestoneUpdateBuilder::new();
    if let Some(title) = title {
        builder = builder.title(title);
    }
    if let Some(due) = due {
        builder = builder.due_date(parse_date(due, "due")?);
    }
    if let Some(notes) = set_or_clear(notes, clear_notes) {
        builder = builder.notes(notes);
    }

    let milestone = ctx.service.update_milestone(id, builder.build()).await?;
    output(&milestone, flags.format)
}
