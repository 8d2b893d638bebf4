use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_date;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    thesis_id: &str,
    title: &str,
    due: &str,
    notes: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let due_date = parse_date(due, "due")?;
    let milestone = ctx
        .service
        .add_milestone(thesis_id, title, due_date, notes)
        .await?;
    output(&milestone, flags.format)
}
