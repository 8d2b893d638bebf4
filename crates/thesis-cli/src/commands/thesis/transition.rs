use thesis_core::enums::ThesisStatus;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: &str,
    status: &str,
    note: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let target: ThesisStatus = parse_enum(status)?;
    let thesis = ctx.service.transition_thesis(id, target, note).await?;
    output(&thesis, flags.format)
}
