use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `thesis dashboard`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let recent = effective_limit(None, flags.limit, ctx.config.general.recent_limit);
    let summary = ctx.service.dashboard(recent).await?;
    output(&summary, flags.format)
}
