use futures::{StreamExt, TryStreamExt};
use thesis_core::entities::StatusHistoryEntry;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Print a thesis's status ledger, oldest first. Without `--limit` the
/// whole ledger is read.
pub async fn run(
    id: &str,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    // Confirms the thesis exists; the ledger of an unknown id is just empty.
    ctx.service.get_thesis(id).await?;

    let take = match limit.or(flags.limit) {
        Some(limit) => usize::try_from(limit)?,
        None => usize::MAX,
    };
    let entries: Vec<StatusHistoryEntry> = ctx
        .service
        .history_stream(id)
        .take(take)
        .try_collect()
        .await?;
    output(&entries, flags.format)
}
