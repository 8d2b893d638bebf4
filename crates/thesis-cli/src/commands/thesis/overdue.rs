use chrono::Utc;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_opt_date;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(today: Option<&str>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let today = parse_opt_date(today, "today")?.unwrap_or_else(|| Utc::now().date_naive());
    let theses = ctx.service.list_overdue(today).await?;
    output(&theses, flags.format)
}
