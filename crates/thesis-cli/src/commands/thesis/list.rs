use thesis_core::enums::ThesisStatus;
use thesis_db::repos::thesis::ThesisFilter;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    status: Option<&str>,
    student: Option<&str>,
    supervisor: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let filter = ThesisFilter {
        status: status.map(parse_enum::<ThesisStatus>).transpose()?,
        student_id: student.map(String::from),
        supervisor_id: supervisor.map(String::from),
        limit: Some(effective_limit(
            limit,
            flags.limit,
            ctx.config.general.default_limit,
        )),
    };
    let theses = ctx.service.list_theses(&filter).await?;
    output(&theses, flags.format)
}
