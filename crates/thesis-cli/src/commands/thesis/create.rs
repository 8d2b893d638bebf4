use thesis_db::updates::thesis::NewThesis;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_opt_date;
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub title: String,
    pub student: String,
    pub abstract_text: Option<String>,
    pub supervisor: Option<String>,
    pub deadline: Option<String>,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let input = NewThesis {
        title: params.title,
        abstract_text: params.abstract_text,
        student_id: params.student,
        supervisor_id: params.supervisor,
        submission_deadline: parse_opt_date(params.deadline.as_deref(), "deadline")?,
    };
    let thesis = ctx.service.create_thesis(input).await?;
    output(&thesis, flags.format)
}
