use thesis_db::updates::thesis::ThesisUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_date, set_or_clear};
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub id: String,
    pub title: Option<String>,
    pub abstract_text: Option<String>,
    pub clear_abstract: bool,
    pub student: Option<String>,
    pub deadline: Option<String>,
    pub clear_deadline: bool,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    validate_update_params(&params)?;

    let mut builder = ThesisUpdateBuilder::new();
    if let Some(title) = params.title.as_deref() {
        builder = builder.title(title);
    }
    if let Some(abstract_text) = set_or_clear(params.abstract_text, params.clear_abstract) {
        builder = builder.abstract_text(abstract_text);
    }
    if let Some(student) = params.student.as_deref() {
        builder = builder.student_id(student);
    }
    let deadline = params
        .deadline
        .as_deref()
        .map(|raw| parse_date(raw, "deadline"))
        .transpose()?;
    if let Some(deadline) = set_or_clear(deadline, params.clear_deadline) {
        builder = builder.submission_deadline(deadline);
    }

    let thesis = ctx.service.update_thesis(&params.id, builder.build()).await?;
    output(&thesis, flags.format)
}

fn validate_update_params(params: &Params) -> anyhow::Result<()> {
    if params.title.is_none()
        && params.abstract_text.is_none()
        && !params.clear_abstract
        && params.student.is_none()
        && params.deadline.is_none()
        && !params.clear_deadline
    {
        anyhow::bail!(
            "At least one of --title, --abstract, --clear-abstract, --student, --deadline, or --clear-deadline must be provided"
        );
    }
    Ok(())
}
