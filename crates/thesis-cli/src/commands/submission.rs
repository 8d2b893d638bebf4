use thesis_core::enums::SubmissionKind;
use thesis_db::updates::submission::{NewSubmission, SubmissionUpdate};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SubmissionCommands;
use crate::commands::shared::parse::{parse_enum, parse_timestamp, set_or_clear};
use crate::context::AppContext;
use crate::output::output;

/// Handle `thesis submission`.
pub async fn handle(
    action: &SubmissionCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SubmissionCommands::Record {
            thesis,
            kind,
            url,
            comment,
            at,
        } => {
            let kind: SubmissionKind = parse_enum(kind)?;
            let input = NewSubmission {
                thesis_id: thesis.clone(),
                kind,
                submitted_at: at.as_deref().map(|raw| parse_timestamp(raw, "at")).transpose()?,
                url: url.clone(),
                comment: comment.clone(),
            };
            let submission = ctx.service.record_submission(input).await?;
            output(&submission, flags.format)
        }
        SubmissionCommands::Get { id } => {
            let submission = ctx.service.get_submission(id).await?;
            output(&submission, flags.format)
        }
        SubmissionCommands::List { thesis } => {
            let submissions = ctx.service.list_submissions(thesis).await?;
            output(&submissions, flags.format)
        }
        SubmissionCommands::Update {
            id,
            kind,
            at,
            url,
            clear_url,
            comment,
            clear_comment,
        } => {
            let update = SubmissionUpdate {
                kind: kind.as_deref().map(parse_enum::<SubmissionKind>).transpose()?,
                submitted_at: at.as_deref().map(|raw| parse_timestamp(raw, "at")).transpose()?,
                url: set_or_clear(url.clone(), *clear_url),
                comment: set_or_clear(comment.clone(), *clear_comment),
            };
            let submission = ctx.service.update_submission(id, update).await?;
            output(&submission, flags.format)
        }
        SubmissionCommands::Delete { id } => {
            ctx.service.delete_submission(id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
    }
}
