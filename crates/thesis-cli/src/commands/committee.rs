use serde::Serialize;
use thesis_core::entities::DecisionEntry;
use thesis_core::enums::CommitteeDecision;
use thesis_core::responses::CommitteeStatus;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CommitteeCommands;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// `committee status --log` response.
#[derive(Debug, Serialize)]
struct StatusWithLog {
    #[serde(flatten)]
    status: CommitteeStatus,
    log: Vec<DecisionEntry>,
}

/// Handle `thesis committee`.
pub async fn handle(
    action: &CommitteeCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CommitteeCommands::AddMember { name, email } => {
            let member = ctx.service.create_committee_member(name, email).await?;
            output(&member, flags.format)
        }
        CommitteeCommands::Members { thesis } => {
            let members = match thesis {
                Some(thesis_id) => ctx.service.list_committee(thesis_id).await?,
                None => ctx.service.list_committee_members().await?,
            };
            output(&members, flags.format)
        }
        CommitteeCommands::Set { thesis, members } => {
            let members = ctx.service.set_committee(thesis, members).await?;
            output(&members, flags.format)
        }
        CommitteeCommands::Decide {
            thesis,
            member,
            decision,
            comment,
        } => {
            let decision: CommitteeDecision = parse_enum(decision)?;
            let entry = ctx
                .service
                .record_decision(thesis, member, decision, comment.as_deref())
                .await?;
            output(&entry, flags.format)
        }
        CommitteeCommands::Status { thesis, log } => {
            let status = ctx.service.committee_status(thesis).await?;
            if *log {
                let log = ctx.service.decision_log(thesis).await?;
                output(&StatusWithLog { status, log }, flags.format)
            } else {
                output(&status, flags.format)
            }
        }
    }
}
