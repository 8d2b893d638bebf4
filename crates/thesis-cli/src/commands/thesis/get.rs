use serde::Serialize;
use thesis_core::entities::{CommitteeMember, Milestone, Submission, Thesis};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ThesisDetailResponse {
    thesis: Thesis,
    milestones: Vec<Milestone>,
    submissions: Vec<Submission>,
    committee: Vec<CommitteeMember>,
}

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let thesis = ctx.service.get_thesis(id).await?;
    let milestones = ctx.service.list_milestones(id).await?;
    let submissions = ctx.service.list_submissions(id).await?;
    let committee = ctx.service.list_committee(id).await?;
    output(
        &ThesisDetailResponse {
            thesis,
            milestones,
            submissions,
            committee,
        },
        flags.format,
    )
}
