use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Student { action } => commands::people::handle_student(&action, ctx, flags).await,
        Commands::Supervisor { action } => {
            commands::people::handle_supervisor(&action, ctx, flags).await
        }
        Commands::Reviewer { action } => {
            commands::people::handle_reviewer(&action, ctx, flags).await
        }
        Commands::Committee { action } => commands::committee::handle(&action, ctx, flags).await,
        Commands::Thesis { action } => commands::thesis::handle(&action, ctx, flags).await,
        Commands::Milestone { action } => commands::milestone::handle(&action, ctx, flags).await,
        Commands::Submission { action } => commands::submission::handle(&action, ctx, flags).await,
        Commands::Dashboard => commands::dashboard::handle(ctx, flags).await,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use thesis_config::ThesisConfig;
    use thesis_core::enums::ThesisStatus;
    use thesis_db::updates::thesis::NewThesis;

    use super::dispatch;
    use crate::cli::subcommands::{CommitteeCommands, ReviewerCommands, ThesisCommands};
    use crate::cli::root_commands::Commands;
    use crate::cli::{GlobalFlags, OutputFormat};
    use crate::context::AppContext;

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Raw,
            limit: None,
            quiet: true,
            verbose: false,
            db: None,
        }
    }

    async fn context(dir: &tempfile::TempDir) -> AppContext {
        let mut config = ThesisConfig::default();
        config.database.path = dir
            .path()
            .join(".thesis/thesis.db")
            .to_string_lossy()
            .into_owned();
        AppContext::init(config).await.unwrap()
    }

    async fn seeded_thesis(ctx: &AppContext) -> String {
        let student = ctx
            .service
            .create_student("Ada Student", "ada@university.edu")
            .await
            .unwrap();
        ctx.service
            .create_thesis(NewThesis::new("Incremental parsing", student.id))
            .await
            .unwrap()
            .id
    }

    fn transition(id: &str, status: &str) -> Commands {
        Commands::Thesis {
            action: ThesisCommands::Transition {
                id: id.to_string(),
                status: status.to_string(),
                note: None,
            },
        }
    }

    #[tokio::test]
    async fn transition_commands_drive_the_service() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(&dir).await;
        let id = seeded_thesis(&ctx).await;

        dispatch(transition(&id, "submitted"), &ctx, &flags()).await.unwrap();
        dispatch(transition(&id, "under-review"), &ctx, &flags()).await.unwrap();

        let thesis = ctx.service.get_thesis(&id).await.unwrap();
        assert_eq!(thesis.status, ThesisStatus::UnderReview);

        let history = Commands::Thesis {
            action: ThesisCommands::History {
                id: id.clone(),
                limit: Some(1),
            },
        };
        dispatch(history, &ctx, &flags()).await.unwrap();
        assert_eq!(ctx.service.history_for(&id).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn rejected_transition_surfaces_as_error() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(&dir).await;
        let id = seeded_thesis(&ctx).await;

        let err = dispatch(transition(&id, "completed"), &ctx, &flags())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("draft -> completed"));

        let err = dispatch(transition(&id, "archived"), &ctx, &flags())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("archived"));
    }

    #[tokio::test]
    async fn committee_decide_rejects_unknown_decision() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(&dir).await;
        let id = seeded_thesis(&ctx).await;

        let command = Commands::Committee {
            action: CommitteeCommands::Decide {
                thesis: id,
                member: "cmt-00000000".to_string(),
                decision: "maybe".to_string(),
                comment: None,
            },
        };
        let err = dispatch(command, &ctx, &flags()).await.unwrap_err();
        assert!(err.to_string().contains("maybe"));
    }

    #[tokio::test]
    async fn reviewer_commands_register_and_assign() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(&dir).await;
        let id = seeded_thesis(&ctx).await;

        let add = Commands::Reviewer {
            action: ReviewerCommands::Add {
                name: "Ines Duarte".to_string(),
                email: "ines@elsewhere.edu".to_string(),
            },
        };
        dispatch(add, &ctx, &flags()).await.unwrap();
        let reviewers = ctx.service.list_external_reviewers().await.unwrap();
        assert_eq!(reviewers.len(), 1);

        let assign = Commands::Thesis {
            action: ThesisCommands::AssignReviewer {
                id: id.clone(),
                reviewer: Some(reviewers[0].id.clone()),
                clear: false,
            },
        };
        dispatch(assign, &ctx, &flags()).await.unwrap();
        let thesis = ctx.service.get_thesis(&id).await.unwrap();
        assert_eq!(thesis.external_reviewer_id, Some(reviewers[0].id.clone()));
        assert!(ctx.service.history_for(&id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn dashboard_runs_on_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(&dir).await;
        dispatch(Commands::Dashboard, &ctx, &flags()).await.unwrap();
    }
}
