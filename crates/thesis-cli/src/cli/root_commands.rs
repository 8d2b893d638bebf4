use clap::Subcommand;

use crate::cli::subcommands::{
    CommitteeCommands, MilestoneCommands, ReviewerCommands, StudentCommands,
    SubmissionCommands, SupervisorCommands, ThesisCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Students (reference data).
    Student {
        #[command(subcommand)]
        action: StudentCommands,
    },
    /// Supervisors (reference data).
    Supervisor {
        #[command(subcommand)]
        action: SupervisorCommands,
    },
    /// External reviewers (reference data).
    Reviewer {
        #[command(subcommand)]
        action: ReviewerCommands,
    },
    /// Review committees and their decisions.
    Committee {
        #[command(subcommand)]
        action: CommitteeCommands,
    },
    /// Theses and their status lifecycle.
    Thesis {
        #[command(subcommand)]
        action: ThesisCommands,
    },
    /// Milestones of a thesis.
    Milestone {
        #[command(subcommand)]
        action: MilestoneCommands,
    },
    /// Submissions handed in against a thesis.
    Submission {
        #[command(subcommand)]
        action: SubmissionCommands,
    },
    /// Counts per status and recent activity.
    Dashboard,
}
