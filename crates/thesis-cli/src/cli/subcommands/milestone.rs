use clap::Subcommand;

/// Milestone commands.
#[derive(Clone, Debug, Subcommand)]
pub enum MilestoneCommands {
    /// Add a milestone to a thesis.
    Add {
        thesis: String,
        #[arg(long)]
        title: String,
        /// Due date (YYYY-MM-DD).
        #[arg(long)]
        due: String,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Get a milestone by ID.
    Get { id: String },
    /// List a thesis's milestones by due date.
    List { thesis: String },
    /// Edit title, due date, or notes.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        due: Option<String>,
        #[arg(long, conflicts_with = "clear_notes")]
        notes: Option<String>,
        #[arg(long)]
        clear_notes: bool,
    },
    /// Delete a milestone.
    Delete { id: String },
    /// Move a milestone to its next status.
    Transition { id: String, status: String },
}
