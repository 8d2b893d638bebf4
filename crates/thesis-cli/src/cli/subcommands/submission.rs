use clap::Subcommand;

/// Submission commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SubmissionCommands {
    /// Record a submission (proposal, interim, final).
    Record {
        thesis: String,
        #[arg(long)]
        kind: String,
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        comment: Option<String>,
        /// Submission time (RFC 3339), defaults to now.
        #[arg(long)]
        at: Option<String>,
    },
    /// Get a submission by ID.
    Get { id: String },
    /// List a thesis's submissions, newest first.
    List { thesis: String },
    /// Edit kind, time, link, or comment.
    Update {
        id: String,
        #[arg(long)]
        kind: Option<String>,
        #[arg(long)]
        at: Option<String>,
        #[arg(long, conflicts_with = "clear_url")]
        url: Option<String>,
        #[arg(long)]
        clear_url: bool,
        #[arg(long, conflicts_with = "clear_comment")]
        comment: Option<String>,
        #[arg(long)]
        clear_comment: bool,
    },
    /// Delete a submission.
    Delete { id: String },
}
