use clap::Subcommand;

/// Committee commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CommitteeCommands {
    /// Register a committee member.
    AddMember {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// List all committee members, or one thesis's committee.
    Members {
        #[arg(long)]
        thesis: Option<String>,
    },
    /// Replace a thesis's committee (no members clears it).
    Set {
        thesis: String,
        members: Vec<String>,
    },
    /// Record a member's decision: approve, reject, minor-revision.
    Decide {
        thesis: String,
        member: String,
        decision: String,
        #[arg(long)]
        comment: Option<String>,
    },
    /// Latest decision per member and whether approval is possible.
    Status {
        thesis: String,
        /// Include the full decision log.
        #[arg(long)]
        log: bool,
    },
}
