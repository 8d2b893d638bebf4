use clap::Subcommand;

/// Thesis commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ThesisCommands {
    /// Create a thesis in draft.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        student: String,
        #[arg(long = "abstract")]
        abstract_text: Option<String>,
        #[arg(long)]
        supervisor: Option<String>,
        /// Submission deadline (YYYY-MM-DD).
        #[arg(long)]
        deadline: Option<String>,
    },
    /// Get a thesis by ID.
    Get { id: String },
    /// List theses, most recently updated first.
    List {
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        student: Option<String>,
        #[arg(long)]
        supervisor: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Edit title, abstract, student, or deadline.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long = "abstract", conflicts_with = "clear_abstract")]
        abstract_text: Option<String>,
        #[arg(long)]
        clear_abstract: bool,
        #[arg(long)]
        student: Option<String>,
        #[arg(long, conflicts_with = "clear_deadline")]
        deadline: Option<String>,
        #[arg(long)]
        clear_deadline: bool,
    },
    /// Delete a thesis and everything attached to it.
    Delete { id: String },
    /// Move a thesis to its next status.
    Transition {
        id: String,
        status: String,
        #[arg(long)]
        note: Option<String>,
    },
    /// Assign or clear the supervisor.
    Assign {
        id: String,
        #[arg(required_unless_present = "clear", conflicts_with = "clear")]
        supervisor: Option<String>,
        #[arg(long)]
        clear: bool,
    },
    /// Assign or clear the external reviewer.
    AssignReviewer {
        id: String,
        #[arg(required_unless_present = "clear", conflicts_with = "clear")]
        reviewer: Option<String>,
        #[arg(long)]
        clear: bool,
    },
    /// Status history, oldest first.
    History {
        id: String,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Theses past their deadline that are not yet approved.
    Overdue {
        /// Reference date (YYYY-MM-DD), defaults to today (UTC).
        #[arg(long)]
        today: Option<String>,
    },
}
