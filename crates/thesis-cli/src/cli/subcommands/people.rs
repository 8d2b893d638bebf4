use clap::Subcommand;

/// Student commands.
#[derive(Clone, Debug, Subcommand)]
pub enum StudentCommands {
    /// Register a student.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// List students.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a student by ID.
    Get { id: String },
}

/// Supervisor commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SupervisorCommands {
    /// Register a supervisor.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        department: String,
    },
    /// List supervisors.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a supervisor by ID.
    Get { id: String },
}

/// External reviewer commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ReviewerCommands {
    /// Register an external reviewer.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// List external reviewers.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get an external reviewer by ID.
    Get { id: String },
}
