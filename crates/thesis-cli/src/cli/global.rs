use clap::ValueEnum;

/// How command results are printed on stdout.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// Aligned columns for humans.
    Table,
    /// Compact single-line JSON, for piping.
    Raw,
}

/// Flags accepted anywhere on the command line, copied out of `Cli`.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub limit: Option<u32>,
    pub quiet: bool,
    pub verbose: bool,
    /// Overrides `database.path`.
    pub db: Option<String>,
}
