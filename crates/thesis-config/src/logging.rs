//! Logging configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive (e.g. `thesis_db=debug`). `THESIS_LOG`
    /// and the `--quiet`/`--verbose` flags take precedence.
    #[serde(default)]
    pub filter: Option<String>,
}
