use thiserror::Error;

/// Failures while loading `ThesisConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or `THESIS_*` variable could not be read into the config.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// Loaded fine, but a value makes no sense (zero limit, empty path).
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
