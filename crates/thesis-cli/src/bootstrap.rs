use std::path::Path;

use anyhow::Context;
use thesis_config::ThesisConfig;

use crate::cli::GlobalFlags;

/// Load layered config (with `.env`) and apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<ThesisConfig> {
    let config = ThesisConfig::load_with_dotenv().context("failed to load configuration")?;
    Ok(apply_overrides(config, flags))
}

fn apply_overrides(mut config: ThesisConfig, flags: &GlobalFlags) -> ThesisConfig {
    if let Some(ref path) = flags.db {
        config.database.path.clone_from(path);
    }
    config
}

/// Create the parent directory of an on-disk database if it is missing.
pub fn ensure_db_parent(config: &ThesisConfig) -> anyhow::Result<()> {
    if config.database.is_in_memory() {
        return Ok(());
    }
    if let Some(parent) = Path::new(&config.database.path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create database directory {}", parent.display())
            })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn flags(db: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            limit: None,
            quiet: false,
            verbose: false,
            db: db.map(String::from),
        }
    }

    #[test]
    fn db_flag_overrides_config() {
        let config = apply_overrides(ThesisConfig::default(), &flags(Some("/tmp/other.db")));
        assert_eq!(config.database.path, "/tmp/other.db");
    }

    #[test]
    fn config_path_kept_without_flag() {
        let config = apply_overrides(ThesisConfig::default(), &flags(None));
        assert_eq!(config.database.path, ThesisConfig::default().database.path);
    }

    #[test]
    fn creates_missing_parent() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ThesisConfig::default();
        config.database.path = dir
            .path()
            .join("nested/state/thesis.db")
            .to_string_lossy()
            .into_owned();
        ensure_db_parent(&config).unwrap();
        assert!(dir.path().join("nested/state").is_dir());
    }
}
