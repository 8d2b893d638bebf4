use anyhow::Context;
use thesis_config::ThesisConfig;
use thesis_db::WorkflowService;

use crate::bootstrap::ensure_db_parent;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: WorkflowService,
    pub config: ThesisConfig,
}

impl AppContext {
    pub async fn init(config: ThesisConfig) -> anyhow::Result<Self> {
        ensure_db_parent(&config)?;
        let service = WorkflowService::new_local(&config.database.path)
            .await
            .with_context(|| format!("failed to open database at {}", config.database.path))?;
        tracing::debug!(path = %config.database.path, "workflow service ready");
        Ok(Self { service, config })
    }
}
