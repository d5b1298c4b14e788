use anyhow::Context;
use grade_config::GradebookConfig;
use grade_db::service::GradebookService;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: GradebookService,
    pub config: GradebookConfig,
}

impl AppContext {
    /// Open the configured store. Migrations run as part of opening.
    pub async fn init(config: GradebookConfig) -> anyhow::Result<Self> {
        let service = GradebookService::from_config(&config.database)
            .await
            .with_context(|| {
                format!(
                    "failed to open gradebook store at {}",
                    config.database.location()
                )
            })?;
        tracing::debug!(location = %config.database.location(), "store opened");

        Ok(Self { service, config })
    }
}
