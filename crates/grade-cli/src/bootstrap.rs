use grade_config::GradebookConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration (with `.env`) and apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<GradebookConfig> {
    let mut config = GradebookConfig::load_with_dotenv()?;

    if let Some(path) = &flags.db {
        if config.database.is_remote() {
            tracing::warn!(
                path = %path,
                url = %config.database.url,
                "--db ignored: a remote database is configured"
            );
        } else {
            config = config.with_database_path(path.clone());
        }
    }

    Ok(config)
}
