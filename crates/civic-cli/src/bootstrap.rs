use anyhow::Context;

use civic_config::CivicConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration, honoring a `.env` in the working directory
/// and the `--db` override.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<CivicConfig> {
    load_dotenv()?;

    let mut config = CivicConfig::load().context("failed to load civic configuration")?;
    if let Some(db) = &flags.db {
        tracing::debug!(db, "database path overridden on the command line");
        config.storage.db_path.clone_from(db);
    }
    Ok(config)
}

fn load_dotenv() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let env_path = cwd.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}
