use anyhow::Context;

use civic_config::CivicConfig;
use civic_db::service::PortalService;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: PortalService,
    pub config: CivicConfig,
}

impl AppContext {
    /// Open the portal database and trail described by `config`.
    pub async fn init(config: CivicConfig) -> anyhow::Result<Self> {
        let service = PortalService::from_config(&config)
            .await
            .with_context(|| format!("failed to open portal database at {}", config.storage.db_path))?;
        tracing::debug!(
            db = %config.storage.db_path,
            trail = config.storage.trail_enabled,
            "application context ready"
        );
        Ok(Self { service, config })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) async fn memory_context() -> AppContext {
        let mut config = CivicConfig::default();
        config.storage.db_path = ":memory:".into();
        config.storage.trail_enabled = false;
        AppContext::init(config).await.expect("in-memory context should open")
    }

    #[tokio::test]
    async fn init_opens_empty_portal() {
        let ctx = memory_context().await;
        assert!(ctx.service.current_session().await.unwrap().is_none());
        assert!(!ctx.service.trail().is_enabled());
    }
}
