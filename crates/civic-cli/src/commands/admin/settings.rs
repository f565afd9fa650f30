use serde::Serialize;

use civic_config::{AccessConfig, PortalSettings};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SettingsResponse<'a> {
    portal: &'a PortalSettings,
    access: &'a AccessConfig,
}

/// Settings are read-only here; they come from config files and `CIVIC_` env vars.
pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.service.require_admin().await?;
    output(
        &SettingsResponse {
            portal: &ctx.config.portal,
            access: &ctx.config.access,
        },
        flags.format,
    )
}
