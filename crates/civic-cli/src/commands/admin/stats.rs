use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let portal = &ctx.config.portal;
    if !portal.show_analytics {
        anyhow::bail!("analytics are disabled (portal.show_analytics = false)");
    }
    let stats = ctx.service.portal_stats(portal.response_window_days).await?;
    output(&stats, flags.format)
}
