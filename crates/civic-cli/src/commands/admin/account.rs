use civic_core::enums::AccountStatus;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: &str,
    status: AccountStatus,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let user = ctx.service.set_user_status(id, status).await?;
    tracing::info!(user = %user.id, status = %status, "account status changed");
    output(&user, flags.format)
}
