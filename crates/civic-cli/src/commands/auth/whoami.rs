use serde::Serialize;

use civic_core::identity::SessionUser;
use civic_db::store::SessionStore;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WhoamiResponse {
    signed_in: bool,
    user: Option<SessionUser>,
    is_admin: bool,
}

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user = ctx.service.current_user().await?;
    let is_admin = user
        .as_ref()
        .is_some_and(|user| user.is_admin(&ctx.config.access.admin_emails));
    output(
        &WhoamiResponse {
            signed_in: user.is_some(),
            user,
            is_admin,
        },
        flags.format,
    )
}
