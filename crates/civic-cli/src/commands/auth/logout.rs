use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LogoutResponse {
    signed_out: bool,
    session_id: Option<String>,
}

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let ended = ctx.service.logout().await?;
    output(
        &LogoutResponse {
            signed_out: ended.is_some(),
            session_id: ended.map(|session| session.id),
        },
        flags.format,
    )
}
