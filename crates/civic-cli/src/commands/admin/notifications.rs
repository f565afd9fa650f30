use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MarkAllResponse {
    marked_read: usize,
}

pub async fn list(unread_only: bool, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let notifications = ctx.service.list_notifications(unread_only).await?;
    output(&notifications, flags.format)
}

pub async fn mark_read(
    id: Option<&str>,
    all: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match (id, all) {
        (_, true) => {
            let marked_read = ctx.service.mark_all_notifications_read().await?;
            output(&MarkAllResponse { marked_read }, flags.format)
        }
        (Some(id), false) => {
            let notification = ctx.service.mark_notification_read(id).await?;
            output(&notification, flags.format)
        }
        (None, false) => anyhow::bail!("mark-read needs a notification id or --all"),
    }
}
