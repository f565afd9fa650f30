mod account;
mod notifications;
mod role;
mod settings;
mod stats;
mod users;

use civic_core::enums::AccountStatus;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AdminCommands;
use crate::context::AppContext;

/// Handle `civic admin <subcommand>`.
pub async fn handle(action: &AdminCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        AdminCommands::Stats => stats::run(ctx, flags).await,
        AdminCommands::Users { search, role } => {
            users::run(search.as_deref(), role.as_deref(), ctx, flags).await
        }
        AdminCommands::SetRole { id, role } => role::run(id, role, ctx, flags).await,
        AdminCommands::Disable { id } => account::run(id, AccountStatus::Disabled, ctx, flags).await,
        AdminCommands::Enable { id } => account::run(id, AccountStatus::Active, ctx, flags).await,
        AdminCommands::Notifications { unread } => notifications::list(*unread, ctx, flags).await,
        AdminCommands::MarkRead { id, all } => {
            notifications::mark_read(id.as_deref(), *all, ctx, flags).await
        }
        AdminCommands::Settings => settings::run(ctx, flags).await,
    }
}
