mod login;
mod logout;
mod register;
mod whoami;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;
use crate::context::AppContext;

/// Handle `civic auth <subcommand>`.
pub async fn handle(action: &AuthCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        AuthCommands::Register { name, email, phone } => {
            register::run(name, email, phone.as_deref(), ctx, flags).await
        }
        AuthCommands::Login { email } => login::run(email, ctx, flags).await,
        AuthCommands::Logout => logout::run(ctx, flags).await,
        AuthCommands::Whoami => whoami::run(ctx, flags).await,
    }
}
