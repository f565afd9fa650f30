use civic_core::enums::Role;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, role: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let role = parse_enum::<Role>(role, "role")?;
    let user = ctx.service.set_user_role(id, role).await?;
    output(&user, flags.format)
}
