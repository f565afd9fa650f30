use civic_core::catalog::UserFilter;
use civic_core::enums::Role;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_opt_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    search: Option<&str>,
    role: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let filter = UserFilter {
        search: search.map(str::to_string),
        role: parse_opt_enum::<Role>(role, "role")?,
    };
    let mut users = ctx.service.list_users(&filter).await?;
    if let Some(limit) = flags.limit.filter(|limit| *limit > 0) {
        users.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
    }
    output(&users, flags.format)
}
