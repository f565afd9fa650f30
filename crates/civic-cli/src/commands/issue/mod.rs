mod bulk_status;
mod create;
mod get;
mod interact;
mod list;
mod mine;
mod recompute;
mod status;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::IssueCommands;
use crate::context::AppContext;

/// Handle `civic issue`.
pub async fn handle(action: &IssueCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        IssueCommands::Create {
            title,
            description,
            category,
            location,
            severity,
            affected_people,
            duration_hours,
            area_importance,
            image,
        } => {
            create::run(
                create::Params {
                    title: title.clone(),
                    description: description.clone(),
                    category: category.clone(),
                    location: location.clone(),
                    severity: severity.clone(),
                    affected_people: *affected_people,
                    duration_hours: *duration_hours,
                    area_importance: area_importance.clone(),
                    image: image.clone(),
                },
                ctx,
                flags,
            )
            .await
        }
        IssueCommands::List {
            search,
            category,
            status,
            priority,
            reporter,
            sort,
            page,
        } => {
            list::run(
                list::Params {
                    search: search.clone(),
                    category: category.clone(),
                    status: status.clone(),
                    priority: priority.clone(),
                    reporter: reporter.clone(),
                    sort: sort.clone(),
                    page: *page,
                },
                ctx,
                flags,
            )
            .await
        }
        IssueCommands::Mine { tab } => mine::run(tab, ctx, flags).await,
        IssueCommands::Get { id } => get::run(id, ctx, flags).await,
        IssueCommands::Update {
            id,
            title,
            description,
            category,
            location,
            severity,
            affected_people,
            duration_hours,
            area_importance,
            image,
        } => {
            update::run(
                update::Params {
                    id: id.clone(),
                    title: title.clone(),
                    description: description.clone(),
                    category: category.clone(),
                    location: location.clone(),
                    severity: severity.clone(),
                    affected_people: *affected_people,
                    duration_hours: *duration_hours,
                    area_importance: area_importance.clone(),
                    image: image.clone(),
                },
                ctx,
                flags,
            )
            .await
        }
        IssueCommands::Status { id, status } => status::run(id, status, ctx, flags).await,
        IssueCommands::BulkStatus { status, ids } => bulk_status::run(status, ids, ctx, flags).await,
        IssueCommands::Comment { id, body } => interact::comment(id, body, ctx, flags).await,
        IssueCommands::Report { id } => interact::report(id, ctx, flags).await,
        IssueCommands::Upvote { id } => interact::upvote(id, ctx, flags).await,
        IssueCommands::Recompute { id } => recompute::run(id, ctx, flags).await,
    }
}
