mod label;
mod score;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PriorityCommands;

/// Handle `civic priority`.
pub fn handle(action: &PriorityCommands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        PriorityCommands::Score {
            severity,
            affected_people,
            duration_hours,
            area_importance,
        } => score::run(
            severity,
            *affected_people,
            *duration_hours,
            area_importance,
            flags,
        ),
        PriorityCommands::Label { score } => label::run(*score, flags),
    }
}
