use clap::Subcommand;

use crate::cli::subcommands::{AdminCommands, AuthCommands, IssueCommands, PriorityCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Report, browse, and triage issues.
    Issue {
        #[command(subcommand)]
        action: IssueCommands,
    },
    /// Priority scoring without touching storage.
    Priority {
        #[command(subcommand)]
        action: PriorityCommands,
    },
    /// Accounts and sign-in.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Administrator views.
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },
}
