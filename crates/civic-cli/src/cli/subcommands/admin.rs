use clap::Subcommand;

/// Administrator commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AdminCommands {
    /// Portal analytics.
    Stats,
    /// User directory.
    Users {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        role: Option<String>,
    },
    /// Change a user's role.
    SetRole { id: String, role: String },
    /// Disable an account.
    Disable { id: String },
    /// Re-enable an account.
    Enable { id: String },
    /// List notifications, newest first.
    Notifications {
        #[arg(long)]
        unread: bool,
    },
    /// Mark a notification (or all of them) read.
    MarkRead {
        #[arg(required_unless_present = "all")]
        id: Option<String>,
        #[arg(long, conflicts_with = "id")]
        all: bool,
    },
    /// Show effective portal settings.
    Settings,
}
