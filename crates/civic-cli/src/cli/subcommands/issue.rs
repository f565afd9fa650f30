use clap::Subcommand;

/// Issue commands.
#[derive(Clone, Debug, Subcommand)]
pub enum IssueCommands {
    /// Report a new issue. The priority score is computed from the factors.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, default_value = "other")]
        category: String,
        #[arg(long)]
        location: Option<String>,
        #[arg(long, default_value = "low")]
        severity: String,
        #[arg(long, default_value_t = 1)]
        affected_people: u32,
        #[arg(long, default_value_t = 1)]
        duration_hours: u32,
        #[arg(long, default_value = "low")]
        area_importance: String,
        /// Image reference (path or URL).
        #[arg(long)]
        image: Option<String>,
    },
    /// List issues.
    List {
        /// Case-insensitive match on title, description, or location.
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        status: Option<String>,
        /// Priority band: low, medium, high, critical.
        #[arg(long)]
        priority: Option<String>,
        /// Only issues filed by this user id.
        #[arg(long)]
        reporter: Option<String>,
        /// Order: newest or priority.
        #[arg(long, default_value = "newest")]
        sort: String,
        /// 1-based page number.
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Issues filed by the signed-in user.
    Mine {
        /// all, active, or a status.
        #[arg(long, default_value = "all")]
        tab: String,
    },
    /// Get an issue by ID.
    Get { id: String },
    /// Edit an issue. Factor edits keep the stored score.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        severity: Option<String>,
        #[arg(long)]
        affected_people: Option<u32>,
        #[arg(long)]
        duration_hours: Option<u32>,
        #[arg(long)]
        area_importance: Option<String>,
        #[arg(long)]
        image: Option<String>,
    },
    /// Set one issue's status (admin).
    Status { id: String, status: String },
    /// Set the status of several issues (admin).
    BulkStatus {
        #[arg(long)]
        status: String,
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },
    /// Comment on an issue.
    Comment { id: String, body: String },
    /// Flag an issue for review.
    Report { id: String },
    /// Upvote an issue.
    Upvote { id: String },
    /// Recompute the stored priority score from current factors (admin).
    Recompute { id: String },
}
