use clap::Subcommand;

/// Priority engine commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PriorityCommands {
    /// Score a set of factors. Unrecognized levels count as low.
    Score {
        #[arg(long, default_value = "low")]
        severity: String,
        #[arg(long, default_value_t = 0)]
        affected_people: u32,
        #[arg(long, default_value_t = 0)]
        duration_hours: u32,
        #[arg(long, default_value = "low")]
        area_importance: String,
    },
    /// Show the band for a score.
    Label { score: u8 },
}
