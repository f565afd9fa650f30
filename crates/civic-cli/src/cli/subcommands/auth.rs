use clap::Subcommand;

/// Account and session commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Create a citizen account.
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: Option<String>,
    },
    /// Sign in with a registered email.
    Login { email: String },
    /// Sign out.
    Logout,
    /// Show the signed-in user.
    Whoami,
}
