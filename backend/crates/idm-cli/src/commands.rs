use idm_cli::DEFAULT_SEED_COUNT;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Register the caller's identity
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },

    /// Replace the caller's name and email
    Update {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// Profile image as a data URL; "" clears it, omit to keep the current one
        #[arg(long)]
        profile_image: Option<String>,
    },

    /// Delete the caller's identity
    Delete,

    /// Show an identity (the caller's own when no owner is given)
    Get { owner: Option<String> },

    /// List registered owners in registration order
    Users,

    /// List all identities in registration order
    List,

    /// Register demo accounts User_1..User_N, one account each
    Seed {
        #[arg(long, default_value_t = DEFAULT_SEED_COUNT)]
        count: u32,
        #[arg(long, default_value = "demo-account-")]
        account_prefix: String,
    },

    /// Show server health
    Health,
}
