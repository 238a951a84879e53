use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "idm")]
#[command(about = "Identity registry CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Server URL (auto-discovered from server.json, or specify manually)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Account to act as when the server runs without authentication
    #[arg(long, global = true, env = "IDM_ACCOUNT")]
    pub(crate) account: Option<String>,

    /// Bearer token for servers with authentication enabled
    #[arg(long, global = true, env = "IDM_TOKEN", hide_env_values = true)]
    pub(crate) token: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
