//! idm - identity registry CLI
//!
//! # Examples
//!
//! ```bash
//! # Register as an account (development mode)
//! idm --account 0xa11ce register --name Alice --email alice@example.com
//!
//! # List everyone, in registration order
//! idm list --pretty
//!
//! # Seed eight demo accounts
//! idm seed
//! ```

mod cli;
mod commands;

use crate::{cli::Cli, commands::Commands};

use idm_cli::{Client, seed_accounts};

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Discover server URL: explicit flag > port file > error
    let server_url = match cli.server {
        Some(url) => url,
        None => discover_server_url(),
    };

    let client = Client::new(&server_url, cli.account.as_deref(), cli.token.as_deref());

    let result = match cli.command {
        Commands::Register { name, email } => client.register(&name, &email).await,
        Commands::Update {
            name,
            email,
            profile_image,
        } => {
            client
                .update(&name, &email, profile_image.as_deref())
                .await
        }
        Commands::Delete => client.delete().await,
        Commands::Get { owner: Some(owner) } => client.get(&owner).await,
        Commands::Get { owner: None } => client.get_own().await,
        Commands::Users => client.list_users().await,
        Commands::List => client.list_identities().await,
        Commands::Seed {
            count,
            account_prefix,
        } => Ok(seed_accounts(&client, count, &account_prefix).await),
        Commands::Health => client.health().await,
    };

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Discover the server URL from the port discovery file.
///
/// idm-server writes `server.json` after binding; a file left by a dead
/// process is ignored.
fn discover_server_url() -> String {
    let port_path = || {
        idm_config::PortFileInfo::path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| ".idm/server.json".to_string())
    };

    match idm_config::PortFileInfo::read_live() {
        Ok(Some(info)) => info.url(),
        Ok(None) => {
            eprintln!("Error: No running idm-server found.");
            eprintln!();
            eprintln!("Checked: {}", port_path());
            eprintln!();
            eprintln!("Start the server first:");
            eprintln!("  cargo run -p idm-server");
            eprintln!();
            eprintln!("Or specify a server URL explicitly:");
            eprintln!("  idm --server http://127.0.0.1:8000 <command>");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error reading port file ({}): {}", port_path(), e);
            eprintln!();
            eprintln!("Specify a server URL explicitly:");
            eprintln!("  idm --server http://127.0.0.1:8000 <command>");
            std::process::exit(1);
        }
    }
}
