//! Terminal client for the TinyHouse listings API.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tinyhouse_client::GraphQLClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod view;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "tinyhouse")]
#[command(about = "Browse and manage TinyHouse listings")]
#[command(version)]
struct Cli {
    /// GraphQL endpoint (overrides TINYHOUSE_API_URL)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Treat any non-2xx response as a transport failure
    #[arg(long, global = true)]
    reject_non_2xx: bool,

    /// Drop results from superseded requests
    #[arg(long, global = true)]
    fence_stale: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show all listings
    List,

    /// Delete a listing, then refresh the list
    Delete {
        /// Listing id
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Log in with an OAuth authorization code
    Login {
        #[arg(long)]
        code: String,
    },

    /// Log out of the current session
    Logout,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

#[tokio::main]
async fn run(cli: Cli) -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tinyhouse_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = CliConfig::from_env()?;
    if let Some(endpoint) = cli.endpoint {
        config.api_url = endpoint;
    }
    config.reject_non_2xx |= cli.reject_non_2xx;
    config.fence_stale |= cli.fence_stale;

    let client = GraphQLClient::new(config.into_client_config());
    tracing::debug!(?client, "Client configured");

    match cli.command {
        Commands::List => commands::list(&client).await,
        Commands::Delete { id, yes } => commands::delete(&client, &id, yes).await,
        Commands::Login { code } => commands::login(&client, code).await,
        Commands::Logout => commands::logout(&client).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_takes_id_and_confirmation_flag() {
        let cli = Cli::try_parse_from(["tinyhouse", "delete", "5e52", "--yes"]).unwrap();
        match cli.command {
            Commands::Delete { id, yes } => {
                assert_eq!(id, "5e52");
                assert!(yes);
            }
            _ => panic!("expected delete"),
        }
    }

    #[test]
    fn global_overrides_parse_after_the_subcommand() {
        let cli = Cli::try_parse_from([
            "tinyhouse",
            "list",
            "--endpoint",
            "http://localhost:4000/api",
            "--fence-stale",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::List));
        assert_eq!(cli.endpoint.as_deref(), Some("http://localhost:4000/api"));
        assert!(cli.fence_stale);
        assert!(!cli.reject_non_2xx);
    }

    #[test]
    fn login_requires_a_code() {
        assert!(Cli::try_parse_from(["tinyhouse", "login"]).is_err());
        let cli = Cli::try_parse_from(["tinyhouse", "login", "--code", "abc"]).unwrap();
        assert!(matches!(cli.command, Commands::Login { code } if code == "abc"));
    }
}
