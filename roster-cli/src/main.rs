//! Roster CLI
//!
//! Command-line interface for the roster service: runs the API server and
//! the scheduled expiration check.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use roster_api::{ApiConfig, ApiServer};
use roster_core::codec;
use roster_core::traits::RemoteStore;
use roster_notify::TelegramNotifier;
use roster_scanner::ExpiryScanner;
use roster_store::GithubStore;

/// Roster - GitHub-backed entry roster with expiration alerts
#[derive(Parser)]
#[command(name = "roster")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the API server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3001")]
        port: u16,
        /// Bind address
        #[arg(short, long, default_value = "0.0.0.0")]
        bind: String,
    },

    /// Scan the remote file for expired entries and send alerts.
    /// Intended to be run by an external scheduler (cron).
    CheckExpired,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "roster=debug,info"
    } else {
        "roster=info,warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Serve { port, bind } => cmd_serve(port, &bind).await,
        Commands::CheckExpired => cmd_check_expired().await,
    }
}

/// Run the API server
async fn cmd_serve(port: u16, bind: &str) -> Result<()> {
    let config = ApiConfig::from_env();

    let addr: SocketAddr = format!("{bind}:{port}")
        .parse()
        .with_context(|| format!("Invalid bind address: {bind}:{port}"))?;

    println!("{}", format!("Roster API on http://{addr}").cyan().bold());

    let server = ApiServer::new(config).context("Failed to build API server")?;
    server.run(addr).await.context("Server terminated")?;
    Ok(())
}

/// One-shot expiration scan against the remote store (no cache)
async fn cmd_check_expired() -> Result<()> {
    let config = ApiConfig::from_env();

    let store =
        GithubStore::with_config(config.store).context("Failed to build store client")?;
    let notifier = TelegramNotifier::with_config(config.notifier)
        .context("Failed to build notifier client")?;

    let doc = store.read().await.context("Failed to read remote file")?;
    let entries = codec::parse_document(&doc.content);

    let outcome = ExpiryScanner::new()
        .notify_expired(&entries, Utc::now().date_naive(), &notifier)
        .await;

    println!(
        "{} scanned {}, expired {}, notified {}",
        "Expiration check:".cyan().bold(),
        outcome.scanned,
        outcome.expired.to_string().yellow(),
        outcome.notified.to_string().green(),
    );

    Ok(())
}
