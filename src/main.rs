use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod client;
mod commands;
mod config;
mod error;
mod input;
mod types;

use client::PasteClient;
use config::Config;

/// Create, fetch, update and delete pastes on a paste server.
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Base URL of the paste server, overriding the config file
    #[arg(long, global = true)]
    url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    New(commands::new::Args),
    Get(commands::get::Args),
    Update(commands::update::Args),
    Delete(commands::delete::Args),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // stdout carries command output, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("failed to load config")?;
    if let Some(url) = cli.url.filter(|url| !url.trim().is_empty()) {
        config.url = url;
    }

    let client = PasteClient::new(&config).context("failed to build HTTP client")?;
    debug!("using paste server {}", client.base_url());

    match cli.command {
        Command::New(args) => commands::new::run(&client, args).await,
        Command::Get(args) => commands::get::run(&client, args).await,
        Command::Update(args) => commands::update::run(&client, args).await,
        Command::Delete(args) => commands::delete::run(&client, args).await,
    }
}
