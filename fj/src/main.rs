//! fj - eight-step personal finance journey
//!
//! CLI entry point. Each command restores the saved journey, applies one
//! change and saves it again; `fj journey` keeps a session open.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use eyre::{Context, Result};
use tracing::info;

use finjourney::cli::{Cli, Command};
use finjourney::config::Config;
use finjourney::repl::run_interactive;
use finjourney::session::JourneySession;

fn setup_logging(log_level: Option<&str>) -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("finjourney")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Log to file; stdout belongs to the journey
    let level = match log_level.map(|l| l.parse::<tracing::Level>()) {
        Some(Ok(level)) => level,
        Some(Err(_)) => {
            eprintln!("Unknown log level '{}', using INFO", log_level.unwrap_or_default());
            tracing::Level::INFO
        }
        None => tracing::Level::INFO,
    };
    let log_file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("fj.log"))
        .context("Failed to open log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // CLI flag wins over the config file
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| Config::load_log_level(cli.config.as_ref()));
    setup_logging(log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    info!(
        "fj loaded config: storage={}, webhook={}",
        config.storage.dir.display(),
        config.plan.webhook_url
    );

    match cli.command {
        None | Some(Command::Journey) => run_interactive(&config).await,
        Some(command) => run_once(&config, command).await,
    }
}

/// Apply one command to the saved journey
async fn run_once(config: &Config, command: Command) -> Result<()> {
    let mut session = JourneySession::from_config(config)?;
    if let Some(reply) = session.mount()
        && !reply.notices.is_empty()
    {
        reply.print(false);
    }

    let reply = session.execute(command).await.context("Failed to save journey")?;
    reply.print(false);
    if reply.failed() {
        std::process::exit(1);
    }
    Ok(())
}
