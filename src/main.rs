//! triage - An executive task dashboard for the terminal.
//!
//! This is the main binary that launches the TUI application.

use std::{fs::OpenOptions, path::Path, sync::Mutex};

use anyhow::Context;
use chrono::Local;
use tracing::info;
use tracing_subscriber::EnvFilter;
use triage_config::Config;
use triage_protocol::seed::seed_store;
use triage_tui::{App, terminal};

/// Environment variable holding the log filter directives.
const LOG_ENV: &str = "TRIAGE_LOG";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().await?;

    // The terminal belongs to the UI, so logs only go to a file.
    if let Some(path) = &config.log_file {
        init_logging(path)?;
    }

    let today = Local::now().date_naive();
    let store = seed_store(today)?;
    info!(tasks = store.len(), %today, "seeded task store");

    let mut app = App::with_config(store, today, &config);

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();
    let mut terminal = terminal::setup_terminal()?;

    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
