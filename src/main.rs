//! Department Admin Terminal Client
//!
//! An interactive terminal interface for managing a hierarchical department
//! entity through a remote REST API: list, filter, sort, create, and
//! bulk-delete records. The parent/child hierarchy is rendered as a
//! flattened table in which every row shows its ultimate root ancestor.
//!
//! The client holds no state of its own beyond the last fetched record list
//! and transient view state; every mutation re-fetches the full list so the
//! table always matches what the server last confirmed.

mod api;
mod app;
mod config;
mod errors;
mod hierarchy;
mod models;
mod ui;
mod view;

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use api::DepartmentsApi;
use app::{run_app, App};
use config::Config;

/// Command-line arguments; each flag overrides its environment variable.
#[derive(Debug, Parser)]
#[command(
    name = "dept-admin",
    about = "Terminal admin client for the department hierarchy API"
)]
struct Args {
    /// API base URL, e.g. http://127.0.0.1:8000/api (overrides DEPT_API_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Per-request timeout in seconds (overrides DEPT_HTTP_TIMEOUT_SECS)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Append diagnostics to this file (overrides DEPT_LOG_FILE)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration
    let mut config = Config::from_env();
    if let Some(base_url) = args.base_url {
        config.api_base_url = base_url;
    }
    if let Some(timeout) = args.timeout_secs {
        config.http_timeout_secs = timeout;
    }
    if let Some(path) = args.log_file {
        config.log_file = Some(path);
    }

    init_logging(&config)?;

    tracing::info!("Starting department admin client");
    tracing::info!("API base URL: {}", config.api_base_url);

    let api = DepartmentsApi::new(&config)?;
    let app = App::new(api);

    // Hand the terminal to the UI and make sure it is restored afterwards,
    // whichever way the event loop ends.
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, app).await;

    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    result?;
    Ok(())
}

/// Initialize logging into the configured file.
///
/// Stdout belongs to the terminal UI, so without a log file the subscriber
/// is never installed and all tracing macros are no-ops.
fn init_logging(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let file = File::options().create(true).append(true).open(path)?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(file))
                .with_ansi(false),
        )
        .init();
    Ok(())
}
