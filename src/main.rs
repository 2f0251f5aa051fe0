//! Task management API entry point.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*};

use task_api::api::{create_router, AppState};
use task_api::config::Config;
use task_api::metrics;
use task_api::store::{JsonFileStore, TaskStore};
use task_api::utils::shutdown_signal;
use task_api::AppError;

/// Task management HTTP API.
#[derive(Parser, Debug)]
#[command(name = "task-api")]
#[command(about = "Task management REST API backed by a JSON file")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// HTTP listening port (overrides PORT).
    #[arg(short, long, global = true)]
    port: Option<u16>,

    /// Task data file (overrides DATA_FILE).
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve,

    /// Check configuration validity and that the data file loads.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    let config = load_config(args.port, args.data_file)?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(config.log_filter(args.verbose))
        .init();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(&config)?,
        Some(Command::Serve) | None => cmd_serve(config).await?,
    }

    Ok(())
}

/// Load configuration from the environment, apply CLI overrides and validate.
///
/// Runs before logging is set up, since `RUST_LOG` is part of the config.
/// Failures surface through `main`'s error return.
fn load_config(port: Option<u16>, data_file: Option<PathBuf>) -> task_api::Result<Config> {
    let mut config = Config::load()?;

    if let Some(port) = port {
        config.port = port;
    }
    if let Some(data_file) = data_file {
        config.data_file = data_file;
    }

    config.validate().map_err(AppError::InvalidConfig)?;

    Ok(config)
}

/// Print the effective configuration and try loading the data file.
fn cmd_check_config(config: &Config) -> task_api::Result<()> {
    println!("======================================================================");
    println!("TASK API - CONFIGURATION CHECK");
    println!("======================================================================");
    println!("  Port: {}", config.port);
    println!("  Environment: {}", config.app_env);
    println!("  Data File: {}", config.data_file.display());

    print!("Loading tasks... ");
    let store = JsonFileStore::new(&config.data_file);
    match store.load() {
        Ok(tasks) => {
            println!("OK");
            println!("  Tasks: {}", tasks.len());
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(e.into());
        }
    }

    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Run the HTTP server until a shutdown signal arrives.
async fn cmd_serve(config: Config) -> task_api::Result<()> {
    let store = Arc::new(JsonFileStore::new(&config.data_file));
    let mut app_state = AppState::new(store);

    // Initialize metrics
    match metrics::install_recorder() {
        Ok(handle) => {
            metrics::init_metrics();
            app_state = app_state.with_metrics(handle);
        }
        Err(e) => warn!("Metrics disabled: {}", e),
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;

    info!("Server running on http://localhost:{}", config.port);
    info!("Environment: {}", config.app_env);
    info!("Data file: {}", config.data_file.display());
    info!("Press Ctrl+C to stop");

    axum::serve(listener, create_router(app_state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
