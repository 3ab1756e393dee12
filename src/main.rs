// terradex - a terminal country directory
//
// Fetches the public REST Countries dataset once per session, keeps it
// in memory as an immutable master list, and renders it as a
// searchable, filterable card grid with a per-country detail overlay.
//
// Architecture:
// - Loader (reqwest): one fetch per load cycle on a background task
// - Filter engine: debounced predicate evaluation over the master list
// - TUI (ratatui): card grid, selectors, and overlays
// - mpsc channels connect the loader task to the event loop

mod cli;
mod config;
mod countries;
mod demo;
mod filter;
mod logging;
mod theme;
mod tui;

use anyhow::Result;
use cli::CliAction;
use config::Config;
use logging::{LogBuffer, TuiLogLayer};
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tui::LoadEvent;

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (config --show, --reset, --edit, --path)
    // If a subcommand was handled, exit early
    let demo_flag = match cli::handle_cli() {
        CliAction::Handled => return Ok(()),
        CliAction::Run { demo } => demo,
    };

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let mut config = Config::from_env();
    if demo_flag {
        config.demo_mode = true;
    }

    // Create log buffer: the TUI owns the screen, so logs are captured
    // in memory instead of written to stdout
    let log_buffer = LogBuffer::new();

    // Initialize tracing
    // Precedence: RUST_LOG env var > config file > default "info"
    let default_filter = format!("terradex={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // Optional rolling file logging (JSON format for structured parsing)
    // The guard must be kept alive for the duration of the program so
    // buffered logs flush on exit
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> =
        if config.logging.file_enabled {
            match std::fs::create_dir_all(&config.logging.file_dir) {
                Ok(()) => {
                    let file_appender =
                        tracing_appender::rolling::daily(&config.logging.file_dir, "terradex.log");
                    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

                    tracing_subscriber::registry()
                        .with(filter)
                        .with(TuiLogLayer::new(log_buffer.clone()))
                        .with(
                            tracing_subscriber::fmt::layer()
                                .json()
                                .with_writer(non_blocking)
                                .with_ansi(false),
                        )
                        .init();

                    Some(guard)
                }
                Err(e) => {
                    eprintln!(
                        "Warning: Could not create log directory {:?}: {}",
                        config.logging.file_dir, e
                    );
                    // Fall back to buffer-only logging
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(TuiLogLayer::new(log_buffer.clone()))
                        .init();
                    None
                }
            }
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(TuiLogLayer::new(log_buffer.clone()))
                .init();
            None
        };

    // Channels between the loader task and the event loop.
    // Load results are rare (one per cycle); reload requests collapse
    // to one outstanding cycle at a time.
    let (load_tx, load_rx) = mpsc::channel(4);
    let (reload_tx, reload_rx) = mpsc::channel(1);

    // Spawn the loader task: one cycle at startup, then one per
    // reload request. It never touches UI state directly.
    let loader_config = config.clone();
    tokio::spawn(async move {
        run_loader(loader_config, load_tx, reload_rx).await;
    });

    tracing::info!(version = config::VERSION, "starting terradex");

    // Run the TUI in the main task; blocks until the user quits
    tui::run_tui(config, log_buffer, load_rx, reload_tx).await?;

    tracing::info!("shutdown complete");
    Ok(())
}

/// Loader task body
///
/// Each cycle produces exactly one LoadEvent. A failed cycle does not
/// retry; the next cycle runs when the user requests a reload.
async fn run_loader(
    config: Config,
    load_tx: mpsc::Sender<LoadEvent>,
    mut reload_rx: mpsc::Receiver<()>,
) {
    // Demo mode serves the fixture list through the same channel a
    // real fetch would use
    if config.demo_mode {
        loop {
            tracing::info!("serving demo dataset");
            if load_tx.send(LoadEvent::Loaded(demo::countries())).await.is_err() {
                return;
            }
            if reload_rx.recv().await.is_none() {
                return;
            }
        }
    }

    // One HTTP client for the session; the request timeout is the only
    // guard against a hanging endpoint
    let client = match countries::Client::new(&config.endpoint, config.request_timeout()) {
        Ok(client) => client,
        Err(e) => {
            let _ = load_tx.send(LoadEvent::Failed(e.to_string())).await;
            return;
        }
    };

    loop {
        let event = match client.load_all().await {
            Ok(list) => LoadEvent::Loaded(list),
            Err(e) => LoadEvent::Failed(e.to_string()),
        };
        if load_tx.send(event).await.is_err() {
            return; // UI is gone
        }
        if reload_rx.recv().await.is_none() {
            return;
        }
    }
}
