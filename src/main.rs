//! Entry point for the Connecting the Dots reader.
//!
//! Loads `conf/config.toml`, sets up logging on stderr (stdout carries viewer
//! host commands), and launches the GUI with an optional initial document id.

mod app;
mod auto_hide;
mod backend;
mod config;
mod context;
mod debounce;
mod geometry;
mod platform;
mod viewer;

use crate::app::run_app;
use crate::backend::BackendClient;
use crate::config::load_config;
use anyhow::{Context, Result};
use std::env;
use std::path::Path;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let initial_document = parse_args();
    let config = load_config(Path::new("conf/config.toml"));
    set_log_level(reload_handle, config.log_level.as_filter_str());
    info!(
        api = %config.api_base_url,
        level = %config.log_level,
        k = config.results_k,
        "Starting Connecting the Dots"
    );
    if let Some(document) = &initial_document {
        info!(%document, "Opening initial document");
    }

    let backend =
        BackendClient::new(&config.api_base_url).context("Invalid backend API base URL")?;
    run_app(config, backend, initial_document).context("Failed to start the GUI")?;
    Ok(())
}

/// Optional first argument: the document id to open.
fn parse_args() -> Option<String> {
    env::args()
        .nth(1)
        .map(|arg| arg.trim().to_string())
        .filter(|arg| !arg.is_empty())
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    warn!("Logging initialized; override level with config.log_level or RUST_LOG");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("debug"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
