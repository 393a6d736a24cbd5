//! Tracker Dashboard - projects, collaborators and assigned issues at a glance
//!
//! A desktop home screen for a project and issue tracker. It reads the
//! signed-in user's data from the tracker API (or an offline fixture file)
//! and shows it as three summary cards.

mod config;
mod dashboard;
mod storage;
mod store;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, ProjectListMode};
use crate::store::http::HttpSource;
use crate::store::source::{DataSource, FixtureSource};
use crate::store::SharedStore;

/// Tracker Dashboard - desktop home screen for the issue tracker
#[derive(Parser, Debug)]
#[command(name = "tracker-dashboard")]
#[command(about = "Projects, collaborators and assigned issues at a glance")]
struct Args {
    /// Configuration file (defaults to the platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Tracker server root, overrides the configured one
    #[arg(long, env = "TRACKER_API_URL")]
    api_url: Option<String>,

    /// Serve data from a JSON snapshot instead of the server
    #[arg(long)]
    fixtures: Option<PathBuf>,

    /// Projects card policy: skip_seventh or first_six
    #[arg(long)]
    project_list: Option<ProjectListMode>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Tracker Dashboard starting...");

    let mut config = load_or_create_config(args.config.as_deref());
    if let Some(api_url) = args.api_url {
        config.api.base_url = api_url;
    }
    if let Some(mode) = args.project_list {
        config.dashboard.project_list = mode;
    }

    let source: Arc<dyn DataSource> = match &args.fixtures {
        Some(path) => Arc::new(
            FixtureSource::load(path)
                .with_context(|| format!("Failed to load fixtures from {}", path.display()))?,
        ),
        None => {
            info!(url = %config.api.base_url, "Using tracker API");
            Arc::new(HttpSource::new(
                &config.api.base_url,
                Duration::from_secs(config.api.timeout_secs),
                config.api.auth_token.clone(),
            )?)
        }
    };

    let store = Arc::new(SharedStore::new(source)?);

    if let Err(e) = dashboard::app::run_dashboard(store, config) {
        tracing::error!("Dashboard error: {}", e);
    }

    info!("Tracker Dashboard shutdown complete");

    Ok(())
}

/// Load configuration from file, writing defaults on first run
fn load_or_create_config(explicit: Option<&Path>) -> AppConfig {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match storage::default_config_path() {
            Ok(path) => path,
            Err(e) => {
                warn!("No config directory ({}), using defaults", e);
                return AppConfig::default();
            }
        },
    };

    if path.exists() {
        match config::load_config(&path) {
            Ok(config) => {
                info!("Loaded configuration from {:?}", path);
                return config;
            }
            Err(e) => warn!("Ignoring configuration: {:#}", e),
        }
        return AppConfig::default();
    }

    let config = AppConfig::default();
    match config::save_config(&config, &path) {
        Ok(()) => info!("Wrote default configuration to {:?}", path),
        Err(e) => warn!("Could not write default configuration: {:#}", e),
    }
    config
}
