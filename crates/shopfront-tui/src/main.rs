//! `shopfront-tui`: terminal browser for a remote product catalog.
//!
//! Opens on the product list (`/products/list`) or on any path given on the
//! command line, e.g. `shopfront-tui /products/7`. Settings come from the
//! shared config file, `SHOPFRONT_*` environment variables and CLI flags,
//! in increasing priority.
//!
//! Logs are written to a file (default `/tmp/shopfront-tui.log`) so they
//! never corrupt the terminal UI.

mod action;
mod app;
mod component;
mod data_bridge;
mod event;
mod screen;
mod screens;
mod theme;
mod tui;
mod widgets;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, eyre};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use shopfront_config::Config;
use shopfront_core::Catalog;

use crate::app::App;
use crate::screen::{LIST_PATH, Route};

/// Browse, filter and page through a product catalog.
#[derive(Parser, Debug)]
#[command(name = "shopfront-tui", version, about)]
struct Cli {
    /// Path to open: /products/list or /products/{id}
    #[arg(default_value = LIST_PATH)]
    path: String,

    /// Catalog API base URL
    #[arg(short = 'u', long, env = "SHOPFRONT_API_URL")]
    url: Option<String>,

    /// Products per page
    #[arg(short = 'n', long)]
    page_size: Option<u32>,

    /// Accept invalid TLS certificates
    #[arg(short = 'k', long)]
    insecure: bool,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Log file path
    #[arg(long, default_value = "/tmp/shopfront-tui.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write the effective settings to the config file and exit
    #[arg(long)]
    save_config: bool,
}

impl Cli {
    /// Layer CLI flags over the loaded config.
    fn apply(&self, cfg: &mut Config) {
        if let Some(ref url) = self.url {
            cfg.api_url.clone_from(url);
        }
        if let Some(size) = self.page_size {
            cfg.list.page_size = size;
        }
        if let Some(timeout) = self.timeout {
            cfg.timeout = timeout;
        }
        if self.insecure {
            cfg.insecure = true;
        }
    }
}

/// File-only tracing. Hold the returned guard for the life of the process
/// so buffered lines are flushed.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "shopfront_tui={log_level},shopfront_core={log_level},shopfront_api={log_level}"
        ))
    });

    let log_dir = cli
        .log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(std::path::Path::new("/tmp"));
    let log_filename = cli
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("shopfront-tui.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true),
        )
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tui::install_hooks()?;
    let _log_guard = setup_tracing(&cli);

    let route: Route = cli.path.parse().map_err(|e: String| eyre!(e))?;

    let mut cfg = shopfront_config::load_config().unwrap_or_else(|e| {
        warn!(error = %e, "config file unreadable, using defaults");
        Config::default()
    });
    cli.apply(&mut cfg);
    let runtime = cfg.to_runtime().wrap_err("invalid configuration")?;

    if cli.save_config {
        let path = shopfront_config::config_path();
        shopfront_config::save_config(&cfg)
            .wrap_err_with(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "settings saved");
        println!("Settings saved to {}", path.display());
        return Ok(());
    }

    info!(api = %runtime.catalog.api_url, path = %route, "starting shopfront-tui");

    let catalog = Catalog::new(&runtime.catalog).wrap_err("failed to build catalog client")?;
    let mut app = App::new(catalog, runtime.list, runtime.detail, route)?;
    app.run().await?;

    Ok(())
}
