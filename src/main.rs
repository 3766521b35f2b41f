#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use aion_core::logging::LoggingBuilder;
use aion_core::SiteConfig;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global site config, set once at startup
static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Get the site config (loaded from --config, or defaults)
pub fn get_site_config() -> SiteConfig {
    SITE_CONFIG.get().cloned().unwrap_or_default()
}

/// AION Labs - independent AI research lab site
#[derive(Parser, Debug)]
#[command(name = "aion-labs-desktop")]
#[command(about = "AION Labs - animated research lab site")]
struct Args {
    /// JSON site config (any omitted field keeps its default)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fixed seed for the particle layout and status feed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 860.0)]
    height: f64,

    /// Tracing filter (e.g. "aion_labs=debug"); RUST_LOG is used when unset
    #[arg(long)]
    log: Option<String>,
}

fn main() {
    let args = Args::parse();

    let mut logging = LoggingBuilder::new();
    if let Some(ref filter) = args.log {
        logging = logging.with_filter(filter.clone());
    }
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let mut config = match args.config {
        Some(ref path) => match SiteConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("Failed to load config {:?}, using defaults: {}", path, e);
                SiteConfig::default()
            }
        },
        None => SiteConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    tracing::info!(
        seed = ?config.seed,
        particles = config.particles.full_count,
        "Starting AION Labs site"
    );

    let _ = SITE_CONFIG.set(config);

    // Configure desktop window
    let window_config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("AION Labs")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window_config)
        .launch(app::App);
}
