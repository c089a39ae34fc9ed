//! Recipe Finder Engine
//!
//! A desktop tool that matches recipes against the ingredients you have and
//! keeps a small list of favorites on disk.
//!
//! # Architecture
//!
//! - **Matcher**: classifies recipes as exact or partial matches, ranked
//! - **Favorites Store**: persisted, deduplicated list of recipe names
//! - **CLI**: parses input, validates it, renders results
//!
//! Everything runs synchronously on the calling thread; the dataset is loaded
//! once at startup and treated as immutable for the session.

use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use recipefinder::cli::{self, Cli};
use recipefinder::config::Config;
use recipefinder::dataset::Dataset;
use recipefinder::error::Result;

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_user_error() => {
            eprintln!("⚠ {}", err);
            ExitCode::from(2)
        }
        Err(err) => {
            error!(code = err.error_code(), "{}", err);
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    info!("🍳 Recipe Finder Engine v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;

    // Loaded once, immutable for the session; failures degrade to an empty
    // dataset and every search simply returns no results
    let dataset = Dataset::load_or_empty(&config.recipes_path);

    cli::run(cli.command, &config, &dataset)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Default log levels; search output itself goes to stdout
        EnvFilter::new("recipefinder=warn")
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
