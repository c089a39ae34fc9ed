//! Configuration management for Recipe Finder Engine
//!
//! Provides strongly-typed configuration with validation, environment variable
//! parsing, and sensible defaults.
//!
//! # Example
//! ```no_run
//! use recipefinder::Config;
//! let config = Config::from_env().expect("failed to load config");
//! println!("dataset: {}", config.recipes_path.display());
//! ```

use crate::error::{Error, Result};
use std::path::PathBuf;
use tracing::info;

/// Default location of the recipe dataset, relative to the working directory
pub const DEFAULT_RECIPES_PATH: &str = "recipes.csv";

/// Default location of the favorites store, relative to the working directory
pub const DEFAULT_FAVORITES_PATH: &str = "favorites.json";

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the CSV recipe dataset
    pub recipes_path: PathBuf,
    /// Path to the persisted favorites file
    pub favorites_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Try to load .env file (ignore if not found)
        dotenvy::dotenv().ok();

        let config = Self {
            recipes_path: PathBuf::from(get_env_or("RECIPES_PATH", DEFAULT_RECIPES_PATH)),
            favorites_path: PathBuf::from(get_env_or("FAVORITES_PATH", DEFAULT_FAVORITES_PATH)),
        };

        config.validate()?;
        config.log_summary();

        Ok(config)
    }

    /// Validate configuration
    fn validate(&self) -> Result<()> {
        if self.recipes_path.as_os_str().is_empty() {
            return Err(Error::InvalidConfig {
                key: "RECIPES_PATH",
                message: "recipe dataset path cannot be empty".into(),
            });
        }

        if self.favorites_path.as_os_str().is_empty() {
            return Err(Error::InvalidConfig {
                key: "FAVORITES_PATH",
                message: "favorites path cannot be empty".into(),
            });
        }

        Ok(())
    }

    /// Log configuration summary
    fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  Recipe dataset: {}", self.recipes_path.display());
        info!("  Favorites store: {}", self.favorites_path.display());
    }
}

/// Get environment variable with default
fn get_env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
