//! Recipe Finder library crate
//!
//! Re-exports core modules for integration tests and external use.

pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod favorites;
pub mod matcher;

// Re-export commonly used types
pub use config::Config;
pub use dataset::{Dataset, Recipe};
pub use error::{Error, Result};
pub use favorites::FavoritesStore;
pub use matcher::{match_recipes, MatchReport, PartialMatch, UserQuery};
