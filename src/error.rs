//! Error types for Recipe Finder Engine
//!
//! This module provides the error hierarchy for the whole crate:
//! - `thiserror` for ergonomic error definitions
//! - Domain-specific error variants for actionable error handling
//! - Proper error context and source chaining
//! - Classification helpers for exit-code and log-label mapping

use std::borrow::Cow;
use thiserror::Error;

/// Result type alias for Recipe Finder operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Recipe Finder Engine
#[derive(Debug, Error)]
pub enum Error {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    #[error("Configuration error: {message}")]
    Config { message: Cow<'static, str> },

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidConfig {
        key: &'static str,
        message: Cow<'static, str>,
    },

    // ========================================================================
    // Dataset Errors
    // ========================================================================
    #[error("Recipe dataset error: {message}")]
    Dataset {
        message: Cow<'static, str>,
        #[source]
        source: Option<csv::Error>,
    },

    // ========================================================================
    // Favorites Store Errors
    // ========================================================================
    #[error("Favorites store error: {message}")]
    Favorites {
        message: Cow<'static, str>,
        #[source]
        source: Option<std::io::Error>,
    },

    // ========================================================================
    // User Input Errors
    // ========================================================================
    #[error("Please enter at least one ingredient")]
    EmptyQuery,

    #[error("Enter a recipe name first")]
    EmptyFavoriteName,

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl Error {
    // ========================================================================
    // Constructors for common error patterns
    // ========================================================================

    /// Create a configuration error
    pub fn config(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a dataset error
    pub fn dataset(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Dataset {
            message: message.into(),
            source: None,
        }
    }

    /// Create a dataset error with source
    pub fn dataset_with_source(
        message: impl Into<Cow<'static, str>>,
        source: csv::Error,
    ) -> Self {
        Self::Dataset {
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create a favorites store error
    pub fn favorites(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Favorites {
            message: message.into(),
            source: None,
        }
    }

    /// Create a favorites store error with source
    pub fn favorites_with_source(
        message: impl Into<Cow<'static, str>>,
        source: std::io::Error,
    ) -> Self {
        Self::Favorites {
            message: message.into(),
            source: Some(source),
        }
    }

    // ========================================================================
    // Error Classification
    // ========================================================================

    /// Returns true if this error was caused by user input rather than the
    /// system; callers report these as validation messages, not faults
    pub fn is_user_error(&self) -> bool {
        matches!(self, Error::EmptyQuery | Error::EmptyFavoriteName)
    }

    /// Get error code for log labels
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::Config { .. } | Error::InvalidConfig { .. } => "CONFIG_ERROR",
            Error::Dataset { .. } => "DATASET_ERROR",
            Error::Favorites { .. } => "FAVORITES_ERROR",
            Error::EmptyQuery | Error::EmptyFavoriteName => "INVALID_INPUT",
            Error::Json(_) => "SERIALIZATION_ERROR",
            Error::Other(_) => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_errors_classified() {
        assert!(Error::EmptyQuery.is_user_error());
        assert!(Error::EmptyFavoriteName.is_user_error());
        assert!(!Error::config("bad").is_user_error());
        assert!(!Error::favorites("unwritable").is_user_error());
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(Error::EmptyQuery.error_code(), "INVALID_INPUT");
        assert_eq!(Error::dataset("missing header").error_code(), "DATASET_ERROR");
        assert_eq!(
            Error::InvalidConfig {
                key: "RECIPES_PATH",
                message: "empty".into()
            }
            .error_code(),
            "CONFIG_ERROR"
        );
    }
}
