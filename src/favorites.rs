//! Favorites Store
//!
//! Persists the user's favorite recipe names as a flat JSON array of strings.
//! The collection preserves insertion order and holds each name at most once
//! (exact string equality, no normalization).
//!
//! Reading is failure-absorbing: a missing, unreadable, or malformed store
//! behaves as an empty one. Writing replaces the whole file through a
//! temporary file renamed into place, so an interrupted write never truncates
//! previously saved favorites.
//!
//! Known limitation: `save` is a read-modify-write sequence with no locking.
//! Two concurrent writers can each read the old collection and overwrite the
//! other's entry. Acceptable for the single-user, single-process desktop
//! setting this store targets; do not share one file between processes.

use crate::error::{Error, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// File-backed store of favorite recipe names
#[derive(Debug, Clone)]
pub struct FavoritesStore {
    path: PathBuf,
}

impl FavoritesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted collection.
    ///
    /// All failures degrade to an empty list; the specific kind is logged so
    /// a corrupt store is diagnosable without ever surfacing an error.
    pub fn load(&self) -> Vec<String> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("No favorites file at {}", self.path.display());
                return Vec::new();
            }
            Err(err) => {
                warn!(
                    "Favorites file at {} could not be read, treating as empty: {}",
                    self.path.display(),
                    err
                );
                return Vec::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(favorites) => favorites,
            Err(err) => {
                warn!(
                    "Favorites file at {} is malformed, treating as empty: {}",
                    self.path.display(),
                    err
                );
                Vec::new()
            }
        }
    }

    /// Append `name` to the collection unless it is already present.
    ///
    /// Idempotent: saving the same name again is a no-op. The updated
    /// collection replaces the file contents in full.
    pub fn save(&self, name: &str) -> Result<()> {
        let mut favorites = self.load();

        if favorites.iter().any(|existing| existing == name) {
            debug!("Favorite '{}' already saved", name);
            return Ok(());
        }

        favorites.push(name.to_string());
        self.write_all(&favorites)?;

        info!("💾 Saved favorite '{}' ({} total)", name, favorites.len());
        Ok(())
    }

    fn write_all(&self, favorites: &[String]) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| {
            Error::favorites_with_source(
                format!("failed to create temp file next to {}", self.path.display()),
                e,
            )
        })?;

        serde_json::to_writer_pretty(tmp.as_file_mut(), favorites)?;
        tmp.as_file_mut().flush().map_err(|e| {
            Error::favorites_with_source("failed to flush favorites to disk", e)
        })?;

        tmp.persist(&self.path).map_err(|e| {
            Error::favorites_with_source(
                format!("failed to replace favorites file at {}", self.path.display()),
                e.error,
            )
        })?;

        Ok(())
    }
}
