//! Time-bounded on-disk caching of the card-name catalog.
//!
//! The clock and the storage backend are both traits so freshness logic can
//! be tested without real filesystem timestamps or a real download.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default cache freshness window in hours
pub const DEFAULT_TTL_HOURS: i64 = 24;

/// Default cache file name
pub const DEFAULT_CACHE_FILE: &str = "scryfall_card_names.json";

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Failed to access cache file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse cache file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A cached copy of the catalog: the ordered names plus the instant they
/// were fetched, used for the freshness check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedCatalog {
    /// When the names were fetched from the remote catalog
    pub fetched_at: DateTime<Utc>,

    /// The ordered card names
    pub names: Vec<String>,
}

impl CachedCatalog {
    /// Whether this cache entry is still within the freshness window at `now`
    #[must_use]
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now.signed_duration_since(self.fetched_at) < ttl
    }
}

/// Source of the current time, injectable for tests
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Storage backend for the cached catalog
pub trait CacheStore {
    /// Load the cached catalog, or `None` when no cache exists yet.
    ///
    /// # Errors
    ///
    /// Returns `CacheError` if a cache exists but cannot be read or parsed.
    fn load(&self) -> Result<Option<CachedCatalog>, CacheError>;

    /// Persist the cached catalog.
    ///
    /// # Errors
    ///
    /// Returns `CacheError` if the cache cannot be written.
    fn save(&self, cached: &CachedCatalog) -> Result<(), CacheError>;
}

/// JSON-file cache store
#[derive(Debug, Clone)]
pub struct FileCache {
    path: PathBuf,
}

impl FileCache {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CacheStore for FileCache {
    fn load(&self) -> Result<Option<CachedCatalog>, CacheError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn save(&self, cached: &CachedCatalog) -> Result<(), CacheError> {
        let json = serde_json::to_string(cached)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}
