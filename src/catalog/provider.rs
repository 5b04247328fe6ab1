//! Catalog provider: cached-or-fetched vocabulary with a hard boundary.
//!
//! [`CatalogProvider::get_vocabulary`] never fails past this module: callers
//! get the names or an empty vector, and an empty vocabulary means "nothing
//! to match against", not an error.

use chrono::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::catalog::cache::{CacheStore, CachedCatalog, Clock, DEFAULT_TTL_HOURS};
use crate::catalog::source::{CatalogSource, SourceError};

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error(transparent)]
    Fetch(#[from] SourceError),
}

/// Supplies the card-name vocabulary from a time-bounded cache, falling back
/// to a remote fetch when the cache is absent or stale.
pub struct CatalogProvider<S, C, K> {
    source: S,
    cache: C,
    clock: K,
    ttl: Duration,
}

impl<S, C, K> CatalogProvider<S, C, K>
where
    S: CatalogSource,
    C: CacheStore,
    K: Clock,
{
    /// Create a provider with the default 24-hour freshness window
    pub fn new(source: S, cache: C, clock: K) -> Self {
        Self::with_ttl(source, cache, clock, Duration::hours(DEFAULT_TTL_HOURS))
    }

    /// Create a provider with a custom freshness window
    pub fn with_ttl(source: S, cache: C, clock: K, ttl: Duration) -> Self {
        Self {
            source,
            cache,
            clock,
            ttl,
        }
    }

    /// Get the card-name vocabulary.
    ///
    /// A fresh cache is used without touching the network. Otherwise the
    /// catalog is fetched and cached; a failure to persist the cache is only
    /// a warning. An unrecoverable fetch failure yields an empty vector,
    /// never an error or a panic.
    pub fn get_vocabulary(&self) -> Vec<String> {
        match self.cache.load() {
            Ok(Some(cached)) if cached.is_fresh(self.clock.now(), self.ttl) => {
                debug!("Loaded {} card names from cache", cached.names.len());
                return cached.names;
            }
            Ok(Some(_)) => debug!("Catalog cache is stale, refetching"),
            Ok(None) => debug!("No catalog cache, fetching"),
            Err(e) => warn!("Ignoring unreadable catalog cache: {e}"),
        }

        match self.fetch_and_cache() {
            Ok(names) => names,
            Err(e) => {
                warn!("Could not fetch the card name catalog: {e}");
                Vec::new()
            }
        }
    }

    /// Fetch the catalog and overwrite the cache, bypassing the freshness
    /// check.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Fetch` if the download fails. A cache-write
    /// failure is logged but not returned: the fetched names are still
    /// usable.
    pub fn refresh(&self) -> Result<Vec<String>, ProviderError> {
        self.fetch_and_cache()
    }

    fn fetch_and_cache(&self) -> Result<Vec<String>, ProviderError> {
        let names = self.source.fetch()?;

        let cached = CachedCatalog {
            fetched_at: self.clock.now(),
            names,
        };
        if let Err(e) = self.cache.save(&cached) {
            warn!("Failed to write catalog cache: {e}");
        }

        Ok(cached.names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::cache::CacheError;
    use chrono::{DateTime, TimeZone, Utc};
    use std::cell::{Cell, RefCell};

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    struct CountingSource {
        names: Vec<String>,
        fetches: Cell<usize>,
        fail: bool,
    }

    impl CountingSource {
        fn ok(names: &[&str]) -> Self {
            Self {
                names: names.iter().map(|s| (*s).to_string()).collect(),
                fetches: Cell::new(0),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                names: Vec::new(),
                fetches: Cell::new(0),
                fail: true,
            }
        }
    }

    impl CatalogSource for CountingSource {
        fn fetch(&self) -> Result<Vec<String>, SourceError> {
            self.fetches.set(self.fetches.get() + 1);
            if self.fail {
                return Err(SourceError::EmptyCatalog);
            }
            Ok(self.names.clone())
        }
    }

    #[derive(Default)]
    struct MemoryCache {
        entry: RefCell<Option<CachedCatalog>>,
    }

    impl CacheStore for MemoryCache {
        fn load(&self) -> Result<Option<CachedCatalog>, CacheError> {
            Ok(self.entry.borrow().clone())
        }

        fn save(&self, cached: &CachedCatalog) -> Result<(), CacheError> {
            *self.entry.borrow_mut() = Some(cached.clone());
            Ok(())
        }
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_fresh_cache_skips_fetch() {
        let cache = MemoryCache::default();
        cache
            .save(&CachedCatalog {
                fetched_at: t0() - Duration::hours(1),
                names: vec!["Teysa Karlov".to_string()],
            })
            .unwrap();

        let source = CountingSource::ok(&["Should Not Appear"]);
        let provider = CatalogProvider::new(source, cache, FixedClock(t0()));

        let names = provider.get_vocabulary();
        assert_eq!(names, ["Teysa Karlov".to_string()]);
        assert_eq!(provider.source.fetches.get(), 0);
    }

    #[test]
    fn test_stale_cache_triggers_fetch_and_rewrite() {
        let cache = MemoryCache::default();
        cache
            .save(&CachedCatalog {
                fetched_at: t0() - Duration::hours(25),
                names: vec!["Old Name".to_string()],
            })
            .unwrap();

        let source = CountingSource::ok(&["Fresh Name"]);
        let provider = CatalogProvider::new(source, cache, FixedClock(t0()));

        let names = provider.get_vocabulary();
        assert_eq!(names, ["Fresh Name".to_string()]);
        assert_eq!(provider.source.fetches.get(), 1);

        let rewritten = provider.cache.load().unwrap().unwrap();
        assert_eq!(rewritten.fetched_at, t0());
        assert_eq!(rewritten.names, ["Fresh Name".to_string()]);
    }

    #[test]
    fn test_missing_cache_triggers_fetch() {
        let source = CountingSource::ok(&["Sen Triplets"]);
        let provider = CatalogProvider::new(source, MemoryCache::default(), FixedClock(t0()));

        assert_eq!(provider.get_vocabulary(), ["Sen Triplets".to_string()]);
        assert_eq!(provider.source.fetches.get(), 1);
    }

    #[test]
    fn test_fetch_failure_yields_empty_vocabulary() {
        let provider = CatalogProvider::new(
            CountingSource::failing(),
            MemoryCache::default(),
            FixedClock(t0()),
        );

        assert!(provider.get_vocabulary().is_empty());
    }

    #[test]
    fn test_custom_ttl() {
        let cache = MemoryCache::default();
        cache
            .save(&CachedCatalog {
                fetched_at: t0() - Duration::hours(2),
                names: vec!["Old Name".to_string()],
            })
            .unwrap();

        let source = CountingSource::ok(&["Fresh Name"]);
        let provider =
            CatalogProvider::with_ttl(source, cache, FixedClock(t0()), Duration::hours(1));

        // Two hours old is stale under a one-hour window
        assert_eq!(provider.get_vocabulary(), ["Fresh Name".to_string()]);
        assert_eq!(provider.source.fetches.get(), 1);
    }

    #[test]
    fn test_refresh_bypasses_fresh_cache() {
        let cache = MemoryCache::default();
        cache
            .save(&CachedCatalog {
                fetched_at: t0(),
                names: vec!["Cached Name".to_string()],
            })
            .unwrap();

        let source = CountingSource::ok(&["Fresh Name"]);
        let provider = CatalogProvider::new(source, cache, FixedClock(t0()));

        let names = provider.refresh().unwrap();
        assert_eq!(names, ["Fresh Name".to_string()]);
        assert_eq!(provider.source.fetches.get(), 1);
    }
}
