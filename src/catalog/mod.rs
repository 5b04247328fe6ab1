//! Card-name catalog: loading, caching, and remote fetch.
//!
//! - [`store`]: the in-memory catalog and its JSON format
//! - [`cache`]: time-bounded on-disk cache with injectable clock and storage
//! - [`source`]: the Scryfall fetch behind the [`source::CatalogSource`] trait
//! - [`provider`]: ties the three together behind `get_vocabulary()`

pub mod cache;
pub mod provider;
pub mod source;
pub mod store;

pub use cache::{CacheStore, CachedCatalog, Clock, FileCache, SystemClock};
pub use provider::CatalogProvider;
pub use source::{CatalogSource, ScryfallSource};
pub use store::{CardCatalog, CatalogError};
