//! Approximate matching of noisy card names against the catalog.
//!
//! [`scoring`] implements the token-sort similarity ratio; [`engine`] scans a
//! vocabulary with it and applies the acceptance threshold.

pub mod engine;
pub mod scoring;

pub use engine::{MatchError, MatchResult, Matcher, MatcherConfig, DEFAULT_THRESHOLD};
pub use scoring::token_sort_ratio;
