//! Batch spell checking over an ordered list of queries.

use crate::matching::{MatchResult, Matcher, MatcherConfig};

/// Runs the matcher over a sequence of queries.
///
/// Produces exactly one result per query, in input order. Queries are
/// independent: no state is carried between them.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchRunner {
    config: MatcherConfig,
}

impl BatchRunner {
    /// Create a runner with the default matcher configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner with a custom matcher configuration
    #[must_use]
    pub fn with_config(config: MatcherConfig) -> Self {
        Self { config }
    }

    /// Match every query against the vocabulary, preserving input order
    #[must_use]
    pub fn run(&self, queries: &[String], vocabulary: &[String]) -> Vec<MatchResult> {
        let matcher = Matcher::with_config(vocabulary, self.config);
        queries.iter().map(|q| matcher.best_match(q)).collect()
    }
}
