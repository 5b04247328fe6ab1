use serde::Serialize;
use thiserror::Error;

use crate::matching::scoring::token_sort_ratio;

/// Default minimum score for a candidate to be accepted as a correction
pub const DEFAULT_THRESHOLD: u8 = 80;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("Threshold must be in 0..=100, got {0}")]
    InvalidThreshold(u8),
}

/// Configuration for the matcher
#[derive(Debug, Clone, Copy)]
pub struct MatcherConfig {
    /// Minimum score (inclusive) for a candidate to be reported
    threshold: u8,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl MatcherConfig {
    /// Create a configuration with a custom acceptance threshold.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::InvalidThreshold` if `threshold` exceeds 100.
    pub fn new(threshold: u8) -> Result<Self, MatchError> {
        if threshold > 100 {
            return Err(MatchError::InvalidThreshold(threshold));
        }
        Ok(Self { threshold })
    }

    /// The acceptance threshold
    #[must_use]
    pub fn threshold(&self) -> u8 {
        self.threshold
    }
}

/// Result of matching one query against the vocabulary.
///
/// `corrected` and `score` are either both present (a candidate scored at or
/// above the threshold) or both absent. An absent match is distinct from a
/// zero score: a candidate that scored 0 but cleared a threshold of 0 is
/// still a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    /// The original query string
    pub query: String,

    /// Best-scoring candidate, when it cleared the threshold
    pub corrected: Option<String>,

    /// Score of the best candidate in [0, 100]
    pub score: Option<u8>,
}

impl MatchResult {
    fn no_match(query: &str) -> Self {
        Self {
            query: query.to_string(),
            corrected: None,
            score: None,
        }
    }

    /// Whether a candidate cleared the threshold
    #[must_use]
    pub fn matched(&self) -> bool {
        self.corrected.is_some()
    }
}

/// Scans the vocabulary for the best-scoring candidate for each query.
///
/// The vocabulary is borrowed and never mutated; scan order follows input
/// order, and the first candidate achieving the maximum score wins ties, so
/// results are deterministic for a fixed vocabulary.
pub struct Matcher<'a> {
    vocabulary: &'a [String],
    config: MatcherConfig,
}

impl<'a> Matcher<'a> {
    /// Create a matcher with the default threshold
    #[must_use]
    pub fn new(vocabulary: &'a [String]) -> Self {
        Self {
            vocabulary,
            config: MatcherConfig::default(),
        }
    }

    /// Create a matcher with a custom configuration
    #[must_use]
    pub fn with_config(vocabulary: &'a [String], config: MatcherConfig) -> Self {
        Self { vocabulary, config }
    }

    /// Find the best-scoring candidate for `query`.
    ///
    /// Returns a no-match result when the vocabulary is empty or no candidate
    /// scores at or above the threshold. Pure: identical inputs always yield
    /// identical output.
    #[must_use]
    pub fn best_match(&self, query: &str) -> MatchResult {
        let mut best: Option<(usize, u8)> = None;

        for (index, candidate) in self.vocabulary.iter().enumerate() {
            let score = token_sort_ratio(query, candidate);

            // Strictly greater: the first candidate at the maximum wins
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((index, score));
            }

            if score == 100 {
                // No later candidate can displace a perfect score
                break;
            }
        }

        match best {
            Some((index, score)) if score >= self.config.threshold => MatchResult {
                query: query.to_string(),
                corrected: Some(self.vocabulary[index].clone()),
                score: Some(score),
            },
            _ => MatchResult::no_match(query),
        }
    }
}
