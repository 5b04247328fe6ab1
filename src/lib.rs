//! # mtg-spellcheck
//!
//! A library for correcting misspelled Magic: The Gathering card names.
//!
//! Decklists collected from forums, spreadsheets, and OCR are full of almost-
//! right card names: dropped commas, doubled letters, reordered qualifiers
//! ("The Infamous Cruelclaw" vs "Cruelclaw, the Infamous"). `mtg-spellcheck`
//! matches each noisy name against the authoritative Scryfall card-name
//! catalog using a word-order-insensitive similarity score and reports the
//! best correction when it is good enough to trust.
//!
//! ## Features
//!
//! - **Token-sort matching**: insensitive to word order, case, and punctuation
//! - **Threshold gating**: a low-scoring best candidate is reported as "no
//!   match", never as a bad correction
//! - **Cached catalog**: the Scryfall catalog is cached on disk for 24 hours
//! - **CSV reports**: one row per input name, in input order
//!
//! ## Example
//!
//! ```rust
//! use mtg_spellcheck::Matcher;
//!
//! let vocabulary = vec![
//!     "Omnath, Locus of Rage".to_string(),
//!     "Teysa Karlov".to_string(),
//! ];
//!
//! let matcher = Matcher::new(&vocabulary);
//! let result = matcher.best_match("Omnath Locus of Rage");
//!
//! assert_eq!(result.corrected.as_deref(), Some("Omnath, Locus of Rage"));
//! assert!(result.score.unwrap() >= 80);
//! ```
//!
//! ## Modules
//!
//! - [`matching`]: the similarity score and threshold-gated matcher
//! - [`catalog`]: catalog loading, on-disk caching, and the Scryfall fetch
//! - [`batch`]: batch runner over an ordered list of queries
//! - [`report`]: CSV report writing
//! - [`cli`]: command-line interface implementation

pub mod batch;
pub mod catalog;
pub mod cli;
pub mod matching;
pub mod report;

// Re-export commonly used types for convenience
pub use batch::BatchRunner;
pub use catalog::{CardCatalog, CatalogProvider};
pub use matching::{MatchResult, Matcher, MatcherConfig, DEFAULT_THRESHOLD};
