//! Command-line interface for mtg-spellcheck.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **check**: Spell-check a list of card names against the catalog
//! - **catalog**: Refresh, list, or export the cached card-name catalog
//!
//! ## Usage
//!
//! ```text
//! # Spell-check a file of card names (one per line)
//! mtg-spellcheck check decklist.txt
//!
//! # Pipe names from stdin, stricter threshold
//! cat decklist.txt | mtg-spellcheck check - --threshold 90
//!
//! # JSON output for scripting
//! mtg-spellcheck check decklist.txt --format json
//!
//! # Force a fresh catalog download
//! mtg-spellcheck catalog refresh
//! ```

use clap::{Parser, Subcommand};

pub mod catalog;
pub mod check;

#[derive(Parser)]
#[command(name = "mtg-spellcheck")]
#[command(version)]
#[command(about = "Correct misspelled Magic: The Gathering card names")]
#[command(
    long_about = "mtg-spellcheck corrects misspelled or malformed Magic: The Gathering card names.\n\nIt fetches the authoritative card-name catalog from Scryfall (cached locally for 24 hours), fuzzy-matches each input name against it with a word-order-insensitive score, and writes a CSV report of suggested corrections with confidence scores."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Spell-check a list of card names
    Check(check::CheckArgs),

    /// Manage the cached card-name catalog
    Catalog(catalog::CatalogArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}
