use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::catalog::cache::{CacheStore, CachedCatalog, DEFAULT_CACHE_FILE};
use crate::catalog::{CardCatalog, CatalogProvider, FileCache, ScryfallSource, SystemClock};
use crate::cli::OutputFormat;

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// Download a fresh catalog and overwrite the cache
    Refresh {
        /// Path of the catalog cache file
        #[arg(long, default_value = DEFAULT_CACHE_FILE)]
        cache: PathBuf,
    },

    /// List the cached card names
    List {
        /// Path of the catalog cache file
        #[arg(long, default_value = DEFAULT_CACHE_FILE)]
        cache: PathBuf,

        /// Show at most this many names
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },

    /// Export the cached names to a Scryfall-style JSON file
    Export {
        /// Output file path
        #[arg(required = true)]
        output: PathBuf,

        /// Path of the catalog cache file
        #[arg(long, default_value = DEFAULT_CACHE_FILE)]
        cache: PathBuf,
    },
}

/// Execute a catalog subcommand.
///
/// # Errors
///
/// Returns an error if the cache is missing or unreadable, a refresh fetch
/// fails, or an export file cannot be written.
pub fn run(args: CatalogArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    match args.command {
        CatalogCommands::Refresh { cache } => {
            let provider =
                CatalogProvider::new(ScryfallSource::default(), FileCache::new(&cache), SystemClock);
            let names = provider.refresh()?;
            println!("Cached {} card names to '{}'.", names.len(), cache.display());
            Ok(())
        }
        CatalogCommands::List { cache, limit } => {
            let cached = load_cache(&cache)?;
            if verbose {
                eprintln!("Cache fetched at {}", cached.fetched_at.to_rfc3339());
            }
            print_names(&cached, limit, format)
        }
        CatalogCommands::Export { output, cache } => {
            let cached = load_cache(&cache)?;
            let catalog = CardCatalog::from_names(cached.names);
            std::fs::write(&output, catalog.to_json()?)?;
            println!(
                "Exported {} card names to '{}'.",
                catalog.len(),
                output.display()
            );
            Ok(())
        }
    }
}

fn load_cache(cache: &PathBuf) -> anyhow::Result<CachedCatalog> {
    FileCache::new(cache).load()?.ok_or_else(|| {
        anyhow::anyhow!(
            "No catalog cache at '{}'. Run 'mtg-spellcheck catalog refresh' first.",
            cache.display()
        )
    })
}

fn print_names(cached: &CachedCatalog, limit: usize, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let shown: Vec<&String> = cached.names.iter().take(limit).collect();
            println!("{}", serde_json::to_string_pretty(&shown)?);
        }
        OutputFormat::Text | OutputFormat::Csv => {
            println!("{} card names cached", cached.names.len());
            for name in cached.names.iter().take(limit) {
                println!("  {name}");
            }
            if cached.names.len() > limit {
                println!("  ... and {} more", cached.names.len() - limit);
            }
        }
    }
    Ok(())
}
