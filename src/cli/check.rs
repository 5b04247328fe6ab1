use std::io::Read;
use std::path::PathBuf;

use chrono::Duration;
use clap::Args;

use crate::batch::BatchRunner;
use crate::catalog::cache::{DEFAULT_CACHE_FILE, DEFAULT_TTL_HOURS};
use crate::catalog::{CardCatalog, CatalogProvider, FileCache, ScryfallSource, SystemClock};
use crate::cli::OutputFormat;
use crate::matching::{MatchResult, MatcherConfig, DEFAULT_THRESHOLD};
use crate::report;

#[derive(Args)]
pub struct CheckArgs {
    /// File of card names to check, one per line. Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Minimum score (0-100) for a correction to be reported
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub threshold: u8,

    /// Path for the CSV report
    #[arg(short, long, default_value = "spell_check_results.csv")]
    pub output: PathBuf,

    /// Match against a local catalog file instead of Scryfall
    /// (Scryfall-style JSON: {"data": [...]})
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Path of the catalog cache file
    #[arg(long, default_value = DEFAULT_CACHE_FILE)]
    pub cache: PathBuf,

    /// Hours before the catalog cache expires
    #[arg(long, default_value_t = DEFAULT_TTL_HOURS)]
    pub cache_ttl_hours: i64,
}

/// Execute the check subcommand.
///
/// # Errors
///
/// Returns an error if the input or a `--catalog` file cannot be read, or the
/// report cannot be written. An unreachable Scryfall catalog is not an error:
/// matching is skipped with a message on stderr.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CheckArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let queries = read_queries(&args.input)?;

    if verbose {
        eprintln!("Read {} card names from input", queries.len());
    }

    let vocabulary = load_vocabulary(&args)?;

    if vocabulary.is_empty() {
        eprintln!("Could not retrieve the card name catalog, nothing to match against.");
        return Ok(());
    }

    if verbose {
        eprintln!("Matching against {} catalog names", vocabulary.len());
    }

    let config = MatcherConfig::new(args.threshold)?;
    let results = BatchRunner::with_config(config).run(&queries, &vocabulary);

    match format {
        OutputFormat::Text => print_text_results(&results),
        OutputFormat::Json => print_json_results(&results)?,
        OutputFormat::Csv => report::write_report(std::io::stdout(), &results)?,
    }

    report::write_report_file(&args.output, &results)?;
    eprintln!("Results saved to '{}'.", args.output.display());

    Ok(())
}

fn read_queries(input: &PathBuf) -> anyhow::Result<Vec<String>> {
    let content = if input.to_string_lossy() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(input)?
    };

    // Keep lines verbatim (trailing spaces are the matcher's problem), but
    // drop line endings and blank lines
    Ok(content
        .lines()
        .map(|line| line.trim_end_matches('\r').to_string())
        .filter(|line| !line.trim().is_empty())
        .collect())
}

fn load_vocabulary(args: &CheckArgs) -> anyhow::Result<Vec<String>> {
    if let Some(path) = &args.catalog {
        let catalog = CardCatalog::load_from_file(path)?;
        return Ok(catalog.names().to_vec());
    }

    let provider = CatalogProvider::with_ttl(
        ScryfallSource::default(),
        FileCache::new(&args.cache),
        SystemClock,
        Duration::hours(args.cache_ttl_hours),
    );
    Ok(provider.get_vocabulary())
}

fn print_text_results(results: &[MatchResult]) {
    for result in results {
        println!("'{}'", result.query);
        match (&result.corrected, result.score) {
            (Some(corrected), Some(score)) => {
                println!("-> Suggested correction: '{corrected}' (Score: {score})");
            }
            _ => println!("-> No good match found."),
        }
        println!("{}", "-".repeat(25));
    }
}

fn print_json_results(results: &[MatchResult]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(results)?);
    Ok(())
}
