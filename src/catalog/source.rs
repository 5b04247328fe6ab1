//! Remote fetch of the card-name catalog.

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Scryfall catalog endpoint listing every unique card name
pub const CARD_NAMES_URL: &str = "https://api.scryfall.com/catalog/card-names";

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Catalog response contained no names")]
    EmptyCatalog,
}

/// Fetches a fresh copy of the catalog, injectable for tests
pub trait CatalogSource {
    /// Fetch the ordered card names from the remote catalog.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` on any network or decoding failure.
    fn fetch(&self) -> Result<Vec<String>, SourceError>;
}

#[derive(Deserialize)]
struct CatalogResponse {
    data: Vec<String>,
}

/// Scryfall catalog client
#[derive(Debug, Clone)]
pub struct ScryfallSource {
    url: String,
}

impl Default for ScryfallSource {
    fn default() -> Self {
        Self::new(CARD_NAMES_URL)
    }
}

impl ScryfallSource {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl CatalogSource for ScryfallSource {
    fn fetch(&self) -> Result<Vec<String>, SourceError> {
        debug!("Downloading card name catalog from {}", self.url);

        // Scryfall requires an identifying User-Agent
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("mtg-spellcheck/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let response = client.get(&self.url).send()?.error_for_status()?;
        let body: CatalogResponse = response.json()?;

        // A well-formed but empty payload is as useless as a failed request
        if body.data.is_empty() {
            return Err(SourceError::EmptyCatalog);
        }

        debug!("Downloaded {} card names", body.data.len());
        Ok(body.data)
    }
}
