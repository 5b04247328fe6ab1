use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Serializable catalog format, matching Scryfall's catalog endpoint shape:
/// the names live under a `data` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub data: Vec<String>,
}

/// An ordered list of valid card names.
///
/// Order is preserved from the source and never changed after loading: the
/// matcher's tie-break (first candidate at the maximum score wins) depends
/// on a stable scan order. Duplicates are harmless and kept as-is.
#[derive(Debug, Clone, Default)]
pub struct CardCatalog {
    names: Vec<String>,
}

impl CardCatalog {
    /// Create a catalog from an ordered list of names
    #[must_use]
    pub fn from_names(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Load a catalog from a Scryfall-style JSON file (`{"data": [...]}`).
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ParseError` if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;
        Ok(Self::from_names(data.data))
    }

    /// Serialize the catalog to Scryfall-style JSON.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ParseError` if serialization fails.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            data: self.names.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// The names, in load order
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of names in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
