//! Suggestion catalog loading
//!
//! A catalog is a JSON array of `SearchItem`s. The bundled default is used
//! unless a file path is configured.

use crate::constants::DEFAULT_CATALOG;
use crate::types::SearchItem;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog JSON in {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse catalog JSON; `origin` only labels errors
pub fn parse_catalog(json: &str, origin: &str) -> Result<Vec<SearchItem>, CatalogError> {
    serde_json::from_str(json).map_err(|source| CatalogError::Parse {
        origin: origin.to_string(),
        source,
    })
}

pub fn default_catalog() -> Result<Vec<SearchItem>, CatalogError> {
    parse_catalog(DEFAULT_CATALOG, "bundled catalog")
}

/// Load the catalog at `path`, or the bundled default when `path` is `None`
pub fn load_catalog(path: Option<&Path>) -> Result<Vec<SearchItem>, CatalogError> {
    let Some(path) = path else {
        let items = default_catalog()?;
        debug!(count = items.len(), "Loaded bundled catalog");
        return Ok(items);
    };

    let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let items = parse_catalog(&json, &path.display().to_string())?;
    debug!(path = %path.display(), count = items.len(), "Loaded catalog file");
    Ok(items)
}
