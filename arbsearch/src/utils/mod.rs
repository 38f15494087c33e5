pub mod error;

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::utils::error::{SearchError, SearchResult};

/// Deserializes a TOML document, naming `file` in any parse error.
pub fn parse_toml<T: DeserializeOwned>(source: &str, file: &str) -> SearchResult<T> {
    toml::from_str(source).map_err(|source| SearchError::ConfigParseError {
        source,
        file: file.to_string(),
    })
}

/// Reads and deserializes a TOML file.
pub fn read_toml<T: DeserializeOwned>(path: impl AsRef<Path>) -> SearchResult<T> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)?;
    parse_toml(&source, &path.display().to_string())
}
