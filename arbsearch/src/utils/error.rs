use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse TOML file '{file}': {source}")]
    ConfigParseError {
        source: toml::de::Error,
        file: String,
    },

    #[error(transparent)]
    Arithmetic(#[from] arbnum::utils::Error),

    #[error("Subset search enumerates bit masks and supports at most {max} items, got {count}")]
    TooManyItems { count: usize, max: usize },

    #[error("Dimension mismatch for {what}: expected {expected}, found {found}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Expected one input per weight ({expected}), got {found} inputs")]
    InputCountMismatch { expected: usize, found: usize },
}

pub type SearchResult<T> = Result<T, SearchError>;
