use thiserror::Error;

/// Errors produced while loading YAML text into documents.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The YAML text of a document could not be parsed.
    #[error("document {index}: {source}")]
    Parse {
        index: usize,
        #[source]
        source: serde_yaml::Error,
    },

    /// A `<<` merge key could not be applied.
    #[error("document {index}: invalid merge key: {source}")]
    Merge {
        index: usize,
        #[source]
        source: serde_yaml::Error,
    },

    /// A mapping key was a sequence or mapping.
    #[error("unsupported mapping key: {0}")]
    UnsupportedKey(String),

    /// Two mapping keys that are the same once converted to strings
    /// (`1` and `"1"`).
    #[error("duplicate mapping key: {0}")]
    DuplicateKey(String),

    /// A number with no exact `f64` representation.
    #[error("unsupported number: {0}")]
    UnsupportedNumber(String),
}

/// Convenience alias for loader results.
pub type LoadResult<T> = Result<T, LoadError>;
