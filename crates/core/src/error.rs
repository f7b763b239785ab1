use std::io;

/// Errors that can occur during import-assist operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Tree-sitter error: {0}")]
    TreeSitterError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Introspection error: {0}")]
    IntrospectionError(String),

    #[error("File discovery error: {0}")]
    DiscoveryError(String),

    #[error("Cross product requires non-empty inputs")]
    EmptyCrossProductInput,

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for import-assist operations
pub type Result<T> = std::result::Result<T, Error>;
