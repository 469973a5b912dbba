//! Error types for myads-core

use thiserror::Error;

/// Result type alias using MyadsError
pub type Result<T> = std::result::Result<T, MyadsError>;

/// Main error type for myADS notification operations
#[derive(Error, Debug)]
pub enum MyadsError {
    /// Classic keyword input failed to compile
    #[error("Classic keyword error: {0}")]
    Classic(#[from] ads_classic::ClassicError),

    /// A notification setup or stored query failed validation
    #[error("Setup error: {0}")]
    Setup(#[from] ConfigError),
}

/// Validation errors for notification setups and stored queries.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("arXiv notifications require at least one arXiv class")]
    MissingClasses,

    #[error("Unknown arXiv class: {0}")]
    UnknownClass(String),

    #[error("arXiv classes are only valid on arXiv notifications")]
    UnexpectedClasses,

    #[error("{0} notifications require data")]
    MissingData(String),

    #[error("Saved-search notifications are built from their stored query parameters")]
    NotATemplate,

    #[error("Stored query has no q parameter")]
    MissingQueryField,

    #[error("Bigquery data requires an fq filter referencing {{!bitset}}")]
    BigqueryWithoutBitset,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
