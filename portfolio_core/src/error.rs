//! Error type for data loading and name lookups.

use thiserror::Error;

/// Errors raised while loading portfolio data or parsing identifiers.
#[derive(Debug, Error)]
pub enum PortfolioError {
    /// The portfolio JSON document did not match the data model.
    #[error("failed to parse portfolio data: {0}")]
    Parse(#[from] serde_json::Error),

    /// A section name that is not one of the known anchors.
    #[error("unknown section '{0}'")]
    UnknownSection(String),

    /// A project category label that is not one of the known categories.
    #[error("unknown project category '{0}'")]
    UnknownCategory(String),
}
