//! Error types
//!
//! Card-level failures are kept separate from run-level failures so the row
//! grouper can skip a malformed card without aborting the whole extraction.

use thiserror::Error;

/// A card that cannot be turned into a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// One of the required sub-elements (name, team, driver image) is absent.
    #[error("card has no {field} element")]
    MissingElement { field: &'static str },
}

/// Failures that stop an extraction run.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("no element matches grid container selector `{0}`")]
    MissingContainer(String),

    #[error("invalid selector `{selector}` for {field}: {message}")]
    InvalidSelector {
        field: &'static str,
        selector: String,
        message: String,
    },

    #[error("invalid card class `{0}`")]
    InvalidCardClass(String),

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },
}
