use std::fmt;

use async_trait::async_trait;

use crate::core::entry::Entry;

/// Errors that can occur while fetching the entry list.
/// None of them are retried; the caller keeps its previous list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Network-level failure (connection refused, DNS, reset).
    Network(String),
    /// The endpoint answered with a non-success status.
    Api { status: u16, message: String },
    /// The body was not a JSON array of entries.
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Api { status, message } => {
                write!(f, "endpoint error (HTTP {status}): {message}")
            }
            FetchError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Anything that can produce the current list of entries.
#[async_trait]
pub trait EntrySource: Send + Sync {
    /// Returns a short name for logs.
    fn name(&self) -> &str;

    /// Fetches the complete list. One call, one request.
    async fn fetch_entries(&self) -> Result<Vec<Entry>, FetchError>;
}
