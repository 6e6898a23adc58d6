//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;
use std::sync::Arc;

use crate::core::entry::Entry;
use crate::source::{EntrySource, FetchError};

/// A source that always answers with the same entries.
pub struct StaticSource {
    entries: Vec<Entry>,
}

impl StaticSource {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }
}

#[async_trait]
impl EntrySource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_entries(&self) -> Result<Vec<Entry>, FetchError> {
        Ok(self.entries.clone())
    }
}

/// A source that always fails with the same error.
pub struct FailingSource {
    error: FetchError,
}

impl FailingSource {
    pub fn new(error: FetchError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl EntrySource for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }

    async fn fetch_entries(&self) -> Result<Vec<Entry>, FetchError> {
        Err(self.error.clone())
    }
}

/// Creates a test App backed by an empty StaticSource.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(StaticSource::new(Vec::new())))
}

/// Shorthand for the two-entry list used across tests.
pub fn two_entries() -> Vec<Entry> {
    vec![Entry::new("A", "u1"), Entry::new("B", "u2")]
}
