//! # Application State
//!
//! Core state for learnlist. Domain data only; presentation state (selection,
//! layout) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── source: Arc<dyn EntrySource>     // where fetches go
//! ├── list: Vec<Entry>                 // the displayed entries
//! ├── phase: ListPhase                 // Empty until the first successful fetch
//! ├── status_message: String           // status line text
//! ├── in_flight: usize                 // fetches spawned but not yet resolved
//! ├── next_request_id: u64             // tags fetches in the log
//! ├── last_fetched_at: Option<..>      // time of the last successful fetch
//! └── last_error: Option<FetchError>   // most recent failure, if any
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use chrono::{DateTime, Local};

use crate::core::entry::Entry;
use crate::source::{EntrySource, FetchError};

/// Whether a fetch has ever succeeded.
///
/// There is no way back to `Empty` and no error phase; a failed fetch leaves
/// the phase and the list as they were.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListPhase {
    #[default]
    Empty,
    Populated,
}

pub const INITIAL_STATUS: &str = "Press f to fetch";

pub struct App {
    pub source: Arc<dyn EntrySource>,
    pub list: Vec<Entry>,
    pub phase: ListPhase,
    pub status_message: String,
    pub in_flight: usize,
    pub next_request_id: u64,
    pub last_fetched_at: Option<DateTime<Local>>,
    pub last_error: Option<FetchError>,
}

impl App {
    pub fn new(source: Arc<dyn EntrySource>) -> Self {
        Self {
            source,
            list: Vec::new(),
            phase: ListPhase::Empty,
            status_message: String::from(INITIAL_STATUS),
            in_flight: 0,
            next_request_id: 1,
            last_fetched_at: None,
            last_error: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Replaces the whole list. Never merges.
    pub(crate) fn replace_list(&mut self, entries: Vec<Entry>) {
        self.list = entries;
        self.phase = ListPhase::Populated;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_app, two_entries};

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert!(app.list.is_empty());
        assert_eq!(app.phase, ListPhase::Empty);
        assert_eq!(app.status_message, INITIAL_STATUS);
        assert!(!app.is_loading());
        assert!(app.last_error.is_none());
    }

    #[test]
    fn test_replace_list_overwrites_previous_entries() {
        let mut app = test_app();
        app.replace_list(two_entries());
        app.replace_list(vec![Entry::new("C", "u3")]);
        assert_eq!(app.list, vec![Entry::new("C", "u3")]);
        assert_eq!(app.phase, ListPhase::Populated);
    }

    #[test]
    fn test_replace_with_empty_list_is_still_populated() {
        let mut app = test_app();
        app.replace_list(Vec::new());
        assert!(app.list.is_empty());
        assert_eq!(app.phase, ListPhase::Populated);
    }
}
