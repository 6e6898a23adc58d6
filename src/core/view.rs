//! # View Model
//!
//! `view()` derives everything a renderer needs from `App`. It is a pure
//! function: calling it any number of times gives the same result and never
//! touches the state. Both the HTML renderer and the terminal UI consume it.

use crate::core::state::{App, ListPhase};

pub const HEADING: &str = "Things to Learn";
pub const FETCH_LABEL: &str = "Fetch List";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListViewModel {
    pub heading: &'static str,
    pub fetch_label: &'static str,
    pub status: String,
    pub in_flight: usize,
    pub phase: ListPhase,
    pub items: Vec<ItemView>,
}

/// One rendered row. Keyed by position only; the list is always replaced in
/// full, so positions never need to survive an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub key: usize,
    pub label: String,
    pub url: String,
}

impl ItemView {
    /// 1-based number shown next to the row.
    pub fn number(&self) -> usize {
        self.key + 1
    }
}

pub fn view(app: &App) -> ListViewModel {
    ListViewModel {
        heading: HEADING,
        fetch_label: FETCH_LABEL,
        status: app.status_message.clone(),
        in_flight: app.in_flight,
        phase: app.phase,
        items: app
            .list
            .iter()
            .enumerate()
            .map(|(key, entry)| ItemView {
                key,
                label: entry.label.clone(),
                url: entry.url.clone(),
            })
            .collect(),
    }
}
