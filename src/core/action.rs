//! # Actions
//!
//! Everything that can happen in learnlist becomes an `Action`.
//! User presses `f`? That's `Action::FetchRequested`.
//! The endpoint answers? That's `Action::FetchCompleted { .. }`.
//!
//! The `update()` function applies an action to the state and returns the
//! `Effect` the adapter has to carry out. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{info, warn};

use crate::core::entry::Entry;
use crate::core::state::App;
use crate::source::FetchError;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The trigger control was activated.
    FetchRequested,
    /// A spawned fetch resolved, successfully or not.
    FetchCompleted {
        request_id: u64,
        result: Result<Vec<Entry>, FetchError>,
    },
    /// The user asked to follow the link at this position.
    OpenEntry(usize),
    Quit,
}

/// Side effects requested by `update()`, executed by the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    SpawnFetch { request_id: u64 },
    OpenUrl(String),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::FetchRequested => {
            let request_id = app.next_request_id;
            app.next_request_id += 1;
            app.in_flight += 1;
            app.status_message = String::from("Fetching...");
            Effect::SpawnFetch { request_id }
        }
        Action::FetchCompleted { request_id, result } => {
            app.in_flight = app.in_flight.saturating_sub(1);
            match result {
                Ok(entries) => {
                    info!(
                        "Fetch #{} resolved with {} entries",
                        request_id,
                        entries.len()
                    );
                    let count = entries.len();
                    app.replace_list(entries);
                    app.last_error = None;
                    let now = chrono::Local::now();
                    app.last_fetched_at = Some(now);
                    app.status_message =
                        format!("Fetched {} entries at {}", count, now.format("%H:%M:%S"));
                }
                Err(e) => {
                    warn!("Fetch #{} failed: {}", request_id, e);
                    app.status_message = format!("Fetch failed: {e}");
                    app.last_error = Some(e);
                }
            }
            Effect::None
        }
        Action::OpenEntry(index) => match app.list.get(index) {
            Some(entry) => {
                info!("Opening entry {} ({})", index, entry.url);
                Effect::OpenUrl(entry.url.clone())
            }
            None => Effect::None,
        },
        Action::Quit => Effect::Quit,
    }
}
