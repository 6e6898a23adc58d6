//! # One-Shot Rendering
//!
//! Runs a single fetch cycle through `core::update` and returns the rendered
//! page. Backs the `--html` flag; a failed fetch yields no markup.

use log::{info, warn};
use std::sync::Arc;

use crate::core::action::{Action, Effect, update};
use crate::core::state::App;
use crate::core::view::view;
use crate::markup;
use crate::source::{EntrySource, FetchError};

/// Fetches once from `source` and renders the resulting list.
pub async fn render_once(source: Arc<dyn EntrySource>) -> Result<String, FetchError> {
    let mut app = App::new(source);

    if let Effect::SpawnFetch { request_id } = update(&mut app, Action::FetchRequested) {
        info!("One-shot fetch #{} via {}", request_id, app.source.name());
        let result = app.source.fetch_entries().await;
        let failure = result.as_ref().err().cloned();
        update(&mut app, Action::FetchCompleted { request_id, result });

        if let Some(e) = failure {
            warn!("One-shot fetch #{} failed: {}", request_id, e);
            return Err(e);
        }
    }

    Ok(markup::render(&view(&app)))
}
