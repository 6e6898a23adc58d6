//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the list view,
//! and translates keyboard and mouse events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Fetch Flow
//!
//! `update()` answers `Action::FetchRequested` with `Effect::SpawnFetch`. The
//! loop spawns a tokio task that calls the `EntrySource` once and sends
//! `Action::FetchCompleted` back over an mpsc channel. Completions are applied
//! on this thread in arrival order, so the last response to arrive wins.
//! Tasks are never cancelled or timed out.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the button border can pulse.
//! - **Idle**: sleeps up to 500ms, only redraws on events or completions.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::source::{EntrySource, HttpSource};
use crate::tui::component::EventHandler;
use crate::tui::components::{EntryListEvent, EntryListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub entry_list: EntryListState,
    // Animation state
    pub pulse_value: f32,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            entry_list: EntryListState::new(),
            pulse_value: 0.0,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Build the entry source for a resolved config.
pub fn build_source(config: &ResolvedConfig) -> Arc<dyn EntrySource> {
    Arc::new(HttpSource::new(config.endpoint.clone()))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source = build_source(&config);
    info!("Using {} source at {}", source.name(), config.endpoint);
    let mut app = App::new(source);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame
    let mut should_quit = false;

    while !should_quit {
        let animating = app.is_loading();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            tui.pulse_value = (elapsed * 5.0).sin() * 0.5 + 0.5;
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &app, &mut tui)) {
                ratatui::restore();
                return Err(e);
            }
            needs_redraw = false;
        }

        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let action = match event {
                TuiEvent::Resize => None,
                TuiEvent::ForceQuit | TuiEvent::Quit => Some(Action::Quit),
                TuiEvent::Fetch => Some(Action::FetchRequested),
                TuiEvent::MouseClick(column, row) => {
                    let frame_area = terminal.get_frame().area();
                    if ui::hit_test_button(column, row, frame_area, app.in_flight) {
                        Some(Action::FetchRequested)
                    } else {
                        None
                    }
                }
                TuiEvent::Open
                | TuiEvent::CursorUp
                | TuiEvent::CursorDown
                | TuiEvent::CursorHome
                | TuiEvent::CursorEnd => tui
                    .entry_list
                    .handle_event(&event)
                    .map(|EntryListEvent::Open(index)| Action::OpenEntry(index)),
            };

            if let Some(action) = action {
                let effect = update(&mut app, action);
                if apply_effect(effect, &mut app, &tx) {
                    should_quit = true;
                    break;
                }
            }
        }

        // Handle background task actions (fetch completions)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let replaces_list = matches!(
                action,
                Action::FetchCompleted { result: Ok(_), .. }
            );
            let effect = update(&mut app, action);
            if replaces_list {
                tui.entry_list.reset(app.list.len());
            }
            if apply_effect(effect, &mut app, &tx) {
                should_quit = true;
            }
        }
    }

    info!("Shutting down with {} fetches still in flight", app.in_flight);
    ratatui::restore();
    Ok(())
}

/// Carries out an effect. Returns true when the loop should exit.
fn apply_effect(effect: Effect, app: &mut App, tx: &mpsc::Sender<Action>) -> bool {
    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::SpawnFetch { request_id } => {
            spawn_fetch(app.source.clone(), request_id, tx.clone());
            false
        }
        Effect::OpenUrl(url) => {
            // The browser runs as its own process, so the opened page has no
            // handle back to this one.
            if let Err(e) = open::that_detached(&url) {
                warn!("Failed to open {}: {}", url, e);
                app.status_message = format!("Failed to open {url}: {e}");
            } else {
                app.status_message = format!("Opened {url}");
            }
            false
        }
    }
}

fn spawn_fetch(source: Arc<dyn EntrySource>, request_id: u64, tx: mpsc::Sender<Action>) {
    info!("Spawning fetch #{} via {}", request_id, source.name());
    tokio::spawn(async move {
        let result = source.fetch_entries().await;
        if tx
            .send(Action::FetchCompleted { request_id, result })
            .is_err()
        {
            warn!("Failed to deliver fetch #{}: receiver dropped", request_id);
        }
    });
}
