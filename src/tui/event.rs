use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    ForceQuit,
    Quit,
    Fetch,
    Open,

    // TUI-local events (handled directly in TUI)
    CursorUp,
    CursorDown,
    CursorHome,
    CursorEnd,
    MouseClick(u16, u16),
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => match event::read() {
            Ok(ev) => map_event(ev),
            Err(e) => {
                log::warn!("Failed to read terminal event: {}", e);
                None
            }
        },
        Ok(false) => None,
        Err(e) => {
            log::warn!("Failed to poll terminal events: {}", e);
            None
        }
    }
}

/// Translate a raw crossterm event into a `TuiEvent`.
pub fn map_event(ev: Event) -> Option<TuiEvent> {
    match ev {
        Event::Key(key_event) => {
            // Only react to presses; some terminals also report releases
            if key_event.kind != KeyEventKind::Press {
                return None;
            }
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(TuiEvent::Quit),
                (_, KeyCode::Char('f')) | (_, KeyCode::Char('r')) => Some(TuiEvent::Fetch),
                (_, KeyCode::Enter) | (_, KeyCode::Char('o')) => Some(TuiEvent::Open),
                (_, KeyCode::Up) | (_, KeyCode::Char('k')) => Some(TuiEvent::CursorUp),
                (_, KeyCode::Down) | (_, KeyCode::Char('j')) => Some(TuiEvent::CursorDown),
                (_, KeyCode::Home) | (_, KeyCode::Char('g')) => Some(TuiEvent::CursorHome),
                (_, KeyCode::End) | (_, KeyCode::Char('G')) => Some(TuiEvent::CursorEnd),
                _ => None,
            }
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            MouseEventKind::ScrollUp => Some(TuiEvent::CursorUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::CursorDown),
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}
