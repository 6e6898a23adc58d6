//! # Entry List Component
//!
//! The ordered list of links. Each row shows its 1-based position, the label,
//! and the target URL dimmed after it.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `EntryListState` lives in `TuiState`
//! - `EntryList` is created each frame with borrowed state and the items

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::state::ListPhase;
use crate::core::view::ItemView;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Persistent selection state for the entry list.
#[derive(Default)]
pub struct EntryListState {
    pub list_state: ListState,
    len: usize,
}

impl EntryListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called whenever the list is replaced. Positions from the old list mean
    /// nothing for the new one, so selection restarts at the top.
    pub fn reset(&mut self, len: usize) {
        self.len = len;
        self.list_state = ListState::default();
        if len > 0 {
            self.list_state.select(Some(0));
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    fn select(&mut self, index: usize) {
        if self.len > 0 {
            self.list_state.select(Some(index.min(self.len - 1)));
        }
    }
}

/// Events emitted by the entry list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryListEvent {
    /// Follow the link at this position.
    Open(usize),
}

impl EventHandler for EntryListState {
    type Event = EntryListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<EntryListEvent> {
        match event {
            TuiEvent::CursorUp => {
                let idx = self.selected().map(|i| i.saturating_sub(1)).unwrap_or(0);
                self.select(idx);
                None
            }
            TuiEvent::CursorDown => {
                let idx = self.selected().map(|i| i + 1).unwrap_or(0);
                self.select(idx);
                None
            }
            TuiEvent::CursorHome => {
                self.select(0);
                None
            }
            TuiEvent::CursorEnd => {
                self.select(self.len.saturating_sub(1));
                None
            }
            TuiEvent::Open => self.selected().map(EntryListEvent::Open),
            _ => None,
        }
    }
}

/// Transient render wrapper for the entry list.
pub struct EntryList<'a> {
    state: &'a mut EntryListState,
    items: &'a [ItemView],
    phase: ListPhase,
}

impl<'a> EntryList<'a> {
    pub fn new(state: &'a mut EntryListState, items: &'a [ItemView], phase: ListPhase) -> Self {
        Self {
            state,
            items,
            phase,
        }
    }
}

impl Component for EntryList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1));

        if self.items.is_empty() {
            let hint = match self.phase {
                ListPhase::Empty => "Nothing fetched yet. Press f to fetch the list.",
                ListPhase::Populated => "The endpoint returned an empty list.",
            };
            let empty = Paragraph::new(hint)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let number_width = self.items.len().to_string().len();
        let inner_width = area.width.saturating_sub(2) as usize; // padding
        let rows: Vec<ListItem> = self
            .items
            .iter()
            .map(|item| {
                let number = format!("{:>width$}. ", item.number(), width = number_width);
                let label_width = inner_width.saturating_sub(number.len());
                let label = truncate_str(&item.label, label_width);
                let url_width = label_width.saturating_sub(label.width() + 2);
                let mut spans = vec![
                    Span::styled(number, Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        label,
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::UNDERLINED),
                    ),
                ];
                if url_width > 0 {
                    spans.push(Span::raw("  "));
                    spans.push(Span::styled(
                        truncate_str(&item.url, url_width),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(rows)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// Truncate a string to fit within `max_width` cells, adding "..." if needed.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn items(labels: &[(&str, &str)]) -> Vec<ItemView> {
        labels
            .iter()
            .enumerate()
            .map(|(key, (label, url))| ItemView {
                key,
                label: label.to_string(),
                url: url.to_string(),
            })
            .collect()
    }

    fn render_rows(
        state: &mut EntryListState,
        items: &[ItemView],
        phase: ListPhase,
    ) -> Vec<String> {
        let backend = TestBackend::new(60, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| EntryList::new(state, items, phase).render(f, f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn test_reset_selects_first_row() {
        let mut state = EntryListState::new();
        state.reset(3);
        assert_eq!(state.selected(), Some(0));
        state.handle_event(&TuiEvent::CursorEnd);
        assert_eq!(state.selected(), Some(2));
        state.reset(0);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_cursor_moves_are_clamped() {
        let mut state = EntryListState::new();
        state.reset(2);
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected(), Some(0));
        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected(), Some(1));
        state.handle_event(&TuiEvent::CursorHome);
        assert_eq!(state.selected(), Some(0));
        state.handle_event(&TuiEvent::CursorEnd);
        assert_eq!(state.selected(), Some(1));
    }

    #[test]
    fn test_open_emits_selected_position() {
        let mut state = EntryListState::new();
        state.reset(2);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(
            state.handle_event(&TuiEvent::Open),
            Some(EntryListEvent::Open(1))
        );
    }

    #[test]
    fn test_open_on_empty_list_emits_nothing() {
        let mut state = EntryListState::new();
        assert_eq!(state.handle_event(&TuiEvent::Open), None);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_render_rows_in_order_with_numbers() {
        let items = items(&[("A", "u1"), ("B", "u2")]);
        let mut state = EntryListState::new();
        state.reset(items.len());
        let rows = render_rows(&mut state, &items, ListPhase::Populated);

        // Row 0 is the top border
        assert!(rows[1].contains("1. A  u1"));
        assert!(rows[2].contains("2. B  u2"));
    }

    #[test]
    fn test_render_empty_hint_before_first_fetch() {
        let mut state = EntryListState::new();
        let rows = render_rows(&mut state, &[], ListPhase::Empty);
        assert!(rows.iter().any(|r| r.contains("Press f to fetch")));
    }

    #[test]
    fn test_render_empty_hint_after_empty_response() {
        let mut state = EntryListState::new();
        let rows = render_rows(&mut state, &[], ListPhase::Populated);
        assert!(rows.iter().any(|r| r.contains("empty list")));
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("short", 10), "short");
        assert_eq!(truncate_str("a long label", 8), "a lon...");
        assert_eq!(truncate_str("abcdef", 2), "..");
    }
}
