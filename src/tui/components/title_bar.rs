//! # TitleBar Component
//!
//! Top line: the list heading followed by the status message.
//!
//! Stateless: it receives everything as props and renders a single line.
//!
//! 1. **Status message**: `"Things to Learn | Fetched 3 entries at 10:02:11"`
//! 2. **Empty status**: `"Things to Learn"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    /// Heading text, always shown first
    pub heading: String,
    /// Status message (e.g., "Fetching...", "Fetch failed: ...")
    pub status_message: String,
    /// Whether the last fetch failed; tints the status red
    pub is_error: bool,
}

impl TitleBar {
    pub fn new(heading: String, status_message: String, is_error: bool) -> Self {
        Self {
            heading,
            status_message,
            is_error,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            self.heading.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )];

        if !self.status_message.is_empty() {
            let status_style = if self.is_error {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(self.status_message.clone(), status_style));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
