//! # FetchButton Component
//!
//! The trigger control. Stays enabled while fetches are pending; each press
//! starts another request, and the button shows how many are in flight.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::Component;

/// Height of the button including its border.
pub const BUTTON_HEIGHT: u16 = 3;

pub struct FetchButton {
    pub label: String,
    pub in_flight: usize,
    /// 0.0..=1.0 pulse used to animate the border while loading
    pub pulse: f32,
}

impl FetchButton {
    pub fn new(label: String, in_flight: usize, pulse: f32) -> Self {
        Self {
            label,
            in_flight,
            pulse,
        }
    }

    /// Text shown inside the border.
    pub fn caption(&self) -> String {
        match self.in_flight {
            0 => format!("{} (f)", self.label),
            1 => format!("{} (f) · 1 request in flight", self.label),
            n => format!("{} (f) · {} requests in flight", self.label, n),
        }
    }

    /// Width of the clickable box for the current caption.
    pub fn width(&self) -> u16 {
        let inner = unicode_width::UnicodeWidthStr::width(self.caption().as_str()) as u16;
        inner + 4 // borders + one cell of padding each side
    }
}

impl Component for FetchButton {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.in_flight > 0 && self.pulse > 0.5 {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Cyan)
        };

        let button_area = Rect {
            width: self.width().min(area.width),
            ..area
        };

        let button = Paragraph::new(self.caption())
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .block(Block::bordered().border_style(border_style));

        frame.render_widget(button, button_area);
    }
}
