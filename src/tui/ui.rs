use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::state::App;
use crate::core::view::view;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{BUTTON_HEIGHT, EntryList, FetchButton, TitleBar};

const HELP_TEXT: &str = " f Fetch  ↑/↓ Select  Enter Open  q Quit ";

/// Splits the frame into title, button, list, and help rows.
fn layout_areas(area: Rect) -> [Rect; 4] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(1), Length(BUTTON_HEIGHT), Min(0), Length(1)]).areas(area)
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let vm = view(app);
    let [title_area, button_area, list_area, help_area] = layout_areas(frame.area());

    TitleBar::new(
        vm.heading.to_string(),
        vm.status.clone(),
        app.last_error.is_some(),
    )
    .render(frame, title_area);

    FetchButton::new(vm.fetch_label.to_string(), vm.in_flight, tui.pulse_value)
        .render(frame, button_area);

    EntryList::new(&mut tui.entry_list, &vm.items, vm.phase).render(frame, list_area);

    frame.render_widget(
        Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)),
        help_area,
    );
}

/// Hit test: is the screen position inside the fetch button?
pub fn hit_test_button(column: u16, row: u16, frame_area: Rect, in_flight: usize) -> bool {
    let [_title, button_area, _list, _help] = layout_areas(frame_area);
    let width = FetchButton::new(crate::core::view::FETCH_LABEL.to_string(), in_flight, 0.0)
        .width()
        .min(button_area.width);
    column >= button_area.x
        && column < button_area.x + width
        && row >= button_area.y
        && row < button_area.y + button_area.height
}
