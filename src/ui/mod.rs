mod display;
mod fields;
mod form_page;
mod home;
mod layout;
mod status_bar;
mod theme;
mod title_bar;

use crate::app::state::{AppState, Page};
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    title_bar::render(frame, app_layout.title_bar, state);
    match &state.page {
        Page::Home => home::render(frame, app_layout.body),
        Page::Personal(page) => form_page::render(frame, app_layout.body, page),
        Page::Professional(page) => form_page::render(frame, app_layout.body, page),
        Page::Display => display::render(frame, app_layout.body, state.store.state()),
    }
    status_bar::render(frame, app_layout.status_bar, state);
}

/// Draw `state` on an in-memory terminal and return the screen text, one
/// line per row.
#[cfg(test)]
pub fn render_to_string(state: &AppState, width: u16, height: u16) -> String {
    use ratatui::backend::TestBackend;

    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| render(f, state)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
