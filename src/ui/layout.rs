use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

/// Widest the page body is allowed to grow.
const MAX_BODY_WIDTH: u16 = 84;

pub struct AppLayout {
    pub title_bar: Rect,
    pub body: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: title bar | content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(5),    // Page body
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    // Center the body horizontally with a small margin
    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .flex(Flex::Center)
        .constraints([Constraint::Max(MAX_BODY_WIDTH)])
        .split(main_chunks[1]);

    AppLayout {
        title_bar: main_chunks[0],
        body: body_chunks[0].inner(ratatui::layout::Margin::new(1, 1)),
        status_bar: main_chunks[2],
    }
}

/// Stack `heights` top to bottom inside `area`; the leftover space goes last.
pub fn stack(area: Rect, heights: &[u16]) -> Vec<Rect> {
    let mut constraints: Vec<Constraint> = heights.iter().map(|h| Constraint::Length(*h)).collect();
    constraints.push(Constraint::Min(0));
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area)
        .to_vec()
}
