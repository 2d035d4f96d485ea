use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub titlebar: Rect,
    pub main: Rect,
    pub keybar: Rect,
}

/// Width of the form column; the form is centred like a card.
const FORM_WIDTH: u16 = 72;

pub fn compute_layout(area: Rect) -> AppLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // titlebar
            Constraint::Min(10),   // form
            Constraint::Length(1), // keybar
        ])
        .split(area);

    let side = vertical[1].width.saturating_sub(FORM_WIDTH) / 2;
    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(side),
            Constraint::Min(20),
            Constraint::Length(side),
        ])
        .split(vertical[1]);

    AppLayout {
        titlebar: vertical[0],
        main: middle[1],
        keybar: vertical[2],
    }
}
