use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::state::AppState;
use crate::ui::dialog::centered_rect;

const DOTS: [&str; 4] = ["", ".", "..", "..."];

/// Overlay shown for the whole confirmation step.
pub fn draw_confirmation(f: &mut Frame, area: Rect, state: &AppState) {
    let dots = DOTS[(state.spinner_frame / 8) % DOTS.len()];

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("   Confirming payment{:<3}", dots),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("   Please wait while we verify your"),
        Line::from("   transfer. Do not close this window."),
        Line::from(""),
    ];

    let rect = centered_rect(44, lines.len() as u16 + 2, area);
    f.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let widget = Paragraph::new(lines).block(block);
    f.render_widget(widget, rect);
}
