use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::notify::Severity;
use crate::state::AppState;

const TOAST_WIDTH: u16 = 44;

/// Stacks toasts in the bottom-right corner, newest lowest.
pub fn draw_toasts(f: &mut Frame, area: Rect, state: &AppState) {
    let toasts: Vec<_> = state.toasts.iter().collect();
    let width = TOAST_WIDTH.min(area.width);
    let mut bottom = area.y + area.height.saturating_sub(1);

    for toast in toasts.iter().rev() {
        if bottom < area.y + 3 {
            break;
        }
        let (icon, color) = match toast.notification.severity {
            Severity::Info => ("ⓘ", Color::Blue),
            Severity::Error => ("✗", Color::Red),
            Severity::Success => ("✓", Color::Green),
        };
        let rect = Rect::new(
            area.x + area.width.saturating_sub(width),
            bottom - 3,
            width,
            3,
        );
        bottom -= 3;

        f.render_widget(Clear, rect);
        let line = Line::from(vec![
            Span::styled(format!("{} ", icon), Style::default().fg(color)),
            Span::raw(toast.notification.message.clone()),
        ]);
        let widget = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
        f.render_widget(widget, rect);
    }
}
