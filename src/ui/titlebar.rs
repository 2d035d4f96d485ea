use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::AppState;

pub fn draw_titlebar(f: &mut Frame, area: Rect, state: &AppState) {
    let title = &state.instructions.headline;

    let timer_text = match state.session.as_ref() {
        Some(session) => {
            let formatted = format!(" ◷ {} ", session.time_left());
            if session.countdown().is_warning() {
                Span::styled(
                    formatted,
                    Style::default()
                        .fg(Color::White)
                        .bg(Color::Red)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(
                    formatted,
                    Style::default()
                        .fg(Color::Rgb(133, 77, 14))
                        .bg(Color::Rgb(254, 249, 195)),
                )
            }
        }
        None => Span::raw(""),
    };

    let title_text = format!("[ {} ]", title);
    let title_span = Span::styled(
        title_text.clone(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    // Centre the title, timer pinned to the right edge
    let available = area.width as usize;
    let timer_len = timer_text.width();
    let title_len = title_text.chars().count();
    let center_pad = available.saturating_sub(title_len) / 2;
    let right_pad = available.saturating_sub(center_pad + title_len + timer_len);

    let line = Line::from(vec![
        Span::raw(" ".repeat(center_pad)),
        title_span,
        Span::raw(" ".repeat(right_pad)),
        timer_text,
    ]);

    let widget = Paragraph::new(line)
        .style(Style::default().bg(Color::DarkGray))
        .alignment(Alignment::Left);
    f.render_widget(widget, area);
}
