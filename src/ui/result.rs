use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::route::Destination;

pub fn draw_result(f: &mut Frame, area: Rect, dest: Destination) {
    let (heading, color, body) = match dest {
        Destination::PaymentFailed => (
            "✗  Payment Failed",
            Color::Red,
            "We could not confirm your payment.",
        ),
        Destination::PaymentSuccess => (
            "✓  Payment Confirmed",
            Color::Green,
            "Your payment has been received.",
        ),
    };

    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            heading,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(body),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] Exit",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    let block = Block::default().borders(Borders::ALL);
    let widget = Paragraph::new(lines)
        .block(block)
        .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(widget, area);
}
