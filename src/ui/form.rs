use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::state::{AppState, Focus, InputMode};

const SPINNER: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

fn label(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

fn readonly(value: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {}  ", value),
        Style::default().fg(Color::White).bg(Color::Rgb(40, 40, 40)),
    ))
}

fn focus_style(focused: bool, enabled: bool) -> Style {
    match (focused, enabled) {
        (_, false) => Style::default().fg(Color::DarkGray),
        (true, true) => Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        (false, true) => Style::default().fg(Color::Cyan),
    }
}

pub fn draw_form(f: &mut Frame, area: Rect, state: &AppState) {
    let info = &state.instructions;
    let confirming = state.is_confirming();
    let can_select = state.can_select_file();

    let mut lines: Vec<Line> = vec![
        Line::from(""),
        Line::from(Span::styled(
            info.lead.clone(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("▌ ⓘ ", Style::default().fg(Color::Blue)),
            Span::styled(info.notice.clone(), Style::default().fg(Color::LightBlue)),
        ]),
        Line::from(""),
        label("Account Number"),
        Line::from(vec![
            Span::styled(
                format!("  {}  ", info.account_number),
                Style::default().fg(Color::White).bg(Color::Rgb(40, 40, 40)),
            ),
            Span::raw(" "),
            Span::styled(
                " ⧉ Copy ",
                focus_style(state.focus == Focus::CopyButton, true),
            ),
        ]),
        Line::from(""),
        label("Bank"),
        readonly(&info.bank_name),
        Line::from(""),
        label("Account Name"),
        readonly(&info.account_name),
        Line::from(""),
        label("Amount"),
        readonly(&info.amount),
        Line::from(""),
        label("Upload Payment Receipt (PNG or JPG)"),
    ];

    let receipt_name = state
        .session
        .as_ref()
        .and_then(|s| s.receipt())
        .map(|r| r.file_name())
        .unwrap_or_else(|| "No file chosen".to_string());

    if state.input_mode == InputMode::PathInput {
        lines.push(Line::from(vec![
            Span::styled("  Path: ", Style::default().fg(Color::Yellow)),
            Span::raw(state.path_input.clone()),
            Span::styled("█", Style::default().fg(Color::Yellow)),
        ]));
    } else {
        lines.push(Line::from(vec![
            Span::styled(
                " Choose File ",
                focus_style(state.focus == Focus::ReceiptInput, can_select),
            ),
            Span::raw(" "),
            Span::raw(receipt_name),
        ]));
    }
    lines.push(Line::from(""));

    let button = if confirming {
        let frame = SPINNER[state.spinner_frame % SPINNER.len()];
        Span::styled(
            format!(" {} Confirming Payment... ", frame),
            Style::default().fg(Color::White).bg(Color::Rgb(30, 64, 175)),
        )
    } else {
        Span::styled(
            " I have made payment ",
            focus_style(state.focus == Focus::SubmitButton, true),
        )
    };
    lines.push(Line::from(button));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", info.headline))
        .border_style(Style::default().fg(Color::Gray));
    let widget = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}
