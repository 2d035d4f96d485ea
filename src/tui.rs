use std::io;
use std::time::{Duration, Instant};

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::CrosstermBackend;
use ratatui::Terminal;

use crate::clipboard::{ClipboardSink, SystemClipboard};
use crate::error::AppError;
use crate::picker::{self, PickResult};
use crate::route::Route;
use crate::state::*;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub fn run_tui(mut state: AppState) -> Result<(), AppError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let mut clipboard = SystemClipboard::new();

    let result = main_loop(&mut terminal, &mut state, &mut clipboard);

    // Tear down before the terminal goes so no timer outlives the screen.
    state.unmount();
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
    clipboard: &mut dyn ClipboardSink,
) -> Result<(), AppError> {
    let mut last = Instant::now();

    loop {
        terminal.draw(|f| crate::ui::draw(f, state))?;

        if state.should_quit {
            break;
        }

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(key, state, terminal, clipboard)?;
                }
            }
        }

        // Carry sub-millisecond remainders so the session clock never drifts.
        let now = Instant::now();
        let elapsed_ms = now.duration_since(last).as_millis() as u64;
        last += Duration::from_millis(elapsed_ms);
        state.advance(elapsed_ms, now);
        state.spinner_frame = state.spinner_frame.wrapping_add(1);
    }

    Ok(())
}

fn handle_key(
    key: KeyEvent,
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    clipboard: &mut dyn ClipboardSink,
) -> Result<(), AppError> {
    if state.has_dialog() {
        handle_dialog_key(key, state);
        return Ok(());
    }

    match state.route() {
        Route::PaymentDetails => match state.input_mode {
            InputMode::PathInput => {
                handle_path_key(key, state);
                Ok(())
            }
            InputMode::Navigation => handle_form_key(key, state, terminal, clipboard),
        },
        Route::Done(_) => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q')) {
                state.should_quit = true;
            }
            Ok(())
        }
    }
}

fn handle_dialog_key(key: KeyEvent, state: &mut AppState) {
    match state.top_dialog() {
        Some(Dialog::ConfirmQuit) => match key.code {
            KeyCode::Enter => {
                state.pop_dialog();
                state.should_quit = true;
            }
            KeyCode::Esc => {
                state.pop_dialog();
            }
            _ => {}
        },
        Some(Dialog::Help) => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?')) {
                state.pop_dialog();
            }
        }
        None => {}
    }
}

fn handle_form_key(
    key: KeyEvent,
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    clipboard: &mut dyn ClipboardSink,
) -> Result<(), AppError> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let now = Instant::now();

    if ctrl {
        match key.code {
            KeyCode::Char('q') => state.push_dialog(Dialog::ConfirmQuit),
            KeyCode::Char('s') => state.submit(now),
            KeyCode::Char('a') => attach_receipt(state, terminal)?,
            KeyCode::Char('y') => state.copy_account_number(clipboard, now),
            _ => {}
        }
        return Ok(());
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => state.cycle_focus(true),
        KeyCode::BackTab | KeyCode::Up => state.cycle_focus(false),
        KeyCode::Char('?') => state.push_dialog(Dialog::Help),
        KeyCode::Enter | KeyCode::Char(' ') => match state.focus {
            Focus::CopyButton => state.copy_account_number(clipboard, now),
            Focus::ReceiptInput => attach_receipt(state, terminal)?,
            Focus::SubmitButton => state.submit(now),
        },
        _ => {}
    }
    Ok(())
}

fn handle_path_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.path_input.push(c);
        }
        KeyCode::Backspace => {
            state.path_input.pop();
        }
        KeyCode::Enter => {
            let typed = picker::parse_typed_path(&state.path_input);
            state.cancel_path_input();
            if let Some(path) = typed {
                state.select_path(path, Instant::now());
            }
        }
        KeyCode::Esc => state.cancel_path_input(),
        _ => {}
    }
}

fn attach_receipt(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), AppError> {
    if !state.can_select_file() {
        return Ok(());
    }

    // Suspend terminal for zenity
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();

    let picked = picker::pick_receipt();

    execute!(terminal.backend_mut(), EnterAlternateScreen).ok();
    enable_raw_mode()?;
    terminal.clear()?;

    match picked {
        PickResult::Picked(path) => state.select_path(path, Instant::now()),
        PickResult::Cancelled => {}
        PickResult::Unavailable => state.begin_path_input(),
    }
    Ok(())
}
