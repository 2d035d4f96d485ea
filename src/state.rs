use std::path::PathBuf;
use std::time::Instant;

use tracing::info;

use crate::clipboard::ClipboardSink;
use crate::config::PaymentInstructions;
use crate::notify::{Notification, Toasts};
use crate::receipt::ReceiptCandidate;
use crate::route::{Route, Router};
use crate::session::{Effect, PaymentSession};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    CopyButton,
    ReceiptInput,
    SubmitButton,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Navigation,
    PathInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    ConfirmQuit,
    Help,
}

/// Everything the terminal front end needs: the mounted session (if the
/// form is still on screen), the router and transient UI state.
#[derive(Debug)]
pub struct AppState {
    pub instructions: PaymentInstructions,
    pub session: Option<PaymentSession>,
    pub router: Router,
    pub toasts: Toasts,
    pub focus: Focus,
    pub input_mode: InputMode,
    pub path_input: String,
    pub dialog_stack: Vec<Dialog>,
    pub spinner_frame: usize,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(instructions: PaymentInstructions) -> Self {
        let session = PaymentSession::mount(instructions.clone());
        Self::with_session(instructions, session)
    }

    pub fn with_session(instructions: PaymentInstructions, session: PaymentSession) -> Self {
        Self {
            instructions,
            session: Some(session),
            router: Router::new(),
            toasts: Toasts::new(),
            focus: Focus::ReceiptInput,
            input_mode: InputMode::Navigation,
            path_input: String::new(),
            dialog_stack: Vec::new(),
            spinner_frame: 0,
            should_quit: false,
        }
    }

    pub fn route(&self) -> Route {
        self.router.current()
    }

    /// Advances the session clock and delivers whatever it produced.
    pub fn advance(&mut self, elapsed_ms: u64, now: Instant) {
        if let Some(session) = self.session.as_mut() {
            session.advance(elapsed_ms);
        }
        self.apply_effects(now);
        self.toasts.prune(now);
    }

    pub fn apply_effects(&mut self, now: Instant) {
        let effects = match self.session.as_mut() {
            Some(session) => session.drain_effects(),
            None => return,
        };

        for effect in effects {
            match effect {
                Effect::Notify(n) => self.toasts.push(n, now),
                Effect::Navigate(dest) => {
                    if self.router.navigate(dest) {
                        self.unmount();
                    }
                }
            }
        }
    }

    /// Tears the form down. Pending timers die with it.
    pub fn unmount(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.teardown();
            info!("payment form unmounted");
        }
        self.input_mode = InputMode::Navigation;
        self.path_input.clear();
    }

    pub fn submit(&mut self, now: Instant) {
        if let Some(session) = self.session.as_mut() {
            // Rejections are already queued as toasts by the session.
            let _ = session.submit();
        }
        self.apply_effects(now);
    }

    pub fn copy_account_number(&mut self, clipboard: &mut dyn ClipboardSink, now: Instant) {
        if let Some(session) = self.session.as_mut() {
            let _ = session.copy_account_number(clipboard);
        }
        self.apply_effects(now);
    }

    pub fn select_path(&mut self, path: PathBuf, now: Instant) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if !session.can_select_file() {
            return;
        }
        if !path.is_file() {
            self.toasts.push(
                Notification::error(format!("File not found: {}", path.display())),
                now,
            );
            return;
        }
        let _ = session.select_file(ReceiptCandidate::from_path(path));
        self.apply_effects(now);
    }

    pub fn can_select_file(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.can_select_file())
    }

    pub fn is_confirming(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.is_confirming())
    }

    pub fn cycle_focus(&mut self, forward: bool) {
        self.focus = match (self.focus, forward) {
            (Focus::CopyButton, true) => Focus::ReceiptInput,
            (Focus::ReceiptInput, true) => Focus::SubmitButton,
            (Focus::SubmitButton, true) => Focus::CopyButton,
            (Focus::CopyButton, false) => Focus::SubmitButton,
            (Focus::ReceiptInput, false) => Focus::CopyButton,
            (Focus::SubmitButton, false) => Focus::ReceiptInput,
        };
    }

    pub fn begin_path_input(&mut self) {
        self.input_mode = InputMode::PathInput;
        self.path_input.clear();
    }

    pub fn cancel_path_input(&mut self) {
        self.input_mode = InputMode::Navigation;
        self.path_input.clear();
    }

    pub fn has_dialog(&self) -> bool {
        !self.dialog_stack.is_empty()
    }

    pub fn top_dialog(&self) -> Option<&Dialog> {
        self.dialog_stack.last()
    }

    pub fn push_dialog(&mut self, dialog: Dialog) {
        self.dialog_stack.push(dialog);
    }

    pub fn pop_dialog(&mut self) -> Option<Dialog> {
        self.dialog_stack.pop()
    }
}
