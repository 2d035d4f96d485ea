use std::time::Instant;

use payconfirm::config::PaymentInstructions;
use payconfirm::notify::Severity;
use payconfirm::route::{Destination, Route};
use payconfirm::session::PaymentSession;
use payconfirm::state::{AppState, Focus};
use payconfirm::submission::CONFIRMATION_MS;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn receipt_file(suffix: &str) -> tempfile::NamedTempFile {
    tempfile::Builder::new()
        .prefix("receipt")
        .suffix(suffix)
        .tempfile()
        .expect("Cannot create temp file")
}

fn screen_text(state: &AppState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    terminal
        .draw(|f| payconfirm::ui::draw(f, state))
        .unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_submission_timeout_routes_to_failure_and_unmounts() {
    let now = Instant::now();
    let file = receipt_file(".png");
    let mut state = AppState::new(PaymentInstructions::default());

    state.select_path(file.path().to_path_buf(), now);
    state.submit(now);
    assert!(state.is_confirming());
    assert!(state
        .toasts
        .iter()
        .any(|t| t.notification.message == "Confirming payment..."));

    state.advance(CONFIRMATION_MS, now);
    assert_eq!(state.route(), Route::Done(Destination::PaymentFailed));
    assert!(state.session.is_none());
    assert_eq!(state.router.history(), &[Route::PaymentDetails]);
}

#[test]
fn test_double_navigation_is_harmless() {
    let now = Instant::now();
    let file = receipt_file(".jpeg");
    let session = PaymentSession::mount_with_countdown(PaymentInstructions::default(), 7);
    let mut state = AppState::with_session(PaymentInstructions::default(), session);

    state.select_path(file.path().to_path_buf(), now);
    state.submit(now);

    // Countdown and confirmation both land at 7s.
    state.advance(CONFIRMATION_MS, now);
    assert_eq!(state.route(), Route::Done(Destination::PaymentFailed));
    assert_eq!(state.router.history().len(), 1);

    assert!(!state.router.navigate(Destination::PaymentFailed));
    assert_eq!(state.router.history().len(), 1);

    state.advance(60_000, now);
    assert_eq!(state.route(), Route::Done(Destination::PaymentFailed));
}

#[test]
fn test_missing_file_path_keeps_previous_receipt() {
    let now = Instant::now();
    let file = receipt_file(".png");
    let mut state = AppState::new(PaymentInstructions::default());

    state.select_path(file.path().to_path_buf(), now);
    let missing = file.path().with_file_name("does-not-exist.png");
    state.select_path(missing, now);

    let held = state.session.as_ref().and_then(|s| s.receipt()).unwrap();
    assert_eq!(held.path, file.path());
    assert!(state
        .toasts
        .iter()
        .any(|t| t.notification.severity == Severity::Error
            && t.notification.message.starts_with("File not found")));
}

#[test]
fn test_wrong_extension_shows_rejection_toast() {
    let now = Instant::now();
    let file = receipt_file(".gif");
    let mut state = AppState::new(PaymentInstructions::default());

    state.select_path(file.path().to_path_buf(), now);
    assert!(state.session.as_ref().unwrap().receipt().is_none());
    assert!(state
        .toasts
        .iter()
        .any(|t| t.notification.message == "Please upload only PNG or JPG files"));
}

#[test]
fn test_unmount_cancels_confirmation() {
    let now = Instant::now();
    let file = receipt_file(".png");
    let mut state = AppState::new(PaymentInstructions::default());
    state.select_path(file.path().to_path_buf(), now);
    state.submit(now);
    state.advance(3_000, now);

    state.unmount();
    state.advance(CONFIRMATION_MS, now);
    assert_eq!(state.route(), Route::PaymentDetails);
    assert!(state.router.history().is_empty());
}

#[test]
fn test_focus_cycles_through_controls() {
    let mut state = AppState::new(PaymentInstructions::default());
    assert_eq!(state.focus, Focus::ReceiptInput);
    state.cycle_focus(true);
    assert_eq!(state.focus, Focus::SubmitButton);
    state.cycle_focus(true);
    assert_eq!(state.focus, Focus::CopyButton);
    state.cycle_focus(false);
    assert_eq!(state.focus, Focus::SubmitButton);
}

#[test]
fn test_form_renders_instructions_and_timer() {
    let state = AppState::new(PaymentInstructions::default());
    let text = screen_text(&state);

    assert!(text.contains("1002830115"));
    assert!(text.contains("Sparkle"));
    assert!(text.contains("Joel Samuel"));
    assert!(text.contains("20,000 naira"));
    assert!(text.contains("05:00"));
    assert!(text.contains("I have made payment"));
}

#[test]
fn test_failure_view_renders() {
    let mut state = AppState::new(PaymentInstructions::default());
    state.router.navigate(Destination::PaymentFailed);
    state.unmount();
    let text = screen_text(&state);
    assert!(text.contains("Payment Failed"));
}
