pub mod confirm;
pub mod dialog;
pub mod form;
pub mod keybar;
pub mod layout;
pub mod result;
pub mod titlebar;
pub mod toast;

use ratatui::Frame;

use crate::route::Route;
use crate::state::AppState;

pub fn draw(f: &mut Frame, state: &AppState) {
    let area = f.area();

    match state.route() {
        Route::PaymentDetails => draw_payment(f, area, state),
        Route::Done(dest) => result::draw_result(f, area, dest),
    }

    toast::draw_toasts(f, area, state);
}

fn draw_payment(f: &mut Frame, area: ratatui::layout::Rect, state: &AppState) {
    let layout = layout::compute_layout(area);

    titlebar::draw_titlebar(f, layout.titlebar, state);
    form::draw_form(f, layout.main, state);
    keybar::draw_keybar(f, layout.keybar, state);

    if state.is_confirming() {
        confirm::draw_confirmation(f, area, state);
    }

    if state.has_dialog() {
        dialog::draw_dialog(f, area, state);
    }
}
