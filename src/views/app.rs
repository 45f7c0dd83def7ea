// ============================================================================
// APP VIEW - Pantalla según el resultado del guard
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::state::app_state::AppState;
use crate::state::route_guard::Screen;
use crate::views::{render_change_password, render_dashboard, render_login};

pub fn render_app(state: &AppState, screen: &Screen) -> Result<Element, JsValue> {
    match screen {
        Screen::Login => render_login(state),
        Screen::Dashboard => render_dashboard(state),
        Screen::ChangePassword { reset_token } => render_change_password(state, reset_token.as_deref()),
    }
}
