// ============================================================================
// DASHBOARD VIEW - Encabezado, pestañas y pantalla activa
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::state::app_state::{AppState, DashboardTab};
use crate::utils::LOGIN_PATH;
use crate::views::contracts::render_contracts;
use crate::views::employees::render_employees;
use crate::views::shared::button;

fn render_header(state: &AppState) -> Result<Element, JsValue> {
    let logout = {
        let state = state.clone();
        button("Cerrar sesión", "btn btn-danger", move |_| {
            state.logout();
            crate::navigate(LOGIN_PATH);
        })?
    };

    Ok(ElementBuilder::new("header")?
        .class("dashboard-header")
        .child(ElementBuilder::new("h1")?.text("Interfaz RRHH").build())?
        .child(logout)?
        .build())
}

fn render_tabs(state: &AppState) -> Result<Element, JsValue> {
    let active = state.active_tab();
    let mut nav = ElementBuilder::new("nav")?.class("dashboard-tabs");
    for tab in DashboardTab::ALL {
        let class = if tab == active { "tab active" } else { "tab" };
        let state = state.clone();
        nav = nav.child(button(tab.label(), class, move |_| {
            if state.select_tab(tab) {
                state.load_active_tab();
            }
        })?)?;
    }
    Ok(nav.build())
}

pub fn render_dashboard(state: &AppState) -> Result<Element, JsValue> {
    let content = match state.active_tab() {
        DashboardTab::Empleados => render_employees(state)?,
        DashboardTab::Contratos => render_contracts(state)?,
    };

    Ok(ElementBuilder::new("div")?
        .class("dashboard")
        .child(render_header(state)?)?
        .child(render_tabs(state)?)?
        .child(ElementBuilder::new("main")?.class("dashboard-content").child(content)?.build())?
        .build())
}
