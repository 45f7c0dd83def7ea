// ============================================================================
// APP - Aplicación principal: raíz #app + render por pantalla
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, clear_children, get_element_by_id};
use crate::state::app_state::AppState;
use crate::state::route_guard::{Route, Screen};
use crate::views::render_app;

pub struct App {
    state: AppState,
    root: Element,
    last_screen: Option<Screen>,
}

impl App {
    pub fn new(route: Route) -> Result<Self, JsValue> {
        let root = get_element_by_id("app").ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new(route);
        if state.session.is_authenticated() {
            log::info!("💾 [APP] Token encontrado en storage");
        }

        // Batch de notificaciones: un solo re-render por tick
        state.subscribe_to_changes(|| {
            Timeout::new(0, crate::rerender_app).forget();
        });

        Ok(Self {
            state,
            root,
            last_screen: None,
        })
    }

    /// Re-render completo; el guard se evalúa aquí, una vez por render
    pub fn render(&mut self) -> Result<(), JsValue> {
        let screen = self.state.screen();

        if screen == Screen::Dashboard && self.last_screen.as_ref() != Some(&Screen::Dashboard) {
            log::info!("📊 [APP] Entrando al dashboard, cargando datos");
            self.state.load_active_tab();
        }
        self.last_screen = Some(screen.clone());

        clear_children(&self.root);
        let view = render_app(&self.state, &screen)?;
        append_child(&self.root, &view)?;
        Ok(())
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}
