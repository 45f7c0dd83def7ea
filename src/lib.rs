// ============================================================================
// INTERFAZ RRHH - FRONTEND MVVM (RUST PURO + WASM)
// ============================================================================
// Arquitectura MVVM:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Estado de formularios + lógica UI
// - Services: SOLO comunicación API
// - State: Sesión, rutas y estado global con Rc<RefCell>
// - Models: Estructuras compartidas con backend
// - Export: PDF / hoja de cálculo a partir de la colección en memoria
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod viewmodels;
pub mod state;
pub mod export;
pub mod dom;
pub mod views;
pub mod utils;
mod app;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;
use crate::config::CONFIG;
use crate::state::route_guard::Route;
use crate::utils::browser::{current_location, push_history};

// Instancia global de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(Config::new(CONFIG.log_level()));
    }
    log::info!("🚀 Interfaz RRHH - Rust Puro + MVVM ({})", CONFIG.environment);
    if !CONFIG.is_production() {
        log::debug!("🔧 [CONFIG] API en {}", CONFIG.api_url());
    }

    let (path, search) = current_location();
    let mut app = App::new(Route::from_location(&path, &search))?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    // Botones atrás/adelante del navegador (se registra una sola vez)
    crate::dom::on_window("popstate", |_| {
        let (path, search) = current_location();
        log::info!("↩️ [ROUTER] popstate {}", path);
        set_route(Route::from_location(&path, &search));
    })?;

    Ok(())
}

fn set_route(route: Route) {
    APP.with(|app_cell| {
        if let Some(ref app) = *app_cell.borrow() {
            app.state().set_route(route);
        }
    });
    rerender_app();
}

/// Navegación interna: pushState + evaluación del guard + re-render
pub fn navigate(path: &str) {
    if let Err(e) = push_history(path) {
        log::error!("❌ [ROUTER] pushState {}: {:?}", path, e);
    }
    let (path, search) = current_location();
    log::info!("🧭 [ROUTER] Navegando a {}", path);
    set_route(Route::from_location(&path, &search));
}

/// Re-render completo de la app
pub fn rerender_app() {
    APP.with(|app_cell| {
        if let Some(ref mut app) = *app_cell.borrow_mut() {
            if let Err(e) = app.render() {
                log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
            }
        } else {
            log::warn!("⚠️ [RERENDER] App no está inicializada");
        }
    });
}

/// Re-render llamable desde JavaScript
#[wasm_bindgen]
pub fn rerender_app_wasm() {
    rerender_app();
}
