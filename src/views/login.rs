// ============================================================================
// LOGIN VIEW - Correo + contraseña, con recuperación por correo
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{input_value_by_id, ElementBuilder};
use crate::state::app_state::AppState;
use crate::utils::browser::alert;
use crate::utils::DASHBOARD_PATH;
use crate::viewmodels::auth_viewmodel::{LOGIN_ERROR, RECOVER_ERROR};
use crate::views::shared::{button, field, submit_button, text_input};

const CORREO_ID: &str = "login-correo";
const PASSWORD_ID: &str = "login-password";
const SUBMIT_LABEL: &str = "Ingresar";
const PENDING_LABEL: &str = "Ingresando...";

/// Botón de submit en estado "enviando" sin re-renderizar (conserva los inputs)
fn set_busy(button: &Element, busy: bool) {
    button.set_text_content(Some(if busy { PENDING_LABEL } else { SUBMIT_LABEL }));
    let result = if busy {
        button.set_attribute("disabled", "")
    } else {
        button.remove_attribute("disabled")
    };
    if let Err(e) = result {
        log::warn!("⚠️ [LOGIN] No se pudo actualizar el botón: {:?}", e);
    }
}

/// Renderizar vista de login
pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    log::debug!("🎬 [LOGIN] render_login()");

    let pending = state.is_login_pending();
    let submit = submit_button(if pending { PENDING_LABEL } else { SUBMIT_LABEL }, pending)?;

    let recover = {
        let auth = state.auth.clone();
        button("¿Olvidaste tu contraseña?", "btn btn-link", move |_| {
            let auth = auth.clone();
            let correo = input_value_by_id(CORREO_ID);
            spawn_local(async move {
                match auth.request_password_reset(&correo).await {
                    Ok(message) => alert(&message),
                    Err(e) => {
                        log::warn!("⚠️ [RECUPERAR] {}", e);
                        alert(&e.user_message(RECOVER_ERROR));
                    }
                }
            });
        })?
    };

    let on_submit = {
        let state = state.clone();
        let submit = submit.clone();
        move |_| {
            if state.is_login_pending() {
                return;
            }
            let correo = input_value_by_id(CORREO_ID);
            let password = input_value_by_id(PASSWORD_ID);
            let state = state.clone();
            let submit = submit.clone();

            state.set_login_pending(true);
            set_busy(&submit, true);
            spawn_local(async move {
                let result = state.auth.login(&correo, &password).await;
                state.set_login_pending(false);
                match result {
                    Ok(()) => crate::navigate(DASHBOARD_PATH),
                    Err(e) => {
                        set_busy(&submit, false);
                        alert(&e.user_message(LOGIN_ERROR));
                    }
                }
            });
        }
    };

    let form = ElementBuilder::new("form")?
        .class("login-form")
        .child(field("Correo", text_input(CORREO_ID, "email", "", |_| {})?)?)?
        .child(field("Contraseña", text_input(PASSWORD_ID, "password", "", |_| {})?)?)?
        .child(submit)?
        .child(recover)?
        .on_submit(on_submit)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("login-screen")
        .child(
            ElementBuilder::new("div")?
                .class("login-container")
                .child(ElementBuilder::new("h1")?.text("Interfaz RRHH").build())?
                .child(ElementBuilder::new("h2")?.text("Iniciar sesión").build())?
                .child(form)?
                .build(),
        )?
        .build())
}
