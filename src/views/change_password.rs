// ============================================================================
// CHANGE PASSWORD VIEW - /cambiar-password?token=...
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{get_element_by_id, input_value_by_id, ElementBuilder};
use crate::state::app_state::AppState;
use crate::utils::{CHANGE_PASSWORD_REDIRECT_MS, LOGIN_PATH};
use crate::viewmodels::auth_viewmodel::{AuthError, CHANGE_PASSWORD_ERROR};
use crate::views::shared::{field, submit_button, text_input};

const NUEVA_ID: &str = "nueva-password";
const CONFIRMAR_ID: &str = "confirmar-password";
const MESSAGE_ID: &str = "change-password-message";

fn show_message(text: &str) {
    if let Some(el) = get_element_by_id(MESSAGE_ID) {
        el.set_text_content(Some(text));
    }
}

pub fn render_change_password(state: &AppState, reset_token: Option<&str>) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?
        .class("login-container")
        .child(ElementBuilder::new("h2")?.text("Cambiar contraseña").build())?;

    let Some(token) = reset_token else {
        log::warn!("⚠️ [PASSWORD] Enlace sin token");
        let content = container
            .child(ElementBuilder::new("p")?.class("form-error").text(&AuthError::InvalidResetToken.to_string()).build())?
            .build();
        return Ok(ElementBuilder::new("div")?.class("login-screen").child(content)?.build());
    };

    let on_submit = {
        let auth = state.auth.clone();
        let token = token.to_string();
        move |_| {
            let auth = auth.clone();
            let token = token.clone();
            let nueva = input_value_by_id(NUEVA_ID);
            let confirmar = input_value_by_id(CONFIRMAR_ID);
            spawn_local(async move {
                match auth.change_password(Some(&token), &nueva, &confirmar).await {
                    Ok(message) => {
                        show_message(&message);
                        Timeout::new(CHANGE_PASSWORD_REDIRECT_MS, || crate::navigate(LOGIN_PATH)).forget();
                    }
                    Err(e) => show_message(&e.user_message(CHANGE_PASSWORD_ERROR)),
                }
            });
        }
    };

    let form = ElementBuilder::new("form")?
        .class("login-form")
        .child(field("Nueva contraseña", text_input(NUEVA_ID, "password", "", |_| {})?)?)?
        .child(field("Confirmar contraseña", text_input(CONFIRMAR_ID, "password", "", |_| {})?)?)?
        .child(submit_button("Cambiar contraseña", false)?)?
        .on_submit(on_submit)?
        .build();

    let content = container
        .child(form)?
        .child(ElementBuilder::new("p")?.id(MESSAGE_ID)?.class("form-message").build())?
        .build();

    Ok(ElementBuilder::new("div")?.class("login-screen").child(content)?.build())
}
