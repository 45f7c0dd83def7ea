// ============================================================================
// BROWSER - Diálogos, navegación y descargas (solo wasm32 en tiempo de ejecución)
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::dom::{create_element, document, window};

/// window.alert
pub fn alert(message: &str) {
    if let Some(win) = window() {
        if win.alert_with_message(message).is_err() {
            log::warn!("⚠️ [BROWSER] alert no disponible: {}", message);
        }
    }
}

/// window.confirm; sin ventana se considera rechazado
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// (pathname, search) de la URL actual
pub fn current_location() -> (String, String) {
    window()
        .map(|win| {
            let location = win.location();
            (
                location.pathname().unwrap_or_else(|_| "/".to_string()),
                location.search().unwrap_or_default(),
            )
        })
        .unwrap_or_else(|| ("/".to_string(), String::new()))
}

/// history.pushState sin recargar la página
pub fn push_history(path: &str) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("No window"))?;
    win.history()?.push_state_with_url(&JsValue::NULL, "", Some(path))
}

/// Ofrece `bytes` como descarga con el nombre dado
pub fn download_bytes(filename: &str, mime: &str, bytes: &[u8]) -> Result<(), JsValue> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array);

    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor = create_element("a")?.dyn_into::<HtmlAnchorElement>()?;
    anchor.set_href(&url);
    anchor.set_download(filename);

    let body = document()
        .and_then(|doc| doc.body())
        .ok_or_else(|| JsValue::from_str("No body"))?;
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Url::revoke_object_url(&url)?;

    log::info!("💾 [EXPORT] {} descargado ({} bytes)", filename, bytes.len());
    Ok(())
}
