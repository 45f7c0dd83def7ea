// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// Los listeners de elementos se liberan junto con el elemento al re-renderizar
// (set_inner_html("")), por eso closure.forget() es seguro aquí. Los listeners
// globales (window) se registran una sola vez al arrancar.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, MouseEvent};

use crate::dom::input_value;

fn listen<E, F>(target: &EventTarget, event_type: &str, handler: F) -> Result<(), JsValue>
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Helper para crear click handler simple
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    listen(element, "click", handler)
}

/// Input handler que recibe el valor actual del campo
pub fn on_input<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(String) + 'static,
{
    let source = element.clone();
    listen(element, "input", move |_: Event| handler(input_value(&source)))
}

/// Change handler (selects y fechas)
pub fn on_change<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(String) + 'static,
{
    let source = element.clone();
    listen(element, "change", move |_: Event| handler(input_value(&source)))
}

/// Submit de formulario sin recargar la página
pub fn on_submit<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    listen(element, "submit", move |event: Event| {
        event.prevent_default();
        handler(event)
    })
}

/// Listener global en window (solo una vez al inicio)
pub fn on_window<F>(event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let window = crate::dom::window().ok_or_else(|| JsValue::from_str("No window"))?;
    listen(&window, event_type, handler)
}
