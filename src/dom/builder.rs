// ============================================================================
// ELEMENT BUILDER - Builder pattern para crear elementos fácilmente
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, MouseEvent};

use crate::dom::{append_child, create_element, on_change, on_click, on_input, on_submit, set_input_value};

pub struct ElementBuilder {
    element: Element,
}

impl ElementBuilder {
    /// Crear nuevo builder para un elemento
    pub fn new(tag: &str) -> Result<Self, JsValue> {
        Ok(Self {
            element: create_element(tag)?,
        })
    }

    /// Establecer class name (reemplaza todas las clases)
    pub fn class(self, class: &str) -> Self {
        self.element.set_class_name(class);
        self
    }

    /// Establecer ID
    pub fn id(self, id: &str) -> Result<Self, JsValue> {
        self.attr("id", id)
    }

    /// Establecer text content
    pub fn text(self, text: &str) -> Self {
        self.element.set_text_content(Some(text));
        self
    }

    /// Establecer atributo
    pub fn attr(self, name: &str, value: &str) -> Result<Self, JsValue> {
        self.element.set_attribute(name, value)?;
        Ok(self)
    }

    /// Atributo booleano (disabled, required, selected)
    pub fn flag(self, name: &str, on: bool) -> Result<Self, JsValue> {
        if on {
            self.element.set_attribute(name, "")?;
        }
        Ok(self)
    }

    /// Valor inicial de un input/select (después de agregar las opciones)
    pub fn value(self, value: &str) -> Self {
        set_input_value(&self.element, value);
        self
    }

    /// Agregar hijo
    pub fn child(self, child: Element) -> Result<Self, JsValue> {
        append_child(&self.element, &child)?;
        Ok(self)
    }

    /// Agregar varios hijos
    pub fn children<I: IntoIterator<Item = Element>>(self, children: I) -> Result<Self, JsValue> {
        for child in children {
            append_child(&self.element, &child)?;
        }
        Ok(self)
    }

    pub fn on_click<F: FnMut(MouseEvent) + 'static>(self, handler: F) -> Result<Self, JsValue> {
        on_click(&self.element, handler)?;
        Ok(self)
    }

    pub fn on_input<F: FnMut(String) + 'static>(self, handler: F) -> Result<Self, JsValue> {
        on_input(&self.element, handler)?;
        Ok(self)
    }

    pub fn on_change<F: FnMut(String) + 'static>(self, handler: F) -> Result<Self, JsValue> {
        on_change(&self.element, handler)?;
        Ok(self)
    }

    pub fn on_submit<F: FnMut(Event) + 'static>(self, handler: F) -> Result<Self, JsValue> {
        on_submit(&self.element, handler)?;
        Ok(self)
    }

    /// Construir y retornar elemento
    pub fn build(self) -> Element {
        self.element
    }
}
