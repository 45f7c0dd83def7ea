// ============================================================================
// SHARED FORM - Piezas reutilizadas por las pantallas CRUD y de auth
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::export::{download_pdf, download_sheet, Exportable};

/// `<label>` con texto y el control dentro
pub fn field(label: &str, control: Element) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("label")?
        .class("form-field")
        .child(ElementBuilder::new("span")?.text(label).build())?
        .child(control)?
        .build())
}

/// `<input>` cuyo valor se reporta en cada tecla
pub fn text_input<F>(id: &str, input_type: &str, value: &str, on_input: F) -> Result<Element, JsValue>
where
    F: FnMut(String) + 'static,
{
    Ok(ElementBuilder::new("input")?
        .id(id)?
        .attr("type", input_type)?
        .attr("name", id)?
        .value(value)
        .on_input(on_input)?
        .build())
}

/// `<select>` con (valor, texto); "" = opción vacía
pub fn select_input<F>(
    id: &str,
    options: &[(String, String)],
    selected: &str,
    on_change: F,
) -> Result<Element, JsValue>
where
    F: FnMut(String) + 'static,
{
    let mut select = ElementBuilder::new("select")?.id(id)?.attr("name", id)?;
    for (value, text) in options {
        select = select.child(ElementBuilder::new("option")?.attr("value", value)?.text(text).build())?;
    }
    Ok(select.value(selected).on_change(on_change)?.build())
}

pub fn button<F>(text: &str, class: &str, on_click: F) -> Result<Element, JsValue>
where
    F: FnMut(web_sys::MouseEvent) + 'static,
{
    Ok(ElementBuilder::new("button")?
        .attr("type", "button")?
        .class(class)
        .text(text)
        .on_click(on_click)?
        .build())
}

pub fn submit_button(text: &str, disabled: bool) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn btn-primary")
        .flag("disabled", disabled)?
        .text(text)
        .build())
}

/// Tabla con encabezados y filas ya construidas
pub fn table(headers: &[&str], rows: Vec<Element>) -> Result<Element, JsValue> {
    let mut head_row = ElementBuilder::new("tr")?;
    for header in headers {
        head_row = head_row.child(ElementBuilder::new("th")?.text(header).build())?;
    }
    let thead = ElementBuilder::new("thead")?.child(head_row.build())?.build();
    let tbody = ElementBuilder::new("tbody")?.children(rows)?.build();

    Ok(ElementBuilder::new("table")?
        .class("record-table")
        .child(thead)?
        .child(tbody)?
        .build())
}

/// Fila de texto + celda de acciones
pub fn table_row(cells: &[String], actions: Element) -> Result<Element, JsValue> {
    let mut row = ElementBuilder::new("tr")?;
    for cell in cells {
        row = row.child(ElementBuilder::new("td")?.text(cell).build())?;
    }
    Ok(row.child(ElementBuilder::new("td")?.class("actions").child(actions)?.build())?.build())
}

/// Botones Editar / Eliminar de una fila
pub fn row_actions<E, D>(on_edit: E, on_delete: D) -> Result<Element, JsValue>
where
    E: FnMut(web_sys::MouseEvent) + 'static,
    D: FnMut(web_sys::MouseEvent) + 'static,
{
    Ok(ElementBuilder::new("div")?
        .class("row-actions")
        .child(button("Editar", "btn btn-small", on_edit)?)?
        .child(button("Eliminar", "btn btn-small btn-danger", on_delete)?)?
        .build())
}

/// Botones de exportación; la colección se lee en el momento del click
pub fn export_buttons<E, F>(records: F) -> Result<Element, JsValue>
where
    E: Exportable + 'static,
    F: Fn() -> Vec<E> + 'static,
{
    let records = Rc::new(records);
    let pdf_records = records.clone();

    Ok(ElementBuilder::new("div")?
        .class("export-actions")
        .child(button("Exportar PDF", "btn btn-secondary", move |_| {
            if let Err(e) = download_pdf(&pdf_records()) {
                log::error!("❌ [EXPORT] PDF: {:?}", e);
            }
        })?)?
        .child(button("Exportar Excel", "btn btn-secondary", move |_| {
            if let Err(e) = download_sheet(&records()) {
                log::error!("❌ [EXPORT] Hoja: {:?}", e);
            }
        })?)?
        .build())
}
