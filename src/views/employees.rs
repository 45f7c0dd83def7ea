// ============================================================================
// EMPLOYEES VIEW - Formulario, búsqueda, tabla y exportación de empleados
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::models::{Employee, EmployeeDraft, EmployeeStatus, Entity, Gender};
use crate::services::ApiClient;
use crate::state::app_state::AppState;
use crate::utils::browser::{alert, confirm};
use crate::viewmodels::RecordListController;
use crate::views::shared::{
    button, export_buttons, field, row_actions, select_input, submit_button, table, table_row, text_input,
};

type EmployeeList = RecordListController<Employee, ApiClient>;

/// Input de texto ligado a un campo del borrador
fn draft_input(
    controller: &EmployeeList,
    id: &str,
    input_type: &str,
    value: &str,
    apply: fn(&mut EmployeeDraft, String),
) -> Result<Element, JsValue> {
    let controller = controller.clone();
    text_input(id, input_type, value, move |v| controller.update_draft(|d| apply(d, v)))
}

fn render_form(controller: &EmployeeList) -> Result<Element, JsValue> {
    let draft = controller.draft();
    let editing = controller.is_editing();

    let gender_options: Vec<(String, String)> = std::iter::once((String::new(), "Seleccione".to_string()))
        .chain(Gender::ALL.iter().map(|g| (g.as_str().to_string(), g.as_str().to_string())))
        .collect();
    let status_options: Vec<(String, String)> = EmployeeStatus::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect();

    let genero = {
        let controller = controller.clone();
        select_input(
            "emp-genero",
            &gender_options,
            draft.genero.map(|g| g.as_str()).unwrap_or(""),
            move |v| controller.update_draft(|d| d.genero = Gender::parse(&v)),
        )?
    };
    let estado = {
        let controller = controller.clone();
        select_input("emp-estado", &status_options, draft.estado.as_str(), move |v| {
            controller.update_draft(|d| d.estado = EmployeeStatus::parse(&v).unwrap_or_default())
        })?
    };

    let on_submit = {
        let controller = controller.clone();
        move |_| {
            let controller = controller.clone();
            spawn_local(async move {
                if let Err(e) = controller.submit().await {
                    alert(&e.user_message(Employee::SAVE_ERROR));
                }
            });
        }
    };

    let mut form = ElementBuilder::new("form")?
        .class("record-form")
        .child(ElementBuilder::new("h3")?.text(if editing { "Editar empleado" } else { "Crear empleado" }).build())?
        .child(field("Documento", draft_input(controller, "emp-documento", "text", &draft.nro_documento, |d, v| d.nro_documento = v)?)?)?
        .child(field("Nombre", draft_input(controller, "emp-nombre", "text", &draft.nombre, |d, v| d.nombre = v)?)?)?
        .child(field("Apellido", draft_input(controller, "emp-apellido", "text", &draft.apellido, |d, v| d.apellido = v)?)?)?
        .child(field("Edad", draft_input(controller, "emp-edad", "number", &draft.edad, |d, v| d.edad = v)?)?)?
        .child(field("Género", genero)?)?
        .child(field("Cargo", draft_input(controller, "emp-cargo", "text", &draft.cargo, |d, v| d.cargo = v)?)?)?
        .child(field("Estado", estado)?)?
        .child(field("Correo", draft_input(controller, "emp-correo", "email", &draft.correo, |d, v| d.correo = v)?)?)?
        .child(field("Contraseña", draft_input(controller, "emp-password", "text", &draft.password, |d, v| d.password = v)?)?)?
        .child(submit_button(if editing { "Actualizar" } else { "Crear" }, false)?)?;

    if editing {
        let controller = controller.clone();
        form = form.child(button("Cancelar", "btn btn-secondary", move |_| controller.cancel_edit())?)?;
    }

    Ok(form.on_submit(on_submit)?.build())
}

fn render_search(state: &AppState) -> Result<Element, JsValue> {
    let query_input = {
        let query = state.search_query.clone();
        text_input("employee-search", "search", &state.search_query.borrow(), move |v| *query.borrow_mut() = v)?
    };
    query_input.set_attribute("placeholder", "Nombre o documento")?;

    let search_button = {
        let search = state.search.clone();
        let query = state.search_query.clone();
        button("Buscar", "btn btn-secondary", move |_| {
            let search = search.clone();
            let query = query.borrow().clone();
            spawn_local(async move {
                alert(&search.run(&query).await);
            });
        })?
    };

    Ok(ElementBuilder::new("div")?
        .class("search-bar")
        .child(query_input)?
        .child(search_button)?
        .build())
}

fn render_table(controller: &EmployeeList) -> Result<Element, JsValue> {
    let mut rows = Vec::new();
    for employee in controller.records() {
        let on_edit = {
            let controller = controller.clone();
            let employee = employee.clone();
            move |_| controller.begin_edit(&employee)
        };
        let on_delete = {
            let controller = controller.clone();
            let id = employee.id.clone();
            move |_| {
                let controller = controller.clone();
                let id = id.clone();
                spawn_local(async move {
                    if let Err(e) = controller.remove(&id, confirm).await {
                        log::error!("❌ [EMPLEADOS] Error al eliminar {}: {}", id, e);
                        alert(&e.user_message(Employee::DELETE_ERROR));
                    }
                });
            }
        };

        let cells = [
            employee.nro_documento.clone(),
            employee.full_name(),
            employee.edad.map(|e| e.to_string()).unwrap_or_default(),
            employee.genero.map(|g| g.to_string()).unwrap_or_default(),
            employee.cargo.clone(),
            employee.estado.label().to_string(),
            employee.correo.clone(),
            employee.password.clone(),
        ];
        rows.push(table_row(&cells, row_actions(on_edit, on_delete)?)?);
    }

    table(
        &["Documento", "Nombre", "Edad", "Género", "Cargo", "Estado", "Correo", "Contraseña", "Acciones"],
        rows,
    )
}

pub fn render_employees(state: &AppState) -> Result<Element, JsValue> {
    let controller = &state.employees;
    let exports = {
        let controller = controller.clone();
        export_buttons(move || controller.records())?
    };

    Ok(ElementBuilder::new("section")?
        .class("record-screen")
        .child(render_form(controller)?)?
        .child(render_search(state)?)?
        .child(exports)?
        .child(render_table(controller)?)?
        .build())
}
