// ============================================================================
// CONTRACTS VIEW - Formulario, tabla y exportación de contratos
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::models::{Contract, ContractDraft, Employee, Entity};
use crate::services::ApiClient;
use crate::state::app_state::AppState;
use crate::utils::browser::{alert, confirm};
use crate::utils::dates::format_locale_date;
use crate::viewmodels::RecordListController;
use crate::views::shared::{
    button, export_buttons, field, row_actions, select_input, submit_button, table, table_row, text_input,
};

type ContractList = RecordListController<Contract, ApiClient>;

fn draft_input(
    controller: &ContractList,
    id: &str,
    input_type: &str,
    value: &str,
    apply: fn(&mut ContractDraft, String),
) -> Result<Element, JsValue> {
    let controller = controller.clone();
    text_input(id, input_type, value, move |v| controller.update_draft(|d| apply(d, v)))
}

fn render_form(controller: &ContractList, employees: &[Employee]) -> Result<Element, JsValue> {
    let draft = controller.draft();
    let editing = controller.is_editing();

    let employee_options: Vec<(String, String)> = std::iter::once((String::new(), "Selecciona un empleado".to_string()))
        .chain(employees.iter().map(|e| (e.id.clone(), e.full_name())))
        .collect();
    let empleado = {
        let controller = controller.clone();
        select_input("con-empleado", &employee_options, &draft.empleado_id, move |v| {
            controller.update_draft(|d| d.empleado_id = v)
        })?
    };

    let on_submit = {
        let controller = controller.clone();
        move |_| {
            let controller = controller.clone();
            spawn_local(async move {
                if let Err(e) = controller.submit().await {
                    alert(&e.user_message(Contract::SAVE_ERROR));
                }
            });
        }
    };

    let mut form = ElementBuilder::new("form")?
        .class("record-form")
        .child(ElementBuilder::new("h3")?.text(if editing { "Editar contrato" } else { "Crear contrato" }).build())?
        .child(field("Empleado", empleado)?)?
        .child(field("Cargo", draft_input(controller, "con-cargo", "text", &draft.cargo, |d, v| d.cargo = v)?)?)?
        .child(field("Fecha inicio", draft_input(controller, "con-inicio", "date", &draft.fecha_inicio, |d, v| d.fecha_inicio = v)?)?)?
        .child(field("Fecha fin", draft_input(controller, "con-fin", "date", &draft.fecha_fin, |d, v| d.fecha_fin = v)?)?)?
        .child(field("Valor", draft_input(controller, "con-valor", "number", &draft.valor, |d, v| d.valor = v)?)?)?
        .child(submit_button(if editing { "Actualizar" } else { "Crear" }, false)?)?;

    if editing {
        let controller = controller.clone();
        form = form.child(button("Cancelar", "btn btn-secondary", move |_| controller.cancel_edit())?)?;
    }

    Ok(form.on_submit(on_submit)?.build())
}

fn render_table(controller: &ContractList) -> Result<Element, JsValue> {
    let mut rows = Vec::new();
    for contract in controller.records() {
        let on_edit = {
            let controller = controller.clone();
            let contract = contract.clone();
            move |_| controller.begin_edit(&contract)
        };
        let on_delete = {
            let controller = controller.clone();
            let id = contract.id.clone();
            move |_| {
                let controller = controller.clone();
                let id = id.clone();
                spawn_local(async move {
                    if let Err(e) = controller.remove(&id, confirm).await {
                        log::error!("❌ [CONTRATOS] Error al eliminar {}: {}", id, e);
                        alert(&e.user_message(Contract::DELETE_ERROR));
                    }
                });
            }
        };

        let cells = [
            contract.employee_name().unwrap_or("N/A").to_string(),
            contract.cargo().unwrap_or("N/A").to_string(),
            format_locale_date(&contract.fecha_inicio),
            format_locale_date(&contract.fecha_fin),
            format!("${}", contract.valor),
        ];
        rows.push(table_row(&cells, row_actions(on_edit, on_delete)?)?);
    }

    table(&["Empleado", "Cargo", "Inicio", "Fin", "Valor", "Acciones"], rows)
}

pub fn render_contracts(state: &AppState) -> Result<Element, JsValue> {
    let controller = &state.contracts;
    let exports = {
        let controller = controller.clone();
        export_buttons(move || controller.records())?
    };

    Ok(ElementBuilder::new("section")?
        .class("record-screen")
        .child(render_form(controller, &state.employees.records())?)?
        .child(exports)?
        .child(render_table(controller)?)?
        .build())
}
