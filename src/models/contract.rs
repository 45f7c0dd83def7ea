use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::validation::{required, ValidationError};
use super::{lenient_number, unknown_as_none, Entity};
use crate::utils::dates::{date_input_value, parse_api_date};

/// Empleado embebido en un contrato (populate del backend)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct EmployeeSummary {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub apellido: String,
}

/// `empleado_id` llega como objeto en lectura y como id en escritura
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(untagged)]
pub enum EmployeeRef {
    Populated(EmployeeSummary),
    Id(String),
}

impl EmployeeRef {
    pub fn id(&self) -> &str {
        match self {
            EmployeeRef::Populated(summary) => &summary.id,
            EmployeeRef::Id(id) => id,
        }
    }

    /// Solo disponible cuando el backend hizo el join
    pub fn nombre(&self) -> Option<&str> {
        match self {
            EmployeeRef::Populated(summary) if !summary.nombre.is_empty() => Some(&summary.nombre),
            _ => None,
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Contract {
    #[serde(rename = "_id")]
    pub id: String,
    // null cuando el empleado ya no existe
    #[serde(default, deserialize_with = "unknown_as_none")]
    pub empleado_id: Option<EmployeeRef>,
    #[serde(default)]
    pub fecha_inicio: String,
    #[serde(default)]
    pub fecha_fin: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub valor: f64,
    #[serde(default)]
    pub cargo: Option<String>,
}

impl Contract {
    pub fn employee_name(&self) -> Option<&str> {
        self.empleado_id.as_ref().and_then(EmployeeRef::nombre)
    }

    pub fn cargo(&self) -> Option<&str> {
        self.cargo.as_deref().filter(|c| !c.trim().is_empty())
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct ContractDraft {
    pub empleado_id: String,
    pub fecha_inicio: String,
    pub fecha_fin: String,
    pub valor: String,
    pub cargo: String,
}

/// Cuerpo de POST/PUT /api/contratos
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ContractPayload {
    pub empleado_id: String,
    pub fecha_inicio: NaiveDate,
    pub fecha_fin: NaiveDate,
    pub valor: f64,
    pub cargo: String,
}

impl ContractPayload {
    /// fecha_fin anterior a fecha_inicio (no se bloquea, solo se reporta)
    pub fn has_inverted_dates(&self) -> bool {
        self.fecha_fin < self.fecha_inicio
    }
}

fn required_date(field: &'static str, value: &str) -> Result<NaiveDate, ValidationError> {
    let value = required(field, value)?;
    parse_api_date(value).ok_or_else(|| ValidationError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

fn required_number(field: &'static str, value: &str) -> Result<f64, ValidationError> {
    let value = required(field, value)?;
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ValidationError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

impl Entity for Contract {
    type Draft = ContractDraft;
    type Payload = ContractPayload;

    const LABEL: &'static str = "contratos";
    const SAVE_ERROR: &'static str = "Error al guardar el contrato.";
    const LOAD_ERROR: &'static str = "Error al obtener los contratos.";
    const DELETE_ERROR: &'static str = "Error al eliminar el contrato.";
    const DELETE_PROMPT: &'static str = "¿Eliminar contrato?";

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> ContractDraft {
        ContractDraft {
            empleado_id: self
                .empleado_id
                .as_ref()
                .map(|e| e.id().to_string())
                .unwrap_or_default(),
            fecha_inicio: date_input_value(&self.fecha_inicio),
            fecha_fin: date_input_value(&self.fecha_fin),
            valor: self.valor.to_string(),
            cargo: self.cargo.clone().unwrap_or_default(),
        }
    }

    fn validate(draft: &ContractDraft) -> Result<ContractPayload, ValidationError> {
        let payload = ContractPayload {
            empleado_id: required("empleado_id", &draft.empleado_id)?.to_string(),
            cargo: required("cargo", &draft.cargo)?.to_string(),
            fecha_inicio: required_date("fecha_inicio", &draft.fecha_inicio)?,
            fecha_fin: required_date("fecha_fin", &draft.fecha_fin)?,
            valor: required_number("valor", &draft.valor)?,
        };

        if payload.has_inverted_dates() {
            log::warn!(
                "⚠️ [CONTRATOS] fecha_fin {} es anterior a fecha_inicio {}",
                payload.fecha_fin,
                payload.fecha_inicio
            );
        }

        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ContractDraft {
        ContractDraft {
            empleado_id: "e1".into(),
            fecha_inicio: "2024-01-01".into(),
            fecha_fin: "2024-12-31".into(),
            valor: "1000".into(),
            cargo: "Dev".into(),
        }
    }

    #[test]
    fn test_deserialize_populated_and_plain_ref() {
        let raw = r#"[
            {"_id":"c1","empleado_id":{"_id":"e1","nombre":"Ana","apellido":"Pérez"},
             "fecha_inicio":"2024-01-01T00:00:00.000Z","fecha_fin":"2024-12-31T00:00:00.000Z","valor":1000,"cargo":"Dev"},
            {"_id":"c2","empleado_id":"e2","fecha_inicio":"2024-02-01","fecha_fin":"2024-03-01","valor":250.5},
            {"_id":"c3","empleado_id":null,"fecha_inicio":"2024-02-01","fecha_fin":"2024-03-01","valor":1}
        ]"#;
        let contracts: Vec<Contract> = serde_json::from_str(raw).unwrap();
        assert_eq!(contracts[0].employee_name(), Some("Ana"));
        assert_eq!(contracts[0].empleado_id.as_ref().map(|e| e.id()), Some("e1"));
        assert_eq!(contracts[1].employee_name(), None);
        assert_eq!(contracts[1].empleado_id, Some(EmployeeRef::Id("e2".into())));
        assert_eq!(contracts[1].cargo(), None);
        assert_eq!(contracts[2].empleado_id, None);
    }

    #[test]
    fn test_valor_as_string_keeps_the_list() {
        let raw = r#"[
            {"_id":"c1","empleado_id":"e1","fecha_inicio":"2024-01-01","fecha_fin":"2024-02-01","valor":"1000"},
            {"_id":"c2","empleado_id":42,"fecha_inicio":"2024-01-01","fecha_fin":"2024-02-01","valor":"n/a"}
        ]"#;
        let contracts: Vec<Contract> = serde_json::from_str(raw).unwrap();
        assert_eq!(contracts.len(), 2);
        assert_eq!(contracts[0].valor, 1000.0);
        assert_eq!(contracts[1].valor, 0.0);
        assert_eq!(contracts[1].empleado_id, None);
    }

    #[test]
    fn test_to_draft_slices_dates() {
        let contract: Contract = serde_json::from_str(
            r#"{"_id":"c1","empleado_id":{"_id":"e1","nombre":"Ana"},"fecha_inicio":"2024-01-01T00:00:00.000Z",
                "fecha_fin":"2024-12-31T00:00:00.000Z","valor":1000,"cargo":"Dev"}"#,
        )
        .unwrap();
        assert_eq!(contract.to_draft(), draft());
    }

    #[test]
    fn test_validate_required_fields() {
        assert!(Contract::validate(&draft()).is_ok());
        assert_eq!(
            Contract::validate(&ContractDraft { empleado_id: "".into(), ..draft() }),
            Err(ValidationError::MissingField("empleado_id"))
        );
        assert_eq!(
            Contract::validate(&ContractDraft { cargo: "  ".into(), ..draft() }),
            Err(ValidationError::MissingField("cargo"))
        );
        assert!(matches!(
            Contract::validate(&ContractDraft { fecha_fin: "31/12/2024".into(), ..draft() }),
            Err(ValidationError::InvalidDate { field: "fecha_fin", .. })
        ));
        assert!(matches!(
            Contract::validate(&ContractDraft { valor: "mil".into(), ..draft() }),
            Err(ValidationError::InvalidNumber { field: "valor", .. })
        ));
    }

    #[test]
    fn test_inverted_dates_are_accepted() {
        let inverted = ContractDraft {
            fecha_inicio: "2024-12-31".into(),
            fecha_fin: "2024-01-01".into(),
            ..draft()
        };
        let payload = Contract::validate(&inverted).unwrap();
        assert!(payload.has_inverted_dates());
    }

    #[test]
    fn test_payload_wire_format() {
        let payload = Contract::validate(&draft()).unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["fecha_inicio"], "2024-01-01");
        assert_eq!(json["empleado_id"], "e1");
        assert_eq!(json["valor"], 1000.0);
    }
}
