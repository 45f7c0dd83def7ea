pub mod auth;
pub mod employee;
pub mod contract;
pub mod validation;

pub use auth::{ChangePasswordRequest, LoginRequest, LoginResponse, MessageResponse, RecoverRequest};
pub use employee::{Employee, EmployeeDraft, EmployeePayload, EmployeeSearchResponse, EmployeeStatus, Gender};
pub use contract::{Contract, ContractDraft, ContractPayload, EmployeeRef, EmployeeSummary};
pub use validation::ValidationError;

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Registro gestionado por una pantalla CRUD (empleados, contratos).
///
/// Describe el esquema del formulario (`Draft`), el cuerpo validado que se envía
/// al API (`Payload`) y los textos propios de la entidad.
pub trait Entity: Clone + fmt::Debug + DeserializeOwned + 'static {
    /// Valores del formulario tal como los escribe el usuario
    type Draft: Clone + Default + fmt::Debug + PartialEq;
    /// Cuerpo tipado para POST/PUT
    type Payload: Clone + fmt::Debug + PartialEq + Serialize;

    /// Nombre de la colección para logs ("empleados")
    const LABEL: &'static str;
    /// Mensaje genérico cuando el servidor no devuelve uno
    const SAVE_ERROR: &'static str;
    /// Mensaje genérico al fallar la carga de la lista
    const LOAD_ERROR: &'static str;
    const DELETE_ERROR: &'static str;
    /// Pregunta de confirmación antes de eliminar
    const DELETE_PROMPT: &'static str;

    fn id(&self) -> &str;

    /// Copia los campos del registro en un borrador de edición
    fn to_draft(&self) -> Self::Draft;

    /// Valida el borrador y lo convierte en payload
    fn validate(draft: &Self::Draft) -> Result<Self::Payload, ValidationError>;
}

fn json_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

/// Texto que el backend puede enviar como string, número o null
pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(_) => String::new(),
    })
}

/// Entero no negativo como 30, 30.0 o "30"; cualquier otra cosa es None
pub(crate) fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(json_number)
        .filter(|n| *n >= 0.0 && *n <= f64::from(u32::MAX))
        .map(|n| n as u32))
}

/// Número como 1000, 1000.5 o "1000"; 0 si no se puede leer
pub(crate) fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(json_number).unwrap_or_default())
}

/// Valor opcional; "", null o una forma desconocida quedan en None
pub(crate) fn unknown_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.trim().is_empty() => None,
        Some(other) => serde_json::from_value(other).ok(),
    })
}

/// Enum con valor por defecto cuando llega vacío o desconocido
pub(crate) fn unknown_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(unknown_as_none(deserializer)?.unwrap_or_default())
}
