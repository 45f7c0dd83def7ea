use serde::{Deserialize, Serialize};
use std::fmt;

use super::validation::{is_blank_or_zero, parse_leading_int, ValidationError};
use super::{lenient_count, lenient_text, unknown_as_default, unknown_as_none, Entity};

pub const MIN_AGE: i64 = 18;
pub const MAX_AGE: i64 = 100;

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum Gender {
    Masculino,
    Femenino,
    Otro,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Masculino, Gender::Femenino, Gender::Otro];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Masculino => "Masculino",
            Gender::Femenino => "Femenino",
            Gender::Otro => "Otro",
        }
    }

    /// Valor de un <select>; "" = sin seleccionar
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_str() == value.trim())
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    #[default]
    Activo,
    Retirado,
}

impl EmployeeStatus {
    pub const ALL: [EmployeeStatus; 2] = [EmployeeStatus::Activo, EmployeeStatus::Retirado];

    /// Valor en el API ("activo")
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Activo => "activo",
            EmployeeStatus::Retirado => "retirado",
        }
    }

    /// Texto del <option> ("Activo")
    pub fn label(&self) -> &'static str {
        match self {
            EmployeeStatus::Activo => "Activo",
            EmployeeStatus::Retirado => "Retirado",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value.trim())
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Empleado tal como lo devuelve GET /api/empleados
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Employee {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub nro_documento: String,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub apellido: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub edad: Option<u32>,
    #[serde(default, deserialize_with = "unknown_as_none")]
    pub genero: Option<Gender>,
    #[serde(default)]
    pub cargo: String,
    #[serde(default, deserialize_with = "unknown_as_default")]
    pub estado: EmployeeStatus,
    #[serde(default)]
    pub correo: String,
    // Se muestra y reenvía en claro (ver DESIGN.md)
    #[serde(default)]
    pub password: String,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.nombre, self.apellido).trim().to_string()
    }
}

/// Formulario de empleado (valores crudos de los inputs)
#[derive(Clone, PartialEq, Debug, Default)]
pub struct EmployeeDraft {
    pub nro_documento: String,
    pub nombre: String,
    pub apellido: String,
    pub edad: String,
    pub genero: Option<Gender>,
    pub cargo: String,
    pub estado: EmployeeStatus,
    pub correo: String,
    pub password: String,
}

/// Cuerpo de POST/PUT /api/empleados
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct EmployeePayload {
    pub nro_documento: String,
    pub nombre: String,
    pub apellido: String,
    pub edad: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genero: Option<Gender>,
    pub cargo: String,
    pub estado: EmployeeStatus,
    pub correo: String,
    pub password: String,
}

impl EmployeeDraft {
    /// Todos los campos que escribe el usuario están vacíos o en cero
    /// (el estado siempre tiene valor por defecto y no cuenta)
    fn is_effectively_empty(&self) -> bool {
        let texts = [
            &self.nro_documento,
            &self.nombre,
            &self.apellido,
            &self.edad,
            &self.cargo,
            &self.correo,
            &self.password,
        ];
        texts.iter().all(|v| is_blank_or_zero(v)) && self.genero.is_none()
    }

    fn parse_age(&self) -> Result<u8, ValidationError> {
        parse_leading_int(&self.edad)
            .filter(|age| (MIN_AGE..=MAX_AGE).contains(age))
            .and_then(|age| u8::try_from(age).ok())
            .ok_or_else(|| ValidationError::AgeOutOfRange { raw: self.edad.clone() })
    }
}

impl Entity for Employee {
    type Draft = EmployeeDraft;
    type Payload = EmployeePayload;

    const LABEL: &'static str = "empleados";
    const SAVE_ERROR: &'static str = "⚠️ Error al guardar el empleado.";
    const LOAD_ERROR: &'static str = "Error al obtener los empleados.";
    const DELETE_ERROR: &'static str = "Error al eliminar el empleado.";
    const DELETE_PROMPT: &'static str = "¿Eliminar empleado y sus contratos?";

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> EmployeeDraft {
        EmployeeDraft {
            nro_documento: self.nro_documento.clone(),
            nombre: self.nombre.clone(),
            apellido: self.apellido.clone(),
            edad: self.edad.map(|e| e.to_string()).unwrap_or_default(),
            genero: self.genero,
            cargo: self.cargo.clone(),
            estado: self.estado,
            correo: self.correo.clone(),
            password: self.password.clone(),
        }
    }

    fn validate(draft: &EmployeeDraft) -> Result<EmployeePayload, ValidationError> {
        if draft.is_effectively_empty() {
            return Err(ValidationError::AllFieldsEmpty);
        }
        let edad = draft.parse_age()?;

        Ok(EmployeePayload {
            nro_documento: draft.nro_documento.trim().to_string(),
            nombre: draft.nombre.trim().to_string(),
            apellido: draft.apellido.trim().to_string(),
            edad,
            genero: draft.genero,
            cargo: draft.cargo.trim().to_string(),
            estado: draft.estado,
            correo: draft.correo.trim().to_string(),
            password: draft.password.clone(),
        })
    }
}

/// Respuesta de GET /api/empleados/buscar?q=
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct EmployeeSearchResponse {
    pub empleado: Employee,
    #[serde(default)]
    pub cantidad_contratos: u32,
}

impl EmployeeSearchResponse {
    /// Texto del aviso de resultado
    pub fn summary(&self) -> String {
        format!(
            "Empleado: {} {}\nContratos: {}",
            self.empleado.nombre, self.empleado.apellido, self.cantidad_contratos
        )
    }
}
