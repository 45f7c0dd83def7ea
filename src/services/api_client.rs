// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Una función por endpoint del backend RRHH. Sin reintentos, sin timeout,
// sin caché: cada llamada se espera desde la acción de la pantalla.
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::config::CONFIG;
use crate::models::{
    ChangePasswordRequest, Contract, ContractPayload, Employee, EmployeePayload,
    EmployeeSearchResponse, LoginRequest, LoginResponse, MessageResponse, RecoverRequest,
};
use crate::services::error::ApiError;

const LOGIN_PATH: &str = "/api/auth/login";
const RECOVER_PATH: &str = "/api/auth/recuperar";
const CHANGE_PASSWORD_PATH: &str = "/api/auth/cambiar-password";
const EMPLOYEES_PATH: &str = "/api/empleados";
const CONTRACTS_PATH: &str = "/api/contratos";

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.api_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn record_url(&self, collection: &str, id: &str) -> String {
        format!("{}{}/{}", self.base_url, collection, urlencoding::encode(id))
    }

    fn search_url(&self, query: &str) -> String {
        format!(
            "{}{}/buscar?q={}",
            self.base_url,
            EMPLOYEES_PATH,
            urlencoding::encode(query.trim())
        )
    }

    // ------------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------------

    /// Login; una respuesta sin token significa credenciales rechazadas
    pub async fn login(&self, correo: &str, password: &str) -> Result<LoginResponse, ApiError> {
        log::info!("🔐 [API] Login para: {}", correo);
        let body = LoginRequest {
            correo: correo.to_string(),
            password: password.to_string(),
        };
        send_json(Request::post(&self.url(LOGIN_PATH)).json(&body)).await
    }

    /// Envía el correo de recuperación de contraseña
    pub async fn request_password_reset(&self, correo: &str) -> Result<MessageResponse, ApiError> {
        log::info!("📧 [API] Recuperación de contraseña para: {}", correo);
        let body = RecoverRequest {
            correo: correo.to_string(),
        };
        send_json(Request::post(&self.url(RECOVER_PATH)).json(&body)).await
    }

    /// Cambia la contraseña con el token del enlace de recuperación
    pub async fn change_password(&self, token: &str, nueva_password: &str) -> Result<MessageResponse, ApiError> {
        log::info!("🔑 [API] Cambio de contraseña");
        let body = ChangePasswordRequest {
            token: token.to_string(),
            nueva_password: nueva_password.to_string(),
        };
        send_json(Request::post(&self.url(CHANGE_PASSWORD_PATH)).json(&body)).await
    }

    // ------------------------------------------------------------------------
    // Empleados
    // ------------------------------------------------------------------------

    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        send_json(Request::get(&self.url(EMPLOYEES_PATH)).build()).await
    }

    pub async fn create_employee(&self, payload: &EmployeePayload) -> Result<serde_json::Value, ApiError> {
        log::info!("📝 [API] Creando empleado: {}", payload.nro_documento);
        send_lenient(Request::post(&self.url(EMPLOYEES_PATH)).json(payload)).await
    }

    pub async fn update_employee(&self, id: &str, payload: &EmployeePayload) -> Result<serde_json::Value, ApiError> {
        log::info!("📝 [API] Actualizando empleado: {}", id);
        send_lenient(Request::put(&self.record_url(EMPLOYEES_PATH, id)).json(payload)).await
    }

    /// El backend elimina también los contratos del empleado
    pub async fn delete_employee(&self, id: &str) -> Result<serde_json::Value, ApiError> {
        log::info!("🗑️ [API] Eliminando empleado: {}", id);
        send_lenient(Request::delete(&self.record_url(EMPLOYEES_PATH, id)).build()).await
    }

    pub async fn search_employee(&self, query: &str) -> Result<EmployeeSearchResponse, ApiError> {
        log::info!("🔍 [API] Buscando empleado: {}", query);
        send_json(Request::get(&self.search_url(query)).build()).await
    }

    // ------------------------------------------------------------------------
    // Contratos
    // ------------------------------------------------------------------------

    pub async fn list_contracts(&self) -> Result<Vec<Contract>, ApiError> {
        send_json(Request::get(&self.url(CONTRACTS_PATH)).build()).await
    }

    pub async fn create_contract(&self, payload: &ContractPayload) -> Result<serde_json::Value, ApiError> {
        log::info!("📝 [API] Creando contrato para empleado: {}", payload.empleado_id);
        send_lenient(Request::post(&self.url(CONTRACTS_PATH)).json(payload)).await
    }

    pub async fn update_contract(&self, id: &str, payload: &ContractPayload) -> Result<serde_json::Value, ApiError> {
        log::info!("📝 [API] Actualizando contrato: {}", id);
        send_lenient(Request::put(&self.record_url(CONTRACTS_PATH, id)).json(payload)).await
    }

    pub async fn delete_contract(&self, id: &str) -> Result<serde_json::Value, ApiError> {
        log::info!("🗑️ [API] Eliminando contrato: {}", id);
        send_lenient(Request::delete(&self.record_url(CONTRACTS_PATH, id)).build()).await
    }
}

/// Envía la petición; cualquier status fuera de 2xx es un ApiError::Http
async fn send(request: Result<Request, gloo_net::Error>) -> Result<Response, ApiError> {
    let request = request.map_err(|e| ApiError::Serialize(e.to_string()))?;
    let url = request.url();
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let error = ApiError::from_status(status, &body);
    log::error!("❌ [API] {} -> {}", url, error);
    Err(error)
}

async fn send_json<T: DeserializeOwned>(request: Result<Request, gloo_net::Error>) -> Result<T, ApiError> {
    let response = send(request).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Para mutaciones: el cuerpo puede venir vacío o no ser JSON
async fn send_lenient(request: Result<Request, gloo_net::Error>) -> Result<serde_json::Value, ApiError> {
    let response = send(request).await?;
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(parse_lenient_body(&text))
}

fn parse_lenient_body(text: &str) -> serde_json::Value {
    if text.trim().is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| serde_json::Value::String(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_urls() {
        let api = ApiClient::with_base_url("https://rrhh.example.com/");
        assert_eq!(api.base_url(), "https://rrhh.example.com");
        assert_eq!(api.url(EMPLOYEES_PATH), "https://rrhh.example.com/api/empleados");
        assert_eq!(
            api.record_url(CONTRACTS_PATH, "65f0c1"),
            "https://rrhh.example.com/api/contratos/65f0c1"
        );
    }

    #[test]
    fn test_search_url_is_encoded() {
        let api = ApiClient::with_base_url("http://localhost:4000");
        assert_eq!(
            api.search_url("  Ana Pérez "),
            "http://localhost:4000/api/empleados/buscar?q=Ana%20P%C3%A9rez"
        );
        assert_eq!(api.search_url("10&20"), "http://localhost:4000/api/empleados/buscar?q=10%2620");
    }

    #[test]
    fn test_parse_lenient_body() {
        assert_eq!(parse_lenient_body(""), serde_json::Value::Null);
        assert_eq!(parse_lenient_body(r#"{"message":"ok"}"#), json!({"message": "ok"}));
        assert_eq!(parse_lenient_body("Eliminado"), json!("Eliminado"));
    }
}
