use thiserror::Error;

use crate::models::MessageResponse;

/// Fallo de una llamada al API RRHH
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("sin detalle"))]
    Http { status: u16, message: Option<String> },

    #[error("Parse error: {0}")]
    Decode(String),

    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl ApiError {
    /// Construye el error HTTP a partir del cuerpo de la respuesta ({"message": ...} si existe)
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<MessageResponse>(body)
            .ok()
            .and_then(|m| m.message)
            .filter(|m| !m.trim().is_empty());
        ApiError::Http { status, message }
    }

    /// Mensaje enviado por el servidor, si lo hay
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Http { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Mensaje para el usuario: el del servidor o el genérico de la pantalla
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Http { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_reads_server_message() {
        let err = ApiError::from_status(400, r#"{"message":"Documento duplicado"}"#);
        assert_eq!(err.server_message(), Some("Documento duplicado"));
        assert_eq!(err.user_message("Error al guardar"), "Documento duplicado");
        assert_eq!(err.to_string(), "HTTP 400: Documento duplicado");
    }

    #[test]
    fn test_from_status_without_json_body() {
        let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
        assert_eq!(err.server_message(), None);
        assert_eq!(err.user_message("Error en login"), "Error en login");
        assert_eq!(err.to_string(), "HTTP 502: sin detalle");
    }

    #[test]
    fn test_network_error_uses_fallback() {
        let err = ApiError::Network("connection refused".into());
        assert_eq!(err.user_message("Error enviando correo"), "Error enviando correo");
        assert!(!err.is_not_found());
        assert!(ApiError::from_status(404, "").is_not_found());
    }
}
